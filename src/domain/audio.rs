use std::path::Path;

/// One complete audio payload as received from the client, plus the
/// extension hint taken from the uploaded filename. Owned by a single
/// pipeline run and dropped when it finishes.
#[derive(Debug, Clone)]
pub struct AudioSource {
    pub data: Vec<u8>,
    pub extension: Option<String>,
}

impl AudioSource {
    pub fn new(data: Vec<u8>, extension: Option<String>) -> Self {
        Self { data, extension }
    }

    pub fn from_upload(filename: &str, data: Vec<u8>) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        Self { data, extension }
    }
}
