const MAX_PREVIEW_LENGTH: usize = 80;

/// Transcripts carry whatever the user dictated into a form: names,
/// emails, phone numbers. Log lines get a truncated preview with digit
/// runs masked, never the full text.
pub fn transcript_preview(transcript: &str) -> String {
    let trimmed = transcript.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let masked: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_digit() { '#' } else { c })
        .collect();

    let total_chars = masked.chars().count();
    if total_chars > MAX_PREVIEW_LENGTH {
        let prefix: String = masked.chars().take(MAX_PREVIEW_LENGTH).collect();
        format!("{}... ({} chars total)", prefix, total_chars)
    } else {
        masked
    }
}
