mod extraction_pipeline;

pub use extraction_pipeline::{ExtractionPipeline, PipelineError, PipelineResult};
