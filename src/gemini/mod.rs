mod client;
pub use client::{ExtractionResult, extract_label};
