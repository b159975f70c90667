use std::path::Path;

use anyhow::{Context, Result};

/// Read a raw transcript file into memory
pub fn read_transcript(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {:?}", path))
}
