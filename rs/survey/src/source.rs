use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::response::SurveyResponse;

/// Where survey responses come from. Implementations do the I/O; everything downstream is pure.
pub trait ResponseSource {
    fn load(&self) -> Result<Vec<SurveyResponse>>;
}

/// Reads a JSON array of responses from a file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResponseSource for JsonFileSource {
    fn load(&self) -> Result<Vec<SurveyResponse>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read responses from {}", self.path.display()))?;
        let responses: Vec<SurveyResponse> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse responses in {}", self.path.display()))?;
        debug!(
            "Loaded {} responses from {}",
            responses.len(),
            self.path.display()
        );
        Ok(responses)
    }
}

pub struct InMemorySource {
    responses: Vec<SurveyResponse>,
}

impl InMemorySource {
    pub fn new(responses: Vec<SurveyResponse>) -> Self {
        Self { responses }
    }
}

impl ResponseSource for InMemorySource {
    fn load(&self) -> Result<Vec<SurveyResponse>> {
        Ok(self.responses.clone())
    }
}
