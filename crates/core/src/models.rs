use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One analyzer record describing a single source file of the solution.
///
/// Field names follow the analyzer's JSON contract; every field is optional
/// and `null` arrays are treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FactRecord {
    pub project: Option<String>,
    pub file: Option<String>,
    pub classes: Option<Vec<String>>,
    pub methods: Option<Vec<String>>,
    pub comments: Option<Vec<String>>,
}

/// A decoded plain-text document supplied alongside the solution archive.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub text: String,
}

impl RawDocument {
    /// Decodes an uploaded file if it is a supported plain-text type.
    ///
    /// Only `.md` and `.txt` uploads are accepted; anything else returns
    /// `None` and is skipped by the caller. Invalid UTF-8 is replaced rather
    /// than rejected.
    pub fn from_upload(name: &str, bytes: &[u8]) -> Option<Self> {
        let lowered = name.to_lowercase();
        if !(lowered.ends_with(".md") || lowered.ends_with(".txt")) {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            text: String::from_utf8_lossy(bytes).into_owned(),
        })
    }
}

/// Identity of an unpacked solution archive, used for request logging.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionFingerprint {
    pub solution_path: String,
    pub archive_checksum: String,
    pub unpacked_at: DateTime<Utc>,
}

/// Tunables for the chunk-and-retrieve pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Packing target for document segments, in characters.
    pub chunk_max_chars: usize,
    /// Number of segments retrieved into the prompt.
    pub retriever_top_k: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            chunk_max_chars: 1_500,
            retriever_top_k: 8,
        }
    }
}

impl PipelineOptions {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.chunk_max_chars == 0 {
            return Err(CoreError::InvalidConfiguration(
                "chunk_max_chars must be positive".to_string(),
            ));
        }
        if self.retriever_top_k == 0 {
            return Err(CoreError::InvalidConfiguration(
                "retriever_top_k must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
