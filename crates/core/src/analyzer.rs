use crate::error::SolutionError;
use crate::facts::parse_fact_document;
use crate::models::FactRecord;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

/// File the analyzer writes into its working directory.
pub const SUMMARY_FILE_NAME: &str = "semantic_summary.json";

/// External static-analysis collaborator: inspects a solution tree and emits
/// a structured fact list.
#[async_trait]
pub trait SolutionAnalyzer {
    async fn analyze(
        &self,
        solution_path: &Path,
        workdir: &Path,
    ) -> Result<Vec<FactRecord>, SolutionError>;
}

/// Runs the compiled .NET analyzer as a subprocess.
#[derive(Debug, Clone)]
pub struct DotnetAnalyzer {
    analyzer_dll: PathBuf,
    timeout: Duration,
}

impl DotnetAnalyzer {
    pub fn new(analyzer_dll: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            analyzer_dll: analyzer_dll.into(),
            timeout,
        }
    }
}

#[async_trait]
impl SolutionAnalyzer for DotnetAnalyzer {
    async fn analyze(
        &self,
        solution_path: &Path,
        workdir: &Path,
    ) -> Result<Vec<FactRecord>, SolutionError> {
        let run = Command::new("dotnet")
            .arg(&self.analyzer_dll)
            .arg(solution_path)
            .current_dir(workdir)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| SolutionError::AnalyzerTimeout(self.timeout))?
            .map_err(|error| {
                if error.kind() == ErrorKind::NotFound {
                    SolutionError::ToolMissing("dotnet runtime not found on PATH".to_string())
                } else {
                    SolutionError::Io(error)
                }
            })?;

        if !output.status.success() {
            return Err(SolutionError::AnalyzerFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        read_summary(workdir)
    }
}

/// Reads and parses the fact document the analyzer left in `workdir`.
pub fn read_summary(workdir: &Path) -> Result<Vec<FactRecord>, SolutionError> {
    let path = workdir.join(SUMMARY_FILE_NAME);
    if !path.exists() {
        return Err(SolutionError::MissingSummary(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(&path)?;
    Ok(parse_fact_document(&raw)?)
}
