use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid fact document: {0}")]
    MalformedFactDocument(String),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid zip archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("no solution descriptor found under {0}")]
    MissingSolution(String),

    #[error("analyzer tool missing: {0}")]
    ToolMissing(String),

    #[error("analyzer failed: {0}")]
    AnalyzerFailed(String),

    #[error("analyzer timed out after {0:?}")]
    AnalyzerTimeout(std::time::Duration),

    #[error("analyzer produced no summary: {0}")]
    MissingSummary(String),

    #[error(transparent)]
    Facts(#[from] CoreError),
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid response from {backend}: {details}")]
    BackendResponse { backend: String, details: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("generation backend error: {0}")]
    Backend(#[from] BackendError),
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
