pub mod analyzer;
pub mod backend;
pub mod chunking;
pub mod error;
pub mod facts;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod retrieval;
pub mod solution;

pub use analyzer::{read_summary, DotnetAnalyzer, SolutionAnalyzer, SUMMARY_FILE_NAME};
pub use backend::{BackendConfig, Generator, OllamaClient};
pub use chunking::chunk;
pub use error::{BackendError, CoreError, PipelineError, SolutionError};
pub use facts::{flatten_facts, parse_fact_document};
pub use models::{FactRecord, PipelineOptions, RawDocument, SolutionFingerprint};
pub use pipeline::{ComposedPrompt, DocCoordinator, GenerationOutcome};
pub use prompt::{
    build_prompt, NO_EXTRA_DOCS_PLACEHOLDER, SNIPPET_SEPARATOR, SUMMARY_BEGIN_MARKER,
    SUMMARY_END_MARKER,
};
pub use retrieval::{select_top_k, select_top_k_with, tokenize, LexicalOverlapScorer, ScoringStrategy};
pub use solution::{digest_bytes, find_solution_file, fingerprint_archive, unpack_archive};
