use crate::backend::Generator;
use crate::chunking::chunk;
use crate::error::{CoreError, PipelineError};
use crate::facts::flatten_facts;
use crate::models::{FactRecord, PipelineOptions, RawDocument};
use crate::prompt::build_prompt;
use crate::retrieval::select_top_k;

/// A prompt composed from facts and documents, with ranking counters for
/// logging.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub prompt: String,
    pub fact_summary: String,
    pub candidate_segments: usize,
    pub selected_segments: usize,
}

/// Result of a full generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub markdown: String,
    pub candidate_segments: usize,
    pub selected_segments: usize,
}

/// Composes analyzer facts and supplied documents into a prompt and hands it
/// to the generation backend.
pub struct DocCoordinator<G>
where
    G: Generator,
{
    generator: G,
    options: PipelineOptions,
}

impl<G> DocCoordinator<G>
where
    G: Generator + Send + Sync,
{
    pub fn new(generator: G, options: PipelineOptions) -> Result<Self, CoreError> {
        options.validate()?;
        Ok(Self { generator, options })
    }

    /// Pure composition step: flatten facts, chunk every document, retrieve
    /// the segments most relevant to the fact summary, assemble the prompt.
    pub fn compose_prompt(
        &self,
        records: &[FactRecord],
        documents: &[RawDocument],
    ) -> Result<ComposedPrompt, CoreError> {
        let fact_summary = flatten_facts(records);

        let mut candidates = Vec::new();
        for document in documents {
            candidates.extend(chunk(&document.text, self.options.chunk_max_chars)?);
        }

        let selected = if candidates.is_empty() {
            Vec::new()
        } else {
            select_top_k(&fact_summary, &candidates, self.options.retriever_top_k)?
        };

        Ok(ComposedPrompt {
            prompt: build_prompt(&fact_summary, &selected),
            fact_summary,
            candidate_segments: candidates.len(),
            selected_segments: selected.len(),
        })
    }

    /// Composes the prompt and calls the generation backend.
    ///
    /// Backend failures surface as [`PipelineError::Backend`], distinct from
    /// composition failures.
    pub async fn generate_documentation(
        &self,
        records: &[FactRecord],
        documents: &[RawDocument],
    ) -> Result<GenerationOutcome, PipelineError> {
        let composed = self.compose_prompt(records, documents)?;
        let markdown = self.generator.generate(&composed.prompt).await?;

        Ok(GenerationOutcome {
            markdown,
            candidate_segments: composed.candidate_segments,
            selected_segments: composed.selected_segments,
        })
    }
}
