/// Separator line placed between retrieved snippets in the prompt.
pub const SNIPPET_SEPARATOR: &str = "\n\n---\n";

/// Placeholder emitted when no usable documents were supplied.
pub const NO_EXTRA_DOCS_PLACEHOLDER: &str = "(no extra docs provided)";

/// Markers bounding the structured-fact region so the generation backend can
/// locate it unambiguously.
pub const SUMMARY_BEGIN_MARKER: &str = "---BEGIN SEMANTIC SUMMARY---";
pub const SUMMARY_END_MARKER: &str = "---END SEMANTIC SUMMARY---";

/// Assembles the instruction text sent to the generation backend.
///
/// Pure string construction: a fixed preamble, the selected snippets (or the
/// explicit placeholder), the fact summary verbatim between its markers, and
/// a fixed task list. Same inputs always yield the same prompt.
pub fn build_prompt(fact_summary: &str, selected_segments: &[String]) -> String {
    let snippets = if selected_segments.is_empty() {
        NO_EXTRA_DOCS_PLACEHOLDER.to_string()
    } else {
        selected_segments.join(SNIPPET_SEPARATOR)
    };

    format!(
        "You are a technical writer.\n\
         Goal: Produce business-facing documentation (audience: PMs, QA, leadership).\n\
         \n\
         Existing documentation snippets (authoritative, prefer these when conflicts arise):\n\
         {snippets}\n\
         \n\
         Extracted semantic summary (from code analysis):\n\
         {begin}\n\
         {fact_summary}\n\
         {end}\n\
         \n\
         Tasks:\n\
         1) Write a cohesive overview: problem solved, core capabilities, key modules, and business value.\n\
         2) Resolve conflicts in favor of the existing snippets (if any).\n\
         3) List unclear areas under \"Open Questions\".\n\
         4) Keep it concise and executive-friendly (~800-1200 words).\n",
        snippets = snippets,
        begin = SUMMARY_BEGIN_MARKER,
        fact_summary = fact_summary,
        end = SUMMARY_END_MARKER,
    )
}
