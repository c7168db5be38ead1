use crate::error::CoreError;
use crate::models::FactRecord;

/// Parses the analyzer's JSON output into fact records.
///
/// The input must be an array of fact-shaped objects; anything else fails
/// with [`CoreError::MalformedFactDocument`] rather than producing a partial
/// record list.
pub fn parse_fact_document(raw: &str) -> Result<Vec<FactRecord>, CoreError> {
    serde_json::from_str(raw).map_err(|error| CoreError::MalformedFactDocument(error.to_string()))
}

/// Renders fact records as the flat text block used both as the retrieval
/// query and verbatim inside the final prompt.
///
/// Each record becomes a `Project:` line, a `File:` line, then `Classes:`,
/// `Methods:`, and `Comments:` lines only when non-empty, followed by a
/// blank separator line. Missing optional fields render as empty strings.
pub fn flatten_facts(records: &[FactRecord]) -> String {
    let mut lines = Vec::new();

    for record in records {
        lines.push(format!(
            "Project: {}",
            record.project.as_deref().unwrap_or("")
        ));
        lines.push(format!("File: {}", record.file.as_deref().unwrap_or("")));

        let classes = record.classes.as_deref().unwrap_or(&[]);
        if !classes.is_empty() {
            lines.push(format!("  Classes: {}", classes.join(", ")));
        }

        let methods = record.methods.as_deref().unwrap_or(&[]);
        if !methods.is_empty() {
            lines.push(format!("  Methods: {}", methods.join(", ")));
        }

        let comments = record.comments.as_deref().unwrap_or(&[]);
        if !comments.is_empty() {
            lines.push(format!("  Comments: {}", comments.join(" | ")));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{flatten_facts, parse_fact_document};
    use crate::error::CoreError;
    use crate::models::FactRecord;

    #[test]
    fn record_renders_fixed_block() {
        let records = vec![FactRecord {
            project: Some("P".to_string()),
            file: Some("F.cs".to_string()),
            classes: Some(vec!["A".to_string(), "B".to_string()]),
            methods: Some(Vec::new()),
            comments: Some(Vec::new()),
        }];

        let summary = flatten_facts(&records);
        assert!(summary.contains("Project: P\nFile: F.cs\n  Classes: A, B"));
        assert!(!summary.contains("Methods:"));
        assert!(!summary.contains("Comments:"));
    }

    #[test]
    fn comments_are_pipe_joined() {
        let records = vec![FactRecord {
            comments: Some(vec!["first note".to_string(), "second note".to_string()]),
            ..Default::default()
        }];

        let summary = flatten_facts(&records);
        assert!(summary.contains("  Comments: first note | second note"));
    }

    #[test]
    fn missing_optional_fields_render_empty() {
        let summary = flatten_facts(&[FactRecord::default()]);
        assert!(summary.starts_with("Project: \nFile: \n"));
    }

    #[test]
    fn records_are_separated_by_blank_lines() {
        let records = vec![
            FactRecord {
                project: Some("One".to_string()),
                ..Default::default()
            },
            FactRecord {
                project: Some("Two".to_string()),
                ..Default::default()
            },
        ];

        let summary = flatten_facts(&records);
        assert!(summary.contains("File: \n\nProject: Two"));
    }

    #[test]
    fn valid_document_parses_with_nulls_and_omissions() {
        let raw = r#"[
            {"Project": "P", "File": "F.cs", "Classes": null},
            {"Methods": ["Run"]}
        ]"#;

        let records = parse_fact_document(raw).expect("document should parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].project.as_deref(), Some("P"));
        assert!(records[0].classes.is_none());
        assert_eq!(records[1].methods.as_deref(), Some(&["Run".to_string()][..]));
    }

    #[test]
    fn non_array_document_is_malformed() {
        let result = parse_fact_document(r#"{"Project": "P"}"#);
        assert!(matches!(result, Err(CoreError::MalformedFactDocument(_))));
    }

    #[test]
    fn record_with_wrong_shape_is_malformed() {
        let result = parse_fact_document(r#"[{"Classes": "not-an-array"}]"#);
        assert!(matches!(result, Err(CoreError::MalformedFactDocument(_))));
    }
}
