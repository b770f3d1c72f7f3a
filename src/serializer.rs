//! Report output: fix outcomes as a text report, YAML or JSON, written to a file or stdout.

use crate::error::Result;
use crate::fixer::FixOutcome;
use anyhow::Context;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes fix outcomes as a YAML list.
///
/// # Errors
///
/// Returns [`crate::error::Error::Serialization`] if serialization fails.
pub fn serialize_yaml(outcomes: &[FixOutcome]) -> Result<String> {
    debug!("Serializing {} outcomes to YAML", outcomes.len());
    Ok(serde_yaml::to_string(outcomes)?)
}

/// Serializes fix outcomes as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`crate::error::Error::Serialization`] if serialization fails.
pub fn serialize_json(outcomes: &[FixOutcome]) -> Result<String> {
    debug!("Serializing {} outcomes to JSON", outcomes.len());
    Ok(serde_json::to_string_pretty(outcomes)?)
}

/// Renders fix outcomes as a plain text report.
///
/// Each outcome starts with a `// <id or declaration name>` header. Offered fixes are
/// followed by their documentation trivia; others by the reason no fix is offered.
pub fn render_text(outcomes: &[FixOutcome]) -> String {
    let mut report = String::new();

    for outcome in outcomes {
        let label = outcome.id.as_deref().unwrap_or(&outcome.declaration);
        report.push_str(&format!("// {}\n", label));

        match (&outcome.text, &outcome.reason) {
            (Some(text), _) if outcome.offered => report.push_str(text),
            (_, Some(reason)) => report.push_str(&format!("// no fix offered: {}\n", reason)),
            _ => report.push_str("// no fix offered\n"),
        }
        report.push('\n');
    }

    report
}

/// Writes string content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_to_file(content: &str, path: &Path) -> anyhow::Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{DocComment, DocNode};
    use tempfile::TempDir;

    fn offered() -> FixOutcome {
        FixOutcome {
            id: Some("save".to_string()),
            declaration: "Save".to_string(),
            offered: true,
            reason: None,
            comment: Some(DocComment::from_nodes(vec![DocNode::summary("Saves.")])),
            text: Some("/// <summary>\n/// Saves.\n/// </summary>\n".to_string()),
        }
    }

    fn refused() -> FixOutcome {
        FixOutcome {
            id: None,
            declaration: "ToString".to_string(),
            offered: false,
            reason: Some("`ToString` inherits its documentation".to_string()),
            comment: None,
            text: None,
        }
    }

    #[test]
    fn test_render_text_report() {
        let report = render_text(&[offered(), refused()]);
        assert_eq!(
            report,
            "// save\n/// <summary>\n/// Saves.\n/// </summary>\n\n\
             // ToString\n// no fix offered: `ToString` inherits its documentation\n\n"
        );
    }

    #[test]
    fn test_serialize_json_skips_empty_fields() {
        let json = serialize_json(&[refused()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["declaration"], "ToString");
        assert_eq!(parsed[0]["offered"], false);
        assert!(parsed[0].get("comment").is_none());
        assert!(parsed[0].get("id").is_none());
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_serialize_yaml_keeps_comment_structure() {
        let yaml = serialize_yaml(&[offered()]).unwrap();
        let parsed: Vec<FixOutcome> = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed, vec![offered()]);
        assert!(yaml.contains("kind: summary"));
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("reports").join("nested").join("fixes.yaml");

        write_to_file("test content", &file_path).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("fixes.json");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }
}
