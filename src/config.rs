//! Generator settings and the fixed phrases used in generated text.

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Line ending used for every generated line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineEnding {
    /// The line ending text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Fixed phrases spliced into generated documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    /// Lead-in for event summaries
    pub event_prefix: String,
    /// Text before the task reference in awaitable return documentation
    pub task_return_lead: String,
    /// Text after the task reference in awaitable return documentation
    pub task_return_trail: String,
    /// Cross-reference target for a non-generic task
    pub task_cref: String,
    /// Cross-reference target for a generic task
    pub generic_task_cref: String,
    /// Object of the indexer summary sentence
    pub indexer_summary_tail: String,
    /// Return documentation for indexers
    pub indexer_returns: String,
    /// Lead-in for constructor summaries
    pub constructor_lead: String,
    /// Lead-in for destructor summaries
    pub destructor_lead: String,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            event_prefix: "Occurs when ".to_string(),
            task_return_lead: "A ".to_string(),
            task_return_trail: " representing the asynchronous operation.".to_string(),
            task_cref: "Task".to_string(),
            generic_task_cref: "Task{TResult}".to_string(),
            indexer_summary_tail: "the element at the specified index".to_string(),
            indexer_returns: "The element at the specified index.".to_string(),
            constructor_lead: "Initializes a new instance of the ".to_string(),
            destructor_lead: "Finalizes an instance of the ".to_string(),
        }
    }
}

/// Generator settings, loadable from a YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Line ending for generated documentation
    pub line_ending: LineEnding,
    /// Simple names the convention oracle treats as awaitable
    pub awaitable_types: Vec<String>,
    /// Whether method summaries inflect their leading verb (`Get` → `Gets`)
    pub inflect_method_verbs: bool,
    /// Fixed phrases
    pub resources: Resources,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            awaitable_types: vec!["Task".to_string(), "ValueTask".to_string()],
            inflect_method_verbs: true,
            resources: Resources::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a file, choosing JSON for `.json` and YAML otherwise.
    ///
    /// Fields missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not deserialize.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON settings in {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML settings in {}", path.display()))?
        };

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.line_ending.as_str(), "\n");
        assert!(settings.inflect_method_verbs);
        assert_eq!(settings.resources.event_prefix, "Occurs when ");
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docfill.yaml");
        fs::write(
            &path,
            "line_ending: crlf\nresources:\n  event_prefix: \"Raised when \"\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.line_ending, LineEnding::Crlf);
        assert_eq!(settings.resources.event_prefix, "Raised when ");
        assert_eq!(settings.resources.task_cref, "Task");
        assert_eq!(settings.awaitable_types, vec!["Task", "ValueTask"]);
    }

    #[test]
    fn test_load_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docfill.json");
        fs::write(
            &path,
            r#"{"inflect_method_verbs": false, "awaitable_types": ["Future"]}"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(!settings.inflect_method_verbs);
        assert_eq!(settings.awaitable_types, vec!["Future"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Settings::load(&temp_dir.path().join("absent.yaml")).is_err());
    }
}
