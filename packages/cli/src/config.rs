use anyhow::Context;
use quire_content::{DocumentContent, Heading, ListElem, Paragraph};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "quire.config.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Quire configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Maximum log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Attach the GUI observer
    #[serde(default = "default_gui")]
    pub gui: bool,

    /// Names of collaborator observers to attach
    #[serde(default = "default_collaborators")]
    pub collaborators: Vec<String>,

    /// JSON file holding the initial document content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_gui() -> bool {
    true
}

fn default_collaborators() -> Vec<String> {
    vec!["Anonymous".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Initial document content: the configured file, or the built-in example
    pub fn load_content(&self, cwd: &str) -> anyhow::Result<DocumentContent> {
        match &self.content {
            Some(path) => {
                let path = PathBuf::from(cwd).join(path);
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("Cannot read content file {}", path.display()))?;
                let content = serde_json::from_str(&source)
                    .with_context(|| format!("Invalid content file {}", path.display()))?;
                Ok(content)
            }
            None => Ok(example_content()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            gui: default_gui(),
            collaborators: default_collaborators(),
            content: None,
        }
    }
}

/// Sample document used by `demo` and `init`
pub fn example_content() -> DocumentContent {
    DocumentContent::new(vec![
        Paragraph::new("Intro").into(),
        Heading::with_items(
            "H1",
            1,
            vec![
                Paragraph::new("Inside").into(),
                ListElem::from_texts(["Item 1", "Item 2"]).into(),
            ],
        )
        .into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "logLevel": "debug",
            "gui": false,
            "collaborators": ["alice", "bob"],
            "content": "doc.json"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.gui);
        assert_eq!(config.collaborators, vec!["alice", "bob"]);
        assert_eq!(config.content, Some("doc.json".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert!(config.gui);
        assert_eq!(config.collaborators, vec!["Anonymous"]);
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_content_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        std::fs::write(
            dir.path().join("doc.json"),
            r#"{ "items": [ { "type": "paragraph", "text": "From disk" } ] }"#,
        )
        .unwrap();

        let config = Config {
            content: Some("doc.json".to_string()),
            ..Config::default()
        };
        let content = config.load_content(cwd).unwrap();

        assert_eq!(content, DocumentContent::new(vec![Paragraph::new("From disk").into()]));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();

        assert!(Config::load(dir.path().to_str().unwrap()).is_err());
    }
}
