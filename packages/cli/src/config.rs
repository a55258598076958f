use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokenswap_providers::{ProviderRegistry, StaticProvider};

pub const DEFAULT_CONFIG_NAME: &str = "tokenswap.config.json";

/// Tokenswap configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Prefix that introduces a token, e.g. `https://token.wordpress.org/`
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// Fixed values keyed by `namespace/name`
    #[serde(default)]
    pub values: BTreeMap<String, String>,

    /// File extensions swapped when the input is a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_url_prefix() -> String {
    "https://token.wordpress.org/".to_string()
}

fn default_extensions() -> Vec<String> {
    ["html", "htm", "json", "txt", "md"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
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

    /// Prefix from the command line if given, else from config
    pub fn url_prefix<'a>(&'a self, cli_prefix: Option<&'a str>) -> &'a str {
        cli_prefix.unwrap_or(&self.url_prefix)
    }

    /// Built-in providers, then configured values, then `--set` assignments
    pub fn registry(&self, assignments: &[String]) -> anyhow::Result<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for (key, value) in &self.values {
            registry.add_provider(Box::new(StaticProvider::new(key.as_str(), value.as_str())?));
        }

        for assignment in assignments {
            registry.add_provider(Box::new(StaticProvider::from_assignment(assignment)?));
        }

        Ok(registry)
    }

    /// Whether a file should be processed when walking a directory
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            values: BTreeMap::new(),
            extensions: default_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenswap_parser::parse_token_contents;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "urlPrefix": "https://example.com/",
            "values": { "core/site-title": "My Site" },
            "extensions": ["html"]
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.url_prefix, "https://example.com/");
        assert_eq!(config.values["core/site-title"], "My Site");
        assert_eq!(config.extensions, vec!["html"]);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url_prefix, "https://token.wordpress.org/");
        assert!(config.values.is_empty());
        assert!(config.accepts(Path::new("index.HTML")));
        assert!(!config.accepts(Path::new("logo.png")));
        assert!(!config.accepts(Path::new("README")));
    }

    #[test]
    fn test_load_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_string_lossy().to_string();
        assert_eq!(Config::load(&cwd).unwrap(), Config::default());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "urlPrefix": "tok:" }"#,
        )
        .unwrap();
        assert_eq!(Config::load(&cwd).unwrap().url_prefix, "tok:");

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();
        assert!(Config::load(&cwd).is_err());
    }

    #[test]
    fn test_assignments_override_values() {
        let mut config = Config::default();
        config.values.insert("core/site-title".to_string(), "From config".to_string());

        let registry = config
            .registry(&["core/site-title=From flag".to_string()])
            .unwrap();
        let token = parse_token_contents("core/site-title").unwrap();
        assert_eq!(registry.resolve(&token), Some("From flag".to_string()));

        assert!(config.registry(&["no-equals".to_string()]).is_err());
    }

    #[test]
    fn test_cli_prefix_wins() {
        let config = Config::default();
        assert_eq!(config.url_prefix(Some("tok:")), "tok:");
        assert_eq!(config.url_prefix(None), "https://token.wordpress.org/");
    }
}
