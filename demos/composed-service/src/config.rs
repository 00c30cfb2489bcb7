use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const GOOD_URL: &str = "https://www.android.com";
const SECRET_URL: &str = "https://www.apple.com";

/// Top-level demo configuration, read from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// The one URL the stub client refuses
    pub secret_url: String,
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    pub label: String,
    /// Requested in order; the first URL seeds the chain
    pub urls: Vec<String>,
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let chain = |label: &str, urls: &[&str]| ChainConfig {
            label: label.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        };

        Self {
            secret_url: SECRET_URL.to_string(),
            chains: vec![
                chain("c1", &[GOOD_URL]),
                chain("c2", &[SECRET_URL]),
                chain("c3", &[GOOD_URL, GOOD_URL, GOOD_URL, SECRET_URL, GOOD_URL]),
                chain("c4", &[GOOD_URL; 5]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config = DemoConfig::from_toml(
            r#"
            secret_url = "https://blocked.example"

            [[chains]]
            label = "pair"
            urls = ["https://a.example", "https://b.example"]
            "#,
        )
        .unwrap();

        assert_eq!(config.secret_url, "https://blocked.example");
        assert_eq!(config.chains.len(), 1);
        assert_eq!(config.chains[0].label, "pair");
        assert_eq!(config.chains[0].urls[1], "https://b.example");
    }

    #[test]
    fn test_chains_default_to_empty() {
        let config = DemoConfig::from_toml(r#"secret_url = "x""#).unwrap();
        assert!(config.chains.is_empty());
    }

    #[test]
    fn test_missing_secret_url_is_an_error() {
        assert!(DemoConfig::from_toml("[[chains]]\nlabel = \"a\"\nurls = []").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let err = DemoConfig::load(Path::new("/nonexistent/tandem.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tandem.toml"));
    }

    #[test]
    fn test_default_mirrors_reference_chains() {
        let config = DemoConfig::default();
        let lens: Vec<usize> = config.chains.iter().map(|c| c.urls.len()).collect();
        assert_eq!(lens, vec![1, 1, 5, 5]);
        assert_eq!(config.chains[2].urls[3], config.secret_url);
    }
}
