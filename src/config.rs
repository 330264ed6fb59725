use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Display defaults, read from an optional `torrentinfo.toml` in the
/// working directory. Command-line flags take precedence over these.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub indent: String,
    pub colour: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            colour: true,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "torrentinfo.toml";
        if Path::new(config_path).exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.indent, "    ");
        assert!(config.colour);
    }

    #[test]
    fn test_partial_toml_merges_defaults() {
        let config: Config = toml::from_str("colour = false").unwrap();
        assert_eq!(config.indent, "    ");
        assert!(!config.colour);
    }
}
