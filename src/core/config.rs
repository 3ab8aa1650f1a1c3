use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Rejects configurations where either required provider setting is blank.
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() || self.provider.base_url.trim().is_empty() {
            anyhow::bail!(
                "provider.api_key and provider.base_url must both be set in the configuration"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  api_key: "secret-key"
  base_url: "https://api.freecurrencyapi.com/v1/latest"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.api_key, "secret-key");
        assert_eq!(
            config.provider.base_url,
            "https://api.freecurrencyapi.com/v1/latest"
        );
        config.validate().expect("Config should be valid");
    }

    #[test]
    fn test_config_rejects_missing_field() {
        let yaml_str = r#"
provider:
  base_url: "https://api.freecurrencyapi.com/v1/latest"
"#;

        let result: Result<AppConfig, _> = serde_yaml::from_str(yaml_str);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api_key"));
    }

    #[test]
    fn test_validate_rejects_blank_settings() {
        let config = AppConfig {
            provider: ProviderConfig {
                api_key: "".to_string(),
                base_url: "https://api.freecurrencyapi.com/v1/latest".to_string(),
            },
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("provider.api_key"));
        assert!(err.contains("provider.base_url"));

        let config = AppConfig {
            provider: ProviderConfig {
                api_key: "secret-key".to_string(),
                base_url: "   ".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_path_reports_missing_file() {
        let result = AppConfig::load_from_path("/nonexistent/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
