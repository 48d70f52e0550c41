use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the cross-country GDP dataset (GrowthDJ)
pub const DEFAULT_GDP_URL: &str =
    "https://vincentarelbundock.github.io/Rdatasets/csv/AER/GrowthDJ.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub datasets: DatasetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory where rendered charts are written
    pub output_dir: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsConfig {
    pub gdp_url: String,
    #[serde(default)]
    pub museum_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                output_dir: PathBuf::from("."),
                image_width: 1000,
                image_height: 1000,
                color: true,
            },
            datasets: DatasetsConfig {
                gdp_url: DEFAULT_GDP_URL.to_string(),
                museum_file: None,
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.image_width == 0 || self.general.image_height == 0 {
            return Err(AppError::System(
                "Image dimensions must be non-zero".to_string(),
            ));
        }

        if self.datasets.gdp_url.is_empty() {
            return Err(AppError::System("GDP dataset URL cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vistat")
            .join("config.toml")
    }

    /// Pixel size of rendered charts
    pub fn image_size(&self) -> (u32, u32) {
        (self.general.image_width, self.general.image_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_image_size_is_rejected() {
        let mut config = Config::default();
        config.general.image_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.datasets.gdp_url, DEFAULT_GDP_URL);
        assert_eq!(parsed.general.image_width, 1000);
    }
}
