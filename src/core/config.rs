use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// An inclusive [min, max] range an input is clamped into before the
/// projection engine is invoked.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Values used when a projection argument is not given on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct InputDefaults {
    #[serde(default = "default_amount")]
    pub amount: f64,
    #[serde(default = "default_rate")]
    pub rate: f64,
    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_amount() -> f64 {
    1000.0
}

fn default_rate() -> f64 {
    12.0
}

fn default_years() -> u32 {
    10
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            amount: default_amount(),
            rate: default_rate(),
            years: default_years(),
        }
    }
}

/// Clamping ranges for the three projection inputs. The defaults mirror the
/// slider ranges of the input form this tool grew out of.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct InputBounds {
    #[serde(default = "default_amount_bounds")]
    pub amount: Bounds<f64>,
    #[serde(default = "default_rate_bounds")]
    pub rate: Bounds<f64>,
    #[serde(default = "default_years_bounds")]
    pub years: Bounds<u32>,
}

fn default_amount_bounds() -> Bounds<f64> {
    Bounds {
        min: 100.0,
        max: 1_000_000.0,
    }
}

fn default_rate_bounds() -> Bounds<f64> {
    Bounds {
        min: 1.0,
        max: 20.0,
    }
}

fn default_years_bounds() -> Bounds<u32> {
    Bounds { min: 1, max: 40 }
}

impl Default for InputBounds {
    fn default() -> Self {
        InputBounds {
            amount: default_amount_bounds(),
            rate: default_rate_bounds(),
            years: default_years_bounds(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Display label for money values. No conversion is performed.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub bounds: InputBounds,
    /// Directory PDF reports are written to. Defaults to the current
    /// working directory.
    pub export_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            defaults: InputDefaults::default(),
            bounds: InputBounds::default(),
            export_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to the
    /// built-in defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "fvcast", "fvcast")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_config() {
        let yaml_str = r#"
currency: "USD"
defaults:
  amount: 2500.0
  rate: 9.5
  years: 15
bounds:
  amount: { min: 50.0, max: 500000.0 }
  rate: { min: 0.5, max: 30.0 }
  years: { min: 1, max: 50 }
export_dir: "/tmp/reports"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.defaults.amount, 2500.0);
        assert_eq!(config.defaults.rate, 9.5);
        assert_eq!(config.defaults.years, 15);
        assert_eq!(
            config.bounds.amount,
            Bounds {
                min: 50.0,
                max: 500000.0
            }
        );
        assert_eq!(config.bounds.rate, Bounds { min: 0.5, max: 30.0 });
        assert_eq!(config.bounds.years, Bounds { min: 1, max: 50 });
        assert_eq!(config.export_dir.as_deref(), Some("/tmp/reports"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig = serde_yaml::from_str("currency: \"EUR\"").unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.defaults.amount, 1000.0);
        assert_eq!(config.defaults.rate, 12.0);
        assert_eq!(config.defaults.years, 10);
        assert_eq!(config.bounds.years, Bounds { min: 1, max: 40 });
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn partial_bounds_section_keeps_remaining_defaults() {
        let yaml_str = r#"
bounds:
  rate: { min: 0.0, max: 25.0 }
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.bounds.rate, Bounds { min: 0.0, max: 25.0 });
        assert_eq!(
            config.bounds.amount,
            Bounds {
                min: 100.0,
                max: 1_000_000.0
            }
        );
    }

    #[test]
    fn clamp_applies_each_edge() {
        let bounds = Bounds { min: 1.0, max: 20.0 };
        assert_eq!(bounds.clamp(0.5), 1.0);
        assert_eq!(bounds.clamp(12.0), 12.0);
        assert_eq!(bounds.clamp(99.0), 20.0);
    }
}
