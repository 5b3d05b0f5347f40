use crate::leveling::{Category, FormulaParams};
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub leveling: LevelingSettings,
    pub points: PointsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelingSettings {
    /// Per-category formula overrides keyed by category name
    /// (e.g. `stars`, `pull_requests`). Applied on top of the built-ins.
    pub overrides: HashMap<String, FormulaParams>,
}

/// Point awards used by the profile report totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsSettings {
    pub level_base: f64,
    pub badge_common: f64,
    pub badge_rare: f64,
    pub badge_epic: f64,
    pub badge_legendary: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "GitQuest".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            leveling: LevelingSettings {
                overrides: HashMap::new(),
            },
            points: PointsSettings {
                level_base: 100.0,
                badge_common: 50.0,
                badge_rare: 150.0,
                badge_epic: 400.0,
                badge_legendary: 1000.0,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("GITQUEST"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, params) in &self.leveling.overrides {
            let category = Category::from_str(name)
                .ok_or_else(|| format!("unknown category in overrides: {}", name))?;
            params
                .validate()
                .map_err(|reason| format!("{}: {}", category, reason))?;
        }

        let p = &self.points;
        if p.level_base <= 0.0 {
            return Err(format!("points.level_base must be positive, got {}", p.level_base));
        }
        for (label, award) in [
            ("badge_common", p.badge_common),
            ("badge_rare", p.badge_rare),
            ("badge_epic", p.badge_epic),
            ("badge_legendary", p.badge_legendary),
        ] {
            if award < 0.0 {
                return Err(format!("points.{} must be non-negative, got {}", label, award));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_override_category_fails_validation() {
        let mut settings = Settings::default();
        settings.leveling.overrides.insert(
            "not_a_category".to_string(),
            FormulaParams::new(5.0, 1.2, 0.0, 10),
        );
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_override_params_fail_validation() {
        let mut settings = Settings::default();
        settings
            .leveling
            .overrides
            .insert("stars".to_string(), FormulaParams::new(0.0, 1.2, 0.0, 10));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_points_fail_validation() {
        let mut settings = Settings::default();
        settings.points.badge_epic = -1.0;
        assert!(settings.validate().is_err());
    }
}
