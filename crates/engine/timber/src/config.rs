//! Engine configuration
//!
//! Loaded once at startup from a TOML file with the keys `break-delay`,
//! `max-breaks-per-cycle`, `mode`, `axe-types`, `log-types` and
//! `leaves-types`. Missing keys take the bundled defaults; a malformed file,
//! an unknown mode or an out-of-range number is an error and the engine must
//! not start.

use crate::{Catalog, Classification, Error, OperatingMode, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Length of one game tick
pub const TICK_DURATION: Duration = Duration::from_millis(50);

/// The bundled configuration file, written out when none exists
pub const DEFAULT_CONFIG: &str = include_str!("../config/timber.toml");

const DEFAULT_AXES: [&str; 6] = [
    "wooden_axe",
    "stone_axe",
    "iron_axe",
    "golden_axe",
    "diamond_axe",
    "netherite_axe",
];

const DEFAULT_LOGS: [&str; 10] = [
    "oak_log",
    "spruce_log",
    "birch_log",
    "jungle_log",
    "acacia_log",
    "dark_oak_log",
    "mangrove_log",
    "cherry_log",
    "crimson_stem",
    "warped_stem",
];

const DEFAULT_LEAVES: [&str; 10] = [
    "oak_leaves",
    "spruce_leaves",
    "birch_leaves",
    "jungle_leaves",
    "acacia_leaves",
    "dark_oak_leaves",
    "mangrove_leaves",
    "cherry_leaves",
    "azalea_leaves",
    "flowering_azalea_leaves",
];

/// Felling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimberConfig {
    /// Game ticks between two felling cycles
    #[serde(default = "default_break_delay")]
    pub break_delay: u32,

    /// Blocks processed per cycle at most
    #[serde(default = "default_max_breaks_per_cycle")]
    pub max_breaks_per_cycle: usize,

    /// Expansion table
    #[serde(default)]
    pub mode: OperatingMode,

    /// Names of felling tools
    #[serde(default = "default_axe_types")]
    pub axe_types: Vec<String>,

    /// Names of log blocks
    #[serde(default = "default_log_types")]
    pub log_types: Vec<String>,

    /// Names of leaf blocks
    #[serde(default = "default_leaves_types")]
    pub leaves_types: Vec<String>,
}

fn default_break_delay() -> u32 {
    1
}

fn default_max_breaks_per_cycle() -> usize {
    10
}

fn default_axe_types() -> Vec<String> {
    DEFAULT_AXES.iter().map(|s| s.to_string()).collect()
}

fn default_log_types() -> Vec<String> {
    DEFAULT_LOGS.iter().map(|s| s.to_string()).collect()
}

fn default_leaves_types() -> Vec<String> {
    DEFAULT_LEAVES.iter().map(|s| s.to_string()).collect()
}

impl Default for TimberConfig {
    fn default() -> Self {
        Self {
            break_delay: default_break_delay(),
            max_breaks_per_cycle: default_max_breaks_per_cycle(),
            mode: OperatingMode::default(),
            axe_types: default_axe_types(),
            log_types: default_log_types(),
            leaves_types: default_leaves_types(),
        }
    }
}

impl TimberConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TimberConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration file, writing the bundled default first if absent
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG)?;
            tracing::info!(path = %path.display(), "Wrote default configuration");
        }
        Self::load(path)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.break_delay == 0 {
            return Err(Error::InvalidConfig(
                "break-delay must be at least 1 tick".to_string(),
            ));
        }
        if self.max_breaks_per_cycle == 0 {
            return Err(Error::InvalidConfig(
                "max-breaks-per-cycle must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Wall-clock time between two felling cycles
    pub fn tick_interval(&self) -> Duration {
        TICK_DURATION * self.break_delay
    }

    /// Resolve the configured material names against a catalog
    pub fn classification(&self, catalog: &Catalog) -> Classification {
        Classification::resolve(
            catalog,
            self.axe_types.as_slice(),
            self.log_types.as_slice(),
            self.leaves_types.as_slice(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;

    #[test]
    fn test_bundled_file_matches_defaults() {
        let parsed = TimberConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, TimberConfig::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = TimberConfig::from_toml_str("mode = \"full\"").unwrap();
        assert_eq!(config.mode, OperatingMode::Full);
        assert_eq!(config.break_delay, 1);
        assert_eq!(config.max_breaks_per_cycle, 10);
        assert_eq!(config.axe_types.len(), 6);
    }

    #[test]
    fn test_all_keys() {
        let config = TimberConfig::from_toml_str(
            r#"
            break-delay = 4
            max-breaks-per-cycle = 25
            mode = "FULL_WITHOUT_LEAVES"
            axe-types = ["iron_axe"]
            log-types = ["birch_log"]
            leaves-types = []
            "#,
        )
        .unwrap();
        assert_eq!(config.break_delay, 4);
        assert_eq!(config.max_breaks_per_cycle, 25);
        assert_eq!(config.mode, OperatingMode::FullWithoutLeaves);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert!(config.leaves_types.is_empty());
    }

    #[test]
    fn test_unknown_mode_is_fatal() {
        let err = TimberConfig::from_toml_str("mode = \"sideways\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("unknown mode: sideways"));
    }

    #[test]
    fn test_malformed_list_is_fatal() {
        let err = TimberConfig::from_toml_str("log-types = \"oak_log\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        let err = TimberConfig::from_toml_str("axe-types = [1, 2]").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_zero_values_rejected() {
        let err = TimberConfig::from_toml_str("break-delay = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = TimberConfig::from_toml_str("max-breaks-per-cycle = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(TimberConfig::from_toml_str("break-delay = -1").is_err());
    }

    #[test]
    fn test_classification_drops_unknown_names() {
        let config = TimberConfig {
            log_types: vec!["oak_log".into(), "plastic_log".into()],
            ..TimberConfig::default()
        };
        let classes = config.classification(&Catalog::vanilla());
        assert_eq!(classes.logs(), &[Material::new("OAK_LOG")]);
        assert_eq!(classes.tools().len(), 6);
        assert_eq!(classes.leaves().len(), 10);
    }

    #[test]
    fn test_load_or_init_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugins").join("timber.toml");
        let config = TimberConfig::load_or_init(&path).unwrap();
        assert_eq!(config, TimberConfig::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_load_or_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timber.toml");
        std::fs::write(&path, "max-breaks-per-cycle = 3\n").unwrap();
        let config = TimberConfig::load_or_init(&path).unwrap();
        assert_eq!(config.max_breaks_per_cycle, 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TimberConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
