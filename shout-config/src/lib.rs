use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ID: &str = "shout";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SHOUT_CONFIG";

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ShoutConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Time in milliseconds the banner takes to slide in.
    #[serde(default = "default_appear_duration_ms")]
    pub appear_duration_ms: u64,
    /// Time in milliseconds the banner takes to collapse when dismissed by timer or tap.
    #[serde(default = "default_dismiss_duration_ms")]
    pub dismiss_duration_ms: u64,
    /// Time in milliseconds the banner takes to settle after a drag is released.
    #[serde(default = "default_settle_duration_ms")]
    pub settle_duration_ms: u64,
    /// Downward drag distance after which the banner stretches with damping.
    #[serde(default = "default_overshoot_threshold")]
    pub overshoot_threshold: f32,
    /// Divisor applied to the drag distance once past `overshoot_threshold`.
    #[serde(default = "default_overshoot_damping")]
    pub overshoot_damping: f32,
    /// Upward drag distance that dismisses the banner on release.
    #[serde(default = "default_dismiss_drag_threshold")]
    pub dismiss_drag_threshold: f32,
    /// Fully shown banner height.
    #[serde(default = "default_banner_height")]
    pub banner_height: f32,
    /// Width of the host screen the banner spans.
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
    /// Display time in milliseconds used when a request doesn't carry one. 0 never auto-dismisses.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

impl Default for ShoutConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            appear_duration_ms: default_appear_duration_ms(),
            dismiss_duration_ms: default_dismiss_duration_ms(),
            settle_duration_ms: default_settle_duration_ms(),
            overshoot_threshold: default_overshoot_threshold(),
            overshoot_damping: default_overshoot_damping(),
            dismiss_drag_threshold: default_dismiss_drag_threshold(),
            banner_height: default_banner_height(),
            screen_width: default_screen_width(),
            default_duration_ms: default_duration_ms(),
        }
    }
}

impl ShoutConfig {
    pub fn appear_duration(&self) -> Duration {
        Duration::from_millis(self.appear_duration_ms)
    }

    pub fn dismiss_duration(&self) -> Duration {
        Duration::from_millis(self.dismiss_duration_ms)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    /// Default config file location, `$XDG_CONFIG_HOME/shout/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(ID).join("config.toml"))
    }

    /// Parse a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(why) => {
                tracing::error!(?why, "config load error, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.overshoot_damping <= 0.0 {
            return Err(ConfigError::Invalid("overshoot_damping must be positive"));
        }
        if self.banner_height <= 0.0 || self.screen_width <= 0.0 {
            return Err(ConfigError::Invalid("banner dimensions must be positive"));
        }
        if self.overshoot_threshold < 0.0 || self.dismiss_drag_threshold < 0.0 {
            return Err(ConfigError::Invalid("drag thresholds must not be negative"));
        }
        Ok(())
    }
}

/// Errors loading [`ShoutConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Reading the file failed
    Io(String),
    /// The file is not valid TOML for this config
    Parse(String),
    /// A value is out of range
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value helpers for serde
const fn default_version() -> u32 {
    CONFIG_VERSION
}

const fn default_appear_duration_ms() -> u64 {
    350
}

const fn default_dismiss_duration_ms() -> u64 {
    350
}

const fn default_settle_duration_ms() -> u64 {
    200
}

const fn default_overshoot_threshold() -> f32 {
    12.0
}

const fn default_overshoot_damping() -> f32 {
    25.0
}

const fn default_dismiss_drag_threshold() -> f32 {
    5.0
}

const fn default_banner_height() -> f32 {
    80.0
}

const fn default_screen_width() -> f32 {
    375.0
}

const fn default_duration_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ShoutConfig::default();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.appear_duration(), Duration::from_millis(350));
        assert_eq!(config.dismiss_duration(), Duration::from_millis(350));
        assert_eq!(config.settle_duration(), Duration::from_millis(200));
        assert_eq!(config.overshoot_threshold, 12.0);
        assert_eq!(config.overshoot_damping, 25.0);
        assert_eq!(config.dismiss_drag_threshold, 5.0);
        assert_eq!(config.banner_height, 80.0);
        assert_eq!(config.default_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_config_serialization() {
        let config = ShoutConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("appear_duration_ms"));
        assert!(json.contains("settle_duration_ms"));
        assert!(json.contains("overshoot_damping"));
        assert!(json.contains("banner_height"));
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        // Partial file: only timings overridden
        let partial = r#"
            appear_duration_ms = 500
            settle_duration_ms = 100
        "#;

        let config: ShoutConfig = toml::from_str(partial).unwrap();

        assert_eq!(config.appear_duration_ms, 500);
        assert_eq!(config.settle_duration_ms, 100);
        assert_eq!(config.dismiss_duration_ms, 350);
        assert_eq!(config.overshoot_threshold, 12.0);
        assert_eq!(config.banner_height, 80.0);
    }

    #[test]
    fn test_config_deserialization_full() {
        let full_config_json = r#"{
            "version": 1,
            "appear_duration_ms": 300,
            "dismiss_duration_ms": 250,
            "settle_duration_ms": 150,
            "overshoot_threshold": 10.0,
            "overshoot_damping": 20.0,
            "dismiss_drag_threshold": 8.0,
            "banner_height": 96.0,
            "screen_width": 1280.0,
            "default_duration_ms": 0
        }"#;

        let config: ShoutConfig = serde_json::from_str(full_config_json).unwrap();

        assert_eq!(config.appear_duration_ms, 300);
        assert_eq!(config.dismiss_duration_ms, 250);
        assert_eq!(config.overshoot_damping, 20.0);
        assert_eq!(config.banner_height, 96.0);
        assert_eq!(config.screen_width, 1280.0);
        assert_eq!(config.default_duration(), Duration::ZERO);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ShoutConfig::load(Path::new("/nonexistent/shout/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("shout-config-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "banner_height = 96.0\ndefault_duration_ms = 0\n").unwrap();

        let config = ShoutConfig::load(&path).unwrap();
        assert_eq!(config.banner_height, 96.0);
        assert_eq!(config.default_duration(), Duration::ZERO);
        assert_eq!(config.appear_duration_ms, 350);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let dir = std::env::temp_dir().join(format!("shout-config-invalid-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "overshoot_damping = 0.0\n").unwrap();

        let err = ShoutConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid("overshoot_damping must be positive");
        assert!(err.to_string().contains("overshoot_damping"));
    }
}
