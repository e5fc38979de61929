use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::gesture::GesturePolicy;
use crate::theme::ThemeMode;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct WindowConfig {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 412.0,
            height: 892.0,
        }
    }
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct TimingConfig {
    pub(crate) close_delay_ms: u64,
    pub(crate) snap_ms: u64,
    pub(crate) clock_tick_ms: u64,
    pub(crate) frame_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 300,
            snap_ms: 300,
            clock_tick_ms: 1000,
            frame_ms: 16,
        }
    }
}

impl TimingConfig {
    pub(crate) fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub(crate) fn snap(&self) -> Duration {
        Duration::from_millis(self.snap_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) debug: bool,
    pub(crate) theme: ThemeMode,
    pub(crate) window: WindowConfig,
    pub(crate) gestures: GesturePolicy,
    pub(crate) timing: TimingConfig,
}

/// `$POCKET_HOME_CONFIG`, falling back to `~/.config/pocket-home/config.json`.
pub(crate) fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os("POCKET_HOME_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("pocket-home/config.json")
}

/// Parse and validate a config document.
pub(crate) fn parse_config(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load the config file. A missing file yields the defaults.
pub(crate) fn load(path: &Path) -> Result<Config, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.gestures;
        positive("gestures.horizontal_jitter_limit", g.horizontal_jitter_limit)?;
        positive("gestures.close_commit_threshold", g.close_commit_threshold)?;
        positive("gestures.shade_arm_band", g.shade_arm_band)?;
        percent("gestures.shade_commit_progress", g.shade_commit_progress)?;
        percent("gestures.shade_reveal_progress", g.shade_reveal_progress)?;
        positive("window.width", self.window.width)?;
        positive("window.height", self.window.height)?;
        if self.timing.clock_tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "timing.clock_tick_ms",
                reason: "must be non-zero".to_string(),
            });
        }
        if self.timing.frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "timing.frame_ms",
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}

fn percent(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected 0..=100, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Config, ConfigError> {
        parse_config(input, Path::new("config.json"))
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let config = parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.gestures.close_commit_threshold, 150.0);
        assert_eq!(config.timing.close_delay(), Duration::from_millis(300));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"{
                "debug": true,
                "theme": "light",
                "gestures": { "close_commit_threshold": 220 },
                "timing": { "snap_ms": 120 }
            }"#,
        )
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.gestures.close_commit_threshold, 220.0);
        assert_eq!(config.gestures.horizontal_jitter_limit, 50.0);
        assert_eq!(config.timing.snap(), Duration::from_millis(120));
        assert_eq!(config.timing.close_delay_ms, 300);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse("{ debug: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn out_of_range_progress_rejected() {
        let err = parse(r#"{ "gestures": { "shade_commit_progress": 140 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => {
                assert_eq!(field, "gestures.shade_commit_progress")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_positive_threshold_rejected() {
        let err = parse(r#"{ "gestures": { "shade_arm_band": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "gestures.shade_arm_band", .. }));
    }

    #[test]
    fn zero_tick_rejected() {
        let err = parse(r#"{ "timing": { "clock_tick_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "timing.clock_tick_ms", .. }));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("pocket-home-does-not-exist/config.json");
        assert_eq!(load(&path).unwrap(), Config::default());
    }
}
