//! Transition configuration
//!
//! Every field has a default, so an empty file (or no file) is valid.
//!
//! ```toml
//! duration_secs = 0.35
//! easing = "ease-out"
//! scrim = { r = 0.0, g = 0.0, b = 0.0, a = 0.8 }
//!
//! [dismiss]
//! commit_fraction = 0.2
//! fling_velocity = 1000.0
//! damping_ratio = 1.0
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use lightbox_animation::Easing;
use lightbox_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a [`TransitionConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },
}

/// Timing and appearance of the gallery transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of both the present and dismiss animations, in seconds
    pub duration_secs: f32,
    /// Timing curve of the present animation
    pub easing: Easing,
    /// Scrim color at full presentation (its alpha is the final translucency)
    pub scrim: Color,
    /// Interactive dismissal tuning
    pub dismiss: DismissConfig,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            easing: Easing::EaseInOut,
            scrim: Color::white(0.0, 0.5),
            dismiss: DismissConfig::default(),
        }
    }
}

/// Interactive dismissal tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissConfig {
    /// Vertical drag, as a fraction of the viewport height, that commits on release
    pub commit_fraction: f32,
    /// Vertical release speed in points per second that commits regardless of distance
    pub fling_velocity: f32,
    /// Damping ratio of the closing spring (1.0 is critically damped)
    pub damping_ratio: f32,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            commit_fraction: 0.25,
            fling_velocity: 800.0,
            damping_ratio: 1.0,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: TransitionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded transition config");
        Ok(config)
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(
            "duration_secs",
            "a finite number of seconds >= 0",
            self.duration_secs,
            |v| v.is_finite() && v >= 0.0,
        )?;
        check("scrim.a", "between 0 and 1", self.scrim.a, |v| {
            (0.0..=1.0).contains(&v)
        })?;
        check(
            "dismiss.commit_fraction",
            "between 0 and 1",
            self.dismiss.commit_fraction,
            |v| v > 0.0 && v <= 1.0,
        )?;
        check(
            "dismiss.fling_velocity",
            "positive",
            self.dismiss.fling_velocity,
            |v| v.is_finite() && v > 0.0,
        )?;
        check(
            "dismiss.damping_ratio",
            "positive",
            self.dismiss.damping_ratio,
            |v| v.is_finite() && v > 0.0,
        )?;
        Ok(())
    }

    /// Animation length for both directions
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.duration_secs).unwrap_or_default()
    }
}

fn check(
    field: &'static str,
    expected: &'static str,
    value: f32,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = TransitionConfig::from_toml_str("").unwrap();
        assert_eq!(config, TransitionConfig::default());
        assert_eq!(config.duration(), Duration::from_secs(2));
        assert_eq!(config.scrim, Color::rgba(0.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_partial_document() {
        let config = TransitionConfig::from_toml_str(
            r#"
            duration_secs = 0.5
            easing = "linear"

            [dismiss]
            fling_velocity = 1200.0
            "#,
        )
        .unwrap();

        assert_eq!(config.duration_secs, 0.5);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.dismiss.fling_velocity, 1200.0);
        assert_eq!(config.dismiss.commit_fraction, 0.25);
    }

    #[test]
    fn test_scrim_alpha_defaults_to_opaque() {
        let config = TransitionConfig::from_toml_str("scrim = { r = 1.0, g = 1.0, b = 1.0 }")
            .unwrap();
        assert_eq!(config.scrim, Color::WHITE);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let err = TransitionConfig::from_toml_str("duration_secs = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "duration_secs",
                ..
            }
        ));

        let err = TransitionConfig::from_toml_str("[dismiss]\ncommit_fraction = 0.0").unwrap_err();
        assert!(err.to_string().starts_with("dismiss.commit_fraction"));
    }

    #[test]
    fn test_malformed_document() {
        let err = TransitionConfig::from_toml_str("duration_secs = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TransitionConfig::load("/nonexistent/lightbox.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
