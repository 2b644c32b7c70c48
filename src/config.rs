//! Engine settings, loadable from TOML.
//!
//! ```toml
//! variable = "x"
//!
//! [quadrature]
//! lower = 0.0
//! upper = 1.0
//! subintervals = 100
//!
//! [limit]
//! infinity_probe = 1e6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::EngineError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Variable used when an operation is not given one.
    pub variable: String,
    pub quadrature: QuadratureConfig,
    pub limit: LimitConfig,
}

/// Interval and resolution of the numeric integration fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    pub lower: f64,
    pub upper: f64,
    pub subintervals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Finite stand-in for `inf`; `-inf` uses its negation.
    pub infinity_probe: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            variable: "x".to_string(),
            quadrature: QuadratureConfig::default(),
            limit: LimitConfig::default(),
        }
    }
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        QuadratureConfig {
            lower: 0.0,
            upper: 1.0,
            subintervals: 100,
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        LimitConfig {
            infinity_probe: 1e6,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let variable = self.variable.trim();
        if variable.is_empty() || !variable.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::format(format!(
                "variable must be a plain name such as `x`, got `{}`",
                self.variable
            )));
        }

        let q = &self.quadrature;
        if q.subintervals < 2 || q.subintervals % 2 != 0 {
            return Err(EngineError::format(format!(
                "quadrature.subintervals must be even and at least 2, got {}",
                q.subintervals
            )));
        }
        if !q.lower.is_finite() || !q.upper.is_finite() || q.lower == q.upper {
            return Err(EngineError::format(format!(
                "quadrature interval [{}, {}] is empty or not finite",
                q.lower, q.upper
            )));
        }

        let probe = self.limit.infinity_probe;
        if !probe.is_finite() || probe <= 0.0 {
            return Err(EngineError::format(format!(
                "limit.infinity_probe must be a positive finite number, got {probe}"
            )));
        }
        Ok(())
    }
}
