use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest precision honored by fixed formatting; beyond it digits are noise for `f64`.
pub const MAX_PRECISION: usize = 17;

pub const DEFAULT_TARGET_SIZE: f64 = 100.0;

/// Options for [`crate::normalize`].
///
/// Deserializes from a JSON object such as `{"precision": 2, "targetSize": 24}`; missing keys
/// take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Fractional digits of every number in the output.
    pub precision: usize,
    /// Size of the larger bounding-box side after scaling.
    pub target_size: f64,
    /// Resolve relative commands to absolute ones before anything else.
    pub absolute: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            precision: 0,
            target_size: DEFAULT_TARGET_SIZE,
            absolute: false,
        }
    }
}

impl NormalizeOptions {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_target_size(mut self, target_size: f64) -> Self {
        self.target_size = target_size;
        self
    }

    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.target_size.is_finite() && self.target_size > 0.0) {
            return Err(Error::InvalidOptions {
                message: format!("targetSize must be a positive number, got {}", self.target_size),
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(Error::InvalidOptions {
                message: format!(
                    "precision must be at most {MAX_PRECISION}, got {}",
                    self.precision
                ),
            });
        }
        Ok(())
    }
}
