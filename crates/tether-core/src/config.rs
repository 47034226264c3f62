//! Layout configuration.

use crate::errors::LayoutError;

/// Options for a layout engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Standard spacing unit between adjacent elements, in points
    pub system_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            system_spacing: Self::DEFAULT_SYSTEM_SPACING,
        }
    }
}

impl LayoutConfig {
    pub const DEFAULT_SYSTEM_SPACING: f64 = 8.0;

    pub fn with_system_spacing(mut self, spacing: f64) -> Self {
        self.system_spacing = spacing;
        self
    }

    /// Reject spacing values no engine could use.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.system_spacing.is_finite() {
            return Err(LayoutError::InvalidConfig {
                reason: format!("system spacing must be finite, got {}", self.system_spacing),
            });
        }
        if self.system_spacing < 0.0 {
            return Err(LayoutError::InvalidConfig {
                reason: format!(
                    "system spacing must not be negative, got {}",
                    self.system_spacing
                ),
            });
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields use defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(source).map_err(|e| LayoutError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
