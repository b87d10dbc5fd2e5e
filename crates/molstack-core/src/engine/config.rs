use thiserror::Error;

pub const DEFAULT_LAYER_COUNT: usize = 2;
pub const DEFAULT_Z_SPACING: f64 = 6.0;
pub const DEFAULT_X_SPACING: f64 = 0.0;
pub const DEFAULT_ROTATION_STEP_DEGREES: u32 = 30;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Geometry of the stack to enumerate.
#[derive(Debug, Clone, PartialEq)]
pub struct StackParameters {
    /// Number of layers, bottom (0) to top.
    pub layer_count: usize,
    /// Separation between consecutive layers along the stacking axis, in Angstroms.
    pub z_spacing: f64,
    /// Per-layer shift along the first horizontal axis, in Angstroms.
    pub x_spacing: f64,
    /// Increment between sampled in-plane rotation angles, in degrees.
    pub rotation_step_degrees: u32,
}

impl Default for StackParameters {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LAYER_COUNT,
            z_spacing: DEFAULT_Z_SPACING,
            x_spacing: DEFAULT_X_SPACING,
            rotation_step_degrees: DEFAULT_ROTATION_STEP_DEGREES,
        }
    }
}

impl StackParameters {
    /// Checks that the parameters describe a non-empty, finite enumeration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layer_count == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "layer_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.rotation_step_degrees == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "rotation_step_degrees",
                reason: "must be at least 1".to_string(),
            });
        }
        for (name, value) in [("z_spacing", self.z_spacing), ("x_spacing", self.x_spacing)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("must be a finite number, got {}", value),
                });
            }
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct StackParametersBuilder {
    layer_count: Option<usize>,
    z_spacing: Option<f64>,
    x_spacing: Option<f64>,
    rotation_step_degrees: Option<u32>,
}

impl StackParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer_count(mut self, count: usize) -> Self {
        self.layer_count = Some(count);
        self
    }
    pub fn z_spacing(mut self, spacing: f64) -> Self {
        self.z_spacing = Some(spacing);
        self
    }
    pub fn x_spacing(mut self, spacing: f64) -> Self {
        self.x_spacing = Some(spacing);
        self
    }
    pub fn rotation_step_degrees(mut self, step: u32) -> Self {
        self.rotation_step_degrees = Some(step);
        self
    }

    /// Fills unset fields with defaults and validates the result.
    pub fn build(self) -> Result<StackParameters, ConfigError> {
        let params = StackParameters {
            layer_count: self.layer_count.unwrap_or(DEFAULT_LAYER_COUNT),
            z_spacing: self.z_spacing.unwrap_or(DEFAULT_Z_SPACING),
            x_spacing: self.x_spacing.unwrap_or(DEFAULT_X_SPACING),
            rotation_step_degrees: self
                .rotation_step_degrees
                .unwrap_or(DEFAULT_ROTATION_STEP_DEGREES),
        };

        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_overrides_uses_defaults() {
        let params = StackParametersBuilder::new().build().unwrap();
        assert_eq!(params, StackParameters::default());
        assert_eq!(params.layer_count, 2);
        assert_eq!(params.z_spacing, 6.0);
        assert_eq!(params.x_spacing, 0.0);
        assert_eq!(params.rotation_step_degrees, 30);
    }

    #[test]
    fn build_applies_overrides() {
        let params = StackParametersBuilder::new()
            .layer_count(4)
            .z_spacing(3.4)
            .x_spacing(1.2)
            .rotation_step_degrees(45)
            .build()
            .unwrap();
        assert_eq!(params.layer_count, 4);
        assert_eq!(params.z_spacing, 3.4);
        assert_eq!(params.x_spacing, 1.2);
        assert_eq!(params.rotation_step_degrees, 45);
    }

    #[test]
    fn build_rejects_zero_layers() {
        let err = StackParametersBuilder::new().layer_count(0).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "layer_count", .. }));
    }

    #[test]
    fn build_rejects_zero_rotation_step() {
        let err = StackParametersBuilder::new()
            .rotation_step_degrees(0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { name: "rotation_step_degrees", .. }
        ));
    }

    #[test]
    fn build_rejects_non_finite_spacing() {
        let err = StackParametersBuilder::new()
            .z_spacing(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "z_spacing", .. }));
    }
}
