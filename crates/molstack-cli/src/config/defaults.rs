use molstack::engine::config::{
    DEFAULT_LAYER_COUNT, DEFAULT_ROTATION_STEP_DEGREES, DEFAULT_X_SPACING, DEFAULT_Z_SPACING,
};
use molstack::engine::layout::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub layers: usize,
    pub z_spacing: f64,
    pub x_spacing: f64,
    pub rotation_step: u32,
    pub output_dir: PathBuf,
    pub auto_confirm: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYER_COUNT,
            z_spacing: DEFAULT_Z_SPACING,
            x_spacing: DEFAULT_X_SPACING,
            rotation_step: DEFAULT_ROTATION_STEP_DEGREES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            auto_confirm: false,
        }
    }
}
