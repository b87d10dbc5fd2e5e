use super::config::StackParameters;
use itertools::Itertools;

pub const FULL_TURN_DEGREES: u32 = 360;

/// Sampled in-plane angles `0, step, 2*step, ...` strictly below a full turn.
pub fn rotation_angles(step_degrees: u32) -> Vec<u32> {
    if step_degrees == 0 {
        return vec![0];
    }
    (0..FULL_TURN_DEGREES).step_by(step_degrees as usize).collect()
}

fn saturating_power(base: u64, layers: usize) -> u64 {
    let exponent = u32::try_from(layers).unwrap_or(u32::MAX);
    base.saturating_pow(exponent)
}

/// The full enumeration space for one generation run.
///
/// Tuples are produced lazily in lexicographic order with the top layer varying
/// fastest, so output naming is deterministic for fixed inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct StackPlan {
    library_len: usize,
    layer_count: usize,
    angles: Vec<u32>,
}

impl StackPlan {
    pub fn new(library_len: usize, params: &StackParameters) -> Self {
        Self {
            library_len,
            layer_count: params.layer_count,
            angles: rotation_angles(params.rotation_step_degrees),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    pub fn angles(&self) -> &[u32] {
        &self.angles
    }

    /// Every assignment of a library index to each layer, repetition allowed.
    pub fn order_tuples(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..self.layer_count)
            .map(|_| 0..self.library_len)
            .multi_cartesian_product()
    }

    /// Every assignment of a sampled angle to each layer.
    pub fn rotation_tuples(&self) -> impl Iterator<Item = Vec<u32>> + '_ {
        (0..self.layer_count)
            .map(|_| self.angles.iter().copied())
            .multi_cartesian_product()
    }

    /// `library_len ^ layer_count`, saturating at `u64::MAX`.
    pub fn order_count(&self) -> u64 {
        saturating_power(self.library_len as u64, self.layer_count)
    }

    /// `angle_count ^ layer_count`, saturating at `u64::MAX`.
    pub fn rotation_count(&self) -> u64 {
        saturating_power(self.angles.len() as u64, self.layer_count)
    }

    pub fn total_artifacts(&self) -> u64 {
        self.order_count().saturating_mul(self.rotation_count())
    }
}
