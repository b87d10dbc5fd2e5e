use nalgebra::{Point3, Rotation3, Unit, Vector3};

/// The axis along which layers are separated.
pub fn stacking_axis() -> Unit<Vector3<f64>> {
    Vector3::z_axis()
}

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}

/// Counter-clockwise rotation about the stacking axis, seen from its positive end.
pub fn stacking_rotation(angle_degrees: f64) -> Rotation3<f64> {
    rotation_from_axis_angle(&stacking_axis(), angle_degrees)
}

/// Arithmetic mean of a set of positions, or `None` for an empty set.
pub fn centroid(positions: &[Point3<f64>]) -> Option<Point3<f64>> {
    if positions.is_empty() {
        return None;
    }
    let sum = positions
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / positions.len() as f64))
}

/// Returns `positions` rotated about the stacking axis; the input is left untouched.
pub fn rotate_about_stacking_axis(positions: &[Point3<f64>], angle_degrees: f64) -> Vec<Point3<f64>> {
    let rotation = stacking_rotation(angle_degrees);
    positions.iter().map(|p| rotation * p).collect()
}

/// Offset applied to every atom of layer `layer_index`.
///
/// Only the first horizontal axis and the stacking axis are shifted; the second
/// horizontal axis is reached by rotation alone.
pub fn layer_translation(layer_index: usize, x_spacing: f64, z_spacing: f64) -> Vector3<f64> {
    let i = layer_index as f64;
    Vector3::new(x_spacing * i, 0.0, z_spacing * i)
}
