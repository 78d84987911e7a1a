use bevy::math::Vec3;
use nalgebra::Vector3;

/// Exponential blend of a scalar toward a target.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Exponential blend of a vector toward a target.
#[inline]
pub fn lerp_vector(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Rescale `v` so its magnitude does not exceed `max`.
pub fn clamp_magnitude(v: &Vector3<f64>, max: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        v * (max / norm)
    } else {
        *v
    }
}

/// Narrow a simulation vector to the render precision.
#[inline]
pub fn to_render(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}
