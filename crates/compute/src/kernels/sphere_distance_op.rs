use super::vec3_slice;
use crate::{BufferView, ComputeError, Vec3};

/// Radius of the analytic test sphere centred on the origin.
pub const SPHERE_RADIUS: f32 = 0.5;

#[must_use]
pub fn sphere_distance(p: Vec3) -> f32 {
    p.length() - SPHERE_RADIUS
}

pub fn handle_sphere_distance(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 2 {
        return Err(ComputeError::ShapeMismatch(
            "SphereDistance kernel expects 2 buffers (positions, out)",
        ));
    }
    let positions = vec3_slice(&binds[0], "SphereDistance positions must be Vec3 elements")?;
    // binds[1] is the output placeholder

    let distances: Vec<f32> = positions.iter().map(|&p| sphere_distance(p)).collect();
    Ok(vec![bytemuck::cast_slice(&distances).to_vec()])
}
