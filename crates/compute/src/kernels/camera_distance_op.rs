use super::{uniform, vec3_slice};
use crate::{BufferView, ComputeError, Vec3};

/// Euclidean distance from every final ray position back to the camera.
pub fn handle_camera_distance(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        return Err(ComputeError::ShapeMismatch(
            "CameraDistance kernel expects 3 buffers (positions, camera, out)",
        ));
    }
    let positions = vec3_slice(&binds[0], "CameraDistance positions must be Vec3 elements")?;
    let camera: Vec3 = uniform(&binds[1], "CameraDistance camera must be a single Vec3")?;

    let distances: Vec<f32> = positions.iter().map(|&p| p.distance(camera)).collect();
    Ok(vec![bytemuck::cast_slice(&distances).to_vec()])
}
