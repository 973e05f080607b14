// This module re-exports handlers for each kernel operation.

use crate::{BufferView, ComputeError, Vec3};

// Distance estimators
pub mod sphere_distance_op;
pub use sphere_distance_op::{handle_sphere_distance, sphere_distance, SPHERE_RADIUS};
pub mod mandelbulb_distance_op;
pub use mandelbulb_distance_op::{handle_mandelbulb_distance, mandelbulb_distance};

// Marching
pub mod march_step_op;
pub use march_step_op::handle_march_step;
pub mod camera_distance_op;
pub use camera_distance_op::handle_camera_distance;

/// Borrows a buffer of positions or directions.
pub(crate) fn vec3_slice<'a>(
    view: &'a BufferView,
    msg: &'static str,
) -> Result<&'a [Vec3], ComputeError> {
    if view.element_size_in_bytes != std::mem::size_of::<Vec3>() {
        return Err(ComputeError::ShapeMismatch(msg));
    }
    bytemuck::try_cast_slice(&view.data).map_err(|_| ComputeError::ShapeMismatch(msg))
}

/// Borrows a buffer of `f32` scalars.
pub(crate) fn f32_slice<'a>(
    view: &'a BufferView,
    msg: &'static str,
) -> Result<&'a [f32], ComputeError> {
    if view.element_size_in_bytes != std::mem::size_of::<f32>() {
        return Err(ComputeError::ShapeMismatch(msg));
    }
    bytemuck::try_cast_slice(&view.data).map_err(|_| ComputeError::ShapeMismatch(msg))
}

/// Reads a uniform buffer holding exactly one `T`.
pub(crate) fn uniform<T: bytemuck::Pod>(
    view: &BufferView,
    msg: &'static str,
) -> Result<T, ComputeError> {
    if view.shape != [1] || view.data.len() != std::mem::size_of::<T>() {
        return Err(ComputeError::ShapeMismatch(msg));
    }
    Ok(bytemuck::pod_read_unaligned(&view.data))
}
