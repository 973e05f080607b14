use super::{f32_slice, uniform, vec3_slice};
use crate::layout::{MARCH_DIRECTIONS, MARCH_DISTANCES, MARCH_PARAMS, MARCH_POSITIONS};
use crate::{BufferView, ComputeError, MarchParams, Vec3};

/// Advances every active ray by its damped distance estimate.
///
/// Bindings: positions, directions, distance estimates, [`MarchParams`], output
/// placeholder. A ray is active while `|p| < abort_radius` and its estimate is
/// finite; inactive rays are copied through untouched. Returns three buffers:
/// the new positions, the applied step length per ray (`0.0` when frozen) and
/// an active flag per ray (`u32`, 1 = moved).
pub fn handle_march_step(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 5 {
        return Err(ComputeError::ShapeMismatch(
            "MarchStep kernel expects 5 buffers (positions, directions, distances, params, out)",
        ));
    }
    let positions = vec3_slice(&binds[MARCH_POSITIONS], "MarchStep positions must be Vec3 elements")?;
    let directions = vec3_slice(&binds[MARCH_DIRECTIONS], "MarchStep directions must be Vec3 elements")?;
    let distances = f32_slice(&binds[MARCH_DISTANCES], "MarchStep distances must be f32 elements")?;
    let params: MarchParams = uniform(&binds[MARCH_PARAMS], "MarchStep params must be a single MarchParams")?;

    if positions.len() != directions.len() || positions.len() != distances.len() {
        return Err(ComputeError::ShapeMismatch(
            "MarchStep positions, directions and distances must have the same length",
        ));
    }
    if !(params.step_scale.is_finite() && params.abort_radius.is_finite()) {
        return Err(ComputeError::InvalidParams("MarchStep params must be finite"));
    }

    let mut next = Vec::with_capacity(positions.len());
    let mut steps = Vec::with_capacity(positions.len());
    let mut active = Vec::with_capacity(positions.len());
    for ((&p, &dir), &de) in positions.iter().zip(directions).zip(distances) {
        // NaN radii fail the comparison and freeze as well
        if p.length() < params.abort_radius && de.is_finite() {
            let step = (de * params.step_scale).abs();
            next.push(p + dir * step);
            steps.push(step);
            active.push(1u32);
        } else {
            next.push(p);
            steps.push(0.0f32);
            active.push(0u32);
        }
    }

    Ok(vec![
        bytemuck::cast_slice::<Vec3, u8>(&next).to_vec(),
        bytemuck::cast_slice::<f32, u8>(&steps).to_vec(),
        bytemuck::cast_slice::<u32, u8>(&active).to_vec(),
    ])
}
