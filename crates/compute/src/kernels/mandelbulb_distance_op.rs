use super::{uniform, vec3_slice};
use crate::{BufferView, ComputeError, MandelbulbParams, Vec3, PHI_ATAN, PHI_ATAN2};

/// Azimuthal angle of `z` in the xy-plane.
///
/// `PHI_ATAN` keeps the single-argument form, which folds `x < 0` onto the
/// right half-plane and yields NaN for `x == y == 0`. Division by zero is
/// well defined for `f32` so neither mode can panic.
fn azimuth(z: Vec3, phi_mode: u32) -> f32 {
    if phi_mode == PHI_ATAN2 {
        z.y.atan2(z.x)
    } else {
        (z.y / z.x).atan()
    }
}

/// Escape-time distance estimate for the power-`n` Mandelbulb.
///
/// Orbits whose radius reaches the bailout keep their last `z` and `dr`, so
/// the returned estimate is `|0.5 ln(r) r / dr|` with `r` taken at the start
/// of the final iteration. Non-finite intermediate values are not trapped.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn mandelbulb_distance(pos: Vec3, params: &MandelbulbParams) -> f32 {
    let exponent = params.power as i32;
    let power = params.power as f32;

    let mut z = pos;
    let mut dr = 1.0_f32;
    let mut r = 0.0_f32;
    for _ in 0..params.iterations {
        r = z.length();
        if !(r < params.bailout) {
            continue;
        }
        let theta = (z.z / r).acos() * power;
        let phi = azimuth(z, params.phi_mode) * power;

        dr = r.powi(exponent - 1) * power * dr + 1.0;
        let zr = r.powi(exponent);
        z = Vec3::new(
            theta.sin() * phi.cos(),
            phi.sin() * theta.sin(),
            theta.cos(),
        ) * zr
            + pos;
    }

    (0.5 * r.ln() * r / dr).abs()
}

pub fn handle_mandelbulb_distance(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        return Err(ComputeError::ShapeMismatch(
            "MandelbulbDistance kernel expects 3 buffers (positions, params, out)",
        ));
    }
    let positions = vec3_slice(&binds[0], "MandelbulbDistance positions must be Vec3 elements")?;
    let params: MandelbulbParams = uniform(
        &binds[1],
        "MandelbulbDistance params must be a single MandelbulbParams",
    )?;
    // binds[2] is the output placeholder

    if params.iterations == 0 {
        return Err(ComputeError::InvalidParams("Mandelbulb iterations must be at least 1"));
    }
    if params.power < 2 {
        return Err(ComputeError::InvalidParams("Mandelbulb power must be at least 2"));
    }
    if !(params.bailout.is_finite() && params.bailout > 0.0) {
        return Err(ComputeError::InvalidParams("Mandelbulb bailout must be positive and finite"));
    }
    if params.phi_mode != PHI_ATAN && params.phi_mode != PHI_ATAN2 {
        return Err(ComputeError::InvalidParams("unknown Mandelbulb phi mode"));
    }

    let distances: Vec<f32> = positions
        .iter()
        .map(|&p| mandelbulb_distance(p, &params))
        .collect();
    Ok(vec![bytemuck::cast_slice(&distances).to_vec()])
}
