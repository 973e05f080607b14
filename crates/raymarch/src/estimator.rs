//! Distance estimators.
//!
//! Each estimator maps a batch of points to a lower bound on their distance
//! from the surface. Evaluation is delegated to the compute backend so the
//! whole batch is processed in one dispatch.

use crate::config::FractalParameters;
use compute::{read_back, BufferView, ComputeBackend, ComputeError, Kernel, Vec3};

pub trait DistanceEstimator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Distance estimates for `positions`, in the same order.
    ///
    /// Values may be NaN or infinite where the estimator is numerically
    /// undefined; callers treat those as "no valid step".
    ///
    /// # Errors
    ///
    /// Propagates any [`ComputeError`] from the backend.
    fn estimate(
        &self,
        backend: &dyn ComputeBackend,
        positions: &[Vec3],
    ) -> Result<Vec<f32>, ComputeError>;
}

/// Sphere of radius 0.5 centred on the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;

impl DistanceEstimator for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn estimate(
        &self,
        backend: &dyn ComputeBackend,
        positions: &[Vec3],
    ) -> Result<Vec<f32>, ComputeError> {
        let binds = [
            BufferView::from_slice(positions),
            BufferView::placeholder::<f32>(positions.len()),
        ];
        let out = backend.dispatch(&Kernel::SphereDistance, &binds, crate::workgroups(positions.len()))?;
        first_output(out)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Mandelbulb {
    pub params: FractalParameters,
}

impl Mandelbulb {
    #[must_use]
    pub fn new(params: FractalParameters) -> Self {
        Self { params }
    }
}

impl DistanceEstimator for Mandelbulb {
    fn name(&self) -> &'static str {
        "Mandelbulb"
    }

    fn estimate(
        &self,
        backend: &dyn ComputeBackend,
        positions: &[Vec3],
    ) -> Result<Vec<f32>, ComputeError> {
        let binds = [
            BufferView::from_slice(positions),
            BufferView::from_slice(&[self.params.to_kernel_params()]),
            BufferView::placeholder::<f32>(positions.len()),
        ];
        let out = backend.dispatch(&Kernel::MandelbulbDistance, &binds, crate::workgroups(positions.len()))?;
        first_output(out)
    }
}

fn first_output(outputs: Vec<Vec<u8>>) -> Result<Vec<f32>, ComputeError> {
    let bytes = outputs
        .into_iter()
        .next()
        .ok_or(ComputeError::ShapeMismatch("kernel returned no output buffer"))?;
    read_back(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::CpuBackend;

    #[test]
    fn sphere_is_zero_on_surface() {
        let backend = CpuBackend::new();
        let d = Sphere
            .estimate(&backend, &[Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.3, 0.4, 0.0)])
            .unwrap();
        assert_eq!(d[0], 0.0);
        assert!(d[1].abs() < 1e-7);
    }

    #[test]
    fn mandelbulb_estimate_has_batch_length() {
        let backend = CpuBackend::new();
        let positions = vec![Vec3::new(0.1, 0.2, 0.3); 17];
        let d = Mandelbulb::default().estimate(&backend, &positions).unwrap();
        assert_eq!(d.len(), 17);
        assert!(d.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn invalid_parameters_surface_as_errors() {
        let backend = CpuBackend::new();
        let bulb = Mandelbulb::new(FractalParameters { iterations: 0, ..FractalParameters::default() });
        let result = bulb.estimate(&backend, &[Vec3::ZERO]);
        assert!(matches!(result, Err(ComputeError::InvalidParams(_))));
    }
}
