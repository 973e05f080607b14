//! # Ray Marcher
//!
//! Sphere tracing over a whole [`RayBatch`]. Every iteration evaluates the
//! distance estimator for all rays, then moves each active ray along its
//! direction by the damped estimate. Iterations are strictly sequential; a
//! ray never sees a partially updated batch.
//!
//! A ray is active while `|p| < abort_radius` and its estimate is finite.
//! Inactive rays are never written again, so once a ray leaves the abort
//! radius its position stays bitwise identical for the rest of the run.

use crate::camera::RayBatch;
use crate::estimator::DistanceEstimator;
use compute::{read_back, BufferView, ComputeBackend, ComputeError, Kernel, MarchParams, Vec3};
use std::sync::Arc;

/// Damping applied to distance estimates so rays do not overshoot the surface.
pub const STEP_SCALE: f32 = 0.4;
/// Distance from the origin beyond which rays stop moving.
pub const ABORT_RADIUS: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchProgress {
    /// Zero-based index of the iteration that just finished.
    pub iteration: u32,
    /// Iterations still scheduled after this one.
    pub remaining: u32,
    pub active_rays: usize,
    pub max_step: f32,
}

/// Receives one callback per finished iteration.
pub trait MarchObserver {
    fn on_iteration(&mut self, progress: &MarchProgress);
}

impl<F: FnMut(&MarchProgress)> MarchObserver for F {
    fn on_iteration(&mut self, progress: &MarchProgress) {
        self(progress);
    }
}

/// Logs the remaining iteration count every `interval` iterations.
#[derive(Clone, Copy, Debug)]
pub struct LogProgress {
    pub interval: u32,
}

impl Default for LogProgress {
    fn default() -> Self {
        Self { interval: 50 }
    }
}

impl MarchObserver for LogProgress {
    fn on_iteration(&mut self, progress: &MarchProgress) {
        if (progress.iteration + 1) % self.interval.max(1) == 0 || progress.remaining == 0 {
            tracing::debug!(
                "Remaining iterations: {} ({} rays active, max step {:.3e})",
                progress.remaining,
                progress.active_rays,
                progress.max_step
            );
        }
    }
}

/// Per-run marching state, exclusively owned by one march.
#[derive(Clone, Debug)]
pub struct MarchState {
    positions: Vec<Vec3>,
    directions: Vec<Vec3>,
}

impl MarchState {
    #[must_use]
    pub fn new(batch: &RayBatch) -> Self {
        Self {
            positions: batch.origins.clone(),
            directions: batch.directions.clone(),
        }
    }

    /// State for arbitrary rays; `positions` and `directions` pair up by index.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::ShapeMismatch`] if the lengths differ.
    pub fn from_rays(positions: Vec<Vec3>, directions: Vec<Vec3>) -> Result<Self, ComputeError> {
        if positions.len() != directions.len() {
            return Err(ComputeError::ShapeMismatch(
                "every ray needs exactly one position and one direction",
            ));
        }
        Ok(Self { positions, directions })
    }

    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[must_use]
    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }

    #[must_use]
    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub active_rays: usize,
    pub max_step: f32,
    /// Rays inside the abort radius whose estimate was NaN or infinite.
    pub indeterminate: usize,
}

#[derive(Clone, Debug)]
pub struct MarchOutcome {
    pub positions: Vec<Vec3>,
    pub iterations_run: u32,
}

pub struct RayMarcher {
    backend: Arc<dyn ComputeBackend>,
    params: MarchParams,
}

impl RayMarcher {
    #[must_use]
    pub fn new(backend: Arc<dyn ComputeBackend>) -> Self {
        Self {
            backend,
            params: MarchParams { step_scale: STEP_SCALE, abort_radius: ABORT_RADIUS },
        }
    }

    #[must_use]
    pub fn with_params(mut self, step_scale: f32, abort_radius: f32) -> Self {
        self.params = MarchParams { step_scale, abort_radius };
        self
    }

    #[must_use]
    pub fn params(&self) -> MarchParams {
        self.params
    }

    /// Advances every active ray in `state` by one iteration.
    ///
    /// # Errors
    ///
    /// Propagates backend errors; `state` is left untouched when one occurs.
    pub fn step(
        &self,
        state: &mut MarchState,
        estimator: &dyn DistanceEstimator,
    ) -> Result<StepStats, ComputeError> {
        let n = state.positions.len();
        let distances = estimator.estimate(self.backend.as_ref(), &state.positions)?;

        let indeterminate = state
            .positions
            .iter()
            .zip(&distances)
            .filter(|(p, d)| p.length() < self.params.abort_radius && !d.is_finite())
            .count();

        let binds = [
            BufferView::from_slice(&state.positions),
            BufferView::from_slice(&state.directions),
            BufferView::from_slice(&distances),
            BufferView::from_slice(&[self.params]),
            BufferView::placeholder::<Vec3>(n),
        ];
        let mut out = self
            .backend
            .dispatch(&Kernel::MarchStep, &binds, crate::workgroups(n))?
            .into_iter();
        let (Some(positions), Some(steps), Some(active)) = (out.next(), out.next(), out.next()) else {
            return Err(ComputeError::ShapeMismatch("MarchStep must return three buffers"));
        };
        let positions: Vec<Vec3> = read_back(&positions)?;
        let steps: Vec<f32> = read_back(&steps)?;
        let active: Vec<u32> = read_back(&active)?;
        if positions.len() != n {
            return Err(ComputeError::ShapeMismatch("MarchStep returned the wrong number of rays"));
        }

        state.positions = positions;
        Ok(StepStats {
            active_rays: active.iter().filter(|&&a| a != 0).count(),
            max_step: steps.iter().copied().fold(0.0, f32::max),
            indeterminate,
        })
    }

    /// Marches `batch` for at most `steps` iterations.
    ///
    /// Without `convergence_epsilon` exactly `steps` iterations run. With it,
    /// marching stops after the first iteration in which no ray moved further
    /// than the epsilon, or in which no ray was active.
    ///
    /// # Errors
    ///
    /// Propagates backend errors.
    pub fn march(
        &self,
        batch: &RayBatch,
        estimator: &dyn DistanceEstimator,
        steps: u32,
        convergence_epsilon: Option<f32>,
        mut observer: Option<&mut dyn MarchObserver>,
    ) -> Result<MarchOutcome, ComputeError> {
        let mut state = MarchState::new(batch);
        let mut iterations_run = 0;
        let mut last = StepStats::default();

        for iteration in 0..steps {
            last = self.step(&mut state, estimator)?;
            iterations_run = iteration + 1;

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_iteration(&MarchProgress {
                    iteration,
                    remaining: steps - iterations_run,
                    active_rays: last.active_rays,
                    max_step: last.max_step,
                });
            }

            if let Some(eps) = convergence_epsilon {
                if last.active_rays == 0 || last.max_step < eps {
                    tracing::debug!("Converged after {} of {} iterations", iterations_run, steps);
                    break;
                }
            }
        }

        if last.indeterminate > 0 {
            tracing::warn!(
                "{} rays ended with an indeterminate distance estimate and were frozen",
                last.indeterminate
            );
        }

        Ok(MarchOutcome { positions: state.into_positions(), iterations_run })
    }
}
