//! End-to-end depth map computation.

use crate::camera::RayBatch;
use crate::config::RenderConfig;
use crate::depth::{project, DepthMap};
use crate::error::RaymarchError;
use crate::marcher::{LogProgress, MarchObserver, RayMarcher};
use compute::{ComputeBackend, Vec3};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Output of one render together with its timing metadata.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub depth_map: DepthMap,
    pub camera: Vec3,
    /// Time spent marching and projecting.
    pub elapsed: Duration,
    pub iterations_run: u32,
}

/// Computes the depth map for `config` on the default backend, logging progress.
///
/// # Errors
///
/// Returns [`RaymarchError::Config`] for an invalid configuration and
/// [`RaymarchError::Backend`] if a kernel fails.
pub fn compute_depth_map(config: &RenderConfig) -> Result<RenderResult, RaymarchError> {
    let mut progress = LogProgress::default();
    compute_depth_map_with(config, compute::default_backend(), Some(&mut progress))
}

/// Computes the depth map for `config` on `backend`.
///
/// # Errors
///
/// Returns [`RaymarchError::Config`] for an invalid configuration and
/// [`RaymarchError::Backend`] if a kernel fails.
pub fn compute_depth_map_with(
    config: &RenderConfig,
    backend: Arc<dyn ComputeBackend>,
    observer: Option<&mut dyn MarchObserver>,
) -> Result<RenderResult, RaymarchError> {
    config.validate()?;

    let batch = RayBatch::from_config(config);
    let estimator = config.estimator();
    tracing::info!(
        "Marching {} rays for {} steps against {} (order {}, power {})",
        batch.len(),
        config.march_steps,
        estimator.name(),
        config.order,
        config.power
    );

    let start = Instant::now();
    let marcher = RayMarcher::new(Arc::clone(&backend));
    let outcome = marcher.march(
        &batch,
        estimator.as_ref(),
        config.march_steps,
        config.convergence_epsilon,
        observer,
    )?;
    let depth_map = project(backend.as_ref(), &outcome.positions, batch.camera, batch.resolution)?;
    let elapsed = start.elapsed();

    tracing::info!("Computation time: {:.2?}", elapsed);
    Ok(RenderResult {
        depth_map,
        camera: batch.camera,
        elapsed,
        iterations_run: outcome.iterations_run,
    })
}
