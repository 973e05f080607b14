#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Raymarch
//!
//! Sphere tracing of implicit surfaces into a depth map.
//!
//! A render starts from an immutable [`RenderConfig`], builds one ray per
//! pixel from a camera orbiting the origin, marches every ray against a
//! distance estimator and finally measures how far each ray travelled from
//! the camera. The result is a square [`DepthMap`] that a presentation layer
//! turns into an image.
//!
//! ## Key Components
//!
//! -   **Rotation:** principal-axis rotations in [`rotation`] orient both the
//!     camera position and the ray directions.
//! -   **Distance estimators:** [`Sphere`] and [`Mandelbulb`] implement
//!     [`DistanceEstimator`]; both evaluate whole batches through the
//!     [`compute`] backend.
//! -   **Marching:** [`RayMarcher`] advances all rays for a fixed number of
//!     iterations, freezing rays that leave the abort radius.
//! -   **Projection:** [`depth::project`] turns final positions into distances.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use raymarch::{compute_depth_map, RenderConfig};
//!
//! let config = RenderConfig { resolution: 64, march_steps: 100, ..RenderConfig::default() };
//! let result = compute_depth_map(&config)?;
//! assert_eq!(result.depth_map.resolution(), 64);
//! # Ok::<(), raymarch::RaymarchError>(())
//! ```

pub mod camera;
pub mod config;
pub mod depth;
pub mod error;
pub mod estimator;
pub mod marcher;
pub mod pipeline;
pub mod rotation;

pub use camera::RayBatch;
pub use compute::Vec3;
pub use config::{FractalParameters, PhiMode, RenderConfig, ShapeKind, BAILOUT};
pub use depth::DepthMap;
pub use error::{ConfigError, RaymarchError};
pub use estimator::{DistanceEstimator, Mandelbulb, Sphere};
pub use marcher::{
    LogProgress, MarchObserver, MarchOutcome, MarchProgress, MarchState, RayMarcher, StepStats,
    ABORT_RADIUS, STEP_SCALE,
};
pub use pipeline::{compute_depth_map, compute_depth_map_with, RenderResult};

/// Lanes per workgroup assumed when sizing dispatches.
const WORKGROUP_SIZE: usize = 64;

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn workgroups(len: usize) -> [u32; 3] {
    [len.div_ceil(WORKGROUP_SIZE).max(1) as u32, 1, 1]
}
