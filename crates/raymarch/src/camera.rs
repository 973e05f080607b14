//! Camera and initial ray batch.
//!
//! Rays start at a single camera position on the `+y` axis (rotated by the
//! configured elevation and azimuth) and pass through a square image plane
//! spanning `[-0.5, 0.5]` at unit depth.

use crate::config::RenderConfig;
use crate::rotation::{camera_rotation, view_rotation};
use compute::Vec3;

/// Ray origins and unit directions for one render, in image order.
///
/// Ray `i * resolution + j` passes through image-plane sample `(i, j)`.
#[derive(Clone, Debug)]
pub struct RayBatch {
    pub resolution: usize,
    pub camera: Vec3,
    pub origins: Vec<Vec3>,
    pub directions: Vec<Vec3>,
}

impl RayBatch {
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        build_rays(
            config.resolution as usize,
            config.elevation,
            config.azimuth,
            config.proximity,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

/// `n` evenly spaced samples over `[-0.5, 0.5]`; a single sample sits at `-0.5`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn image_plane_samples(n: usize) -> Vec<f32> {
    let spacing = if n > 1 { 1.0 / (n - 1) as f32 } else { 0.0 };
    (0..n).map(|k| -0.5 + k as f32 * spacing).collect()
}

#[must_use]
pub fn camera_position(proximity: f32, elevation: f32, azimuth: f32) -> Vec3 {
    let eye = camera_rotation(elevation, azimuth) * glam::Vec3::new(0.0, proximity, 0.0);
    Vec3::from(eye.to_array())
}

#[must_use]
pub fn build_rays(resolution: usize, elevation: f32, azimuth: f32, proximity: f32) -> RayBatch {
    let samples = image_plane_samples(resolution);
    let view = view_rotation(elevation, azimuth);
    let camera = camera_position(proximity, elevation, azimuth);

    let mut directions = Vec::with_capacity(resolution * resolution);
    for &u in &samples {
        for &v in &samples {
            let dir = view * glam::Vec3::new(u, v, 1.0).normalize();
            directions.push(Vec3::from(dir.to_array()));
        }
    }

    RayBatch {
        resolution,
        camera,
        origins: vec![camera; directions.len()],
        directions,
    }
}
