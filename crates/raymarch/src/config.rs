//! Render configuration.
//!
//! [`RenderConfig`] is an immutable description of one render. It can be
//! deserialised from (partial) JSON, every missing field falls back to its
//! default, and [`RenderConfig::validate`] rejects unusable values before any
//! ray is generated.

use crate::error::ConfigError;
use crate::estimator::{DistanceEstimator, Mandelbulb, Sphere};
use compute::{MandelbulbParams, PHI_ATAN, PHI_ATAN2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Escape radius of the Mandelbulb orbit.
pub const BAILOUT: f32 = 1.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere,
    #[default]
    Mandelbulb,
}

impl ShapeKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Mandelbulb => "Mandelbulb",
        }
    }
}

/// How the Mandelbulb estimator computes the azimuth of an orbit point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhiMode {
    /// `atan(y / x)`; ignores the sign of `x`.
    #[default]
    Atan,
    /// `atan2(y, x)`.
    Atan2,
}

impl PhiMode {
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        match self {
            PhiMode::Atan => PHI_ATAN,
            PhiMode::Atan2 => PHI_ATAN2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParameters {
    pub power: u32,
    pub iterations: u32,
    pub bailout: f32,
    pub phi_mode: PhiMode,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self { power: 8, iterations: 6, bailout: BAILOUT, phi_mode: PhiMode::Atan }
    }
}

impl FractalParameters {
    #[must_use]
    pub fn to_kernel_params(&self) -> MandelbulbParams {
        MandelbulbParams {
            iterations: self.iterations,
            power: self.power,
            bailout: self.bailout,
            phi_mode: self.phi_mode.as_raw(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output is `resolution x resolution` pixels.
    pub resolution: u32,
    /// Number of marching iterations every ray performs.
    pub march_steps: u32,
    /// Mandelbulb iterations; more gives more detail.
    pub order: u32,
    /// Mandelbulb power, sets the symmetry of the fractal.
    pub power: u32,
    /// Distance of the camera from the origin.
    pub proximity: f32,
    /// Elevation of the camera in radians.
    pub elevation: f32,
    /// Azimuth of the camera in radians.
    pub azimuth: f32,
    pub shape: ShapeKind,
    pub phi_mode: PhiMode,
    /// Stop marching once no ray moves further than this in one iteration.
    pub convergence_epsilon: Option<f32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: 200,
            march_steps: 200,
            order: 6,
            power: 8,
            proximity: 3.0,
            elevation: 0.0,
            azimuth: 0.0,
            shape: ShapeKind::Mandelbulb,
            phi_mode: PhiMode::Atan,
            convergence_epsilon: None,
        }
    }
}

impl RenderConfig {
    /// Parses a JSON configuration; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input. The result is not
    /// validated; call [`RenderConfig::validate`] before rendering.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if self.order == 0 {
            return Err(ConfigError::ZeroOrder);
        }
        if self.power < 2 {
            return Err(ConfigError::PowerTooSmall(self.power));
        }
        if !(self.proximity.is_finite() && self.proximity > 0.0) {
            return Err(ConfigError::InvalidProximity(self.proximity));
        }
        if !self.elevation.is_finite() {
            return Err(ConfigError::InvalidAngle { name: "elevation", value: self.elevation });
        }
        if !self.azimuth.is_finite() {
            return Err(ConfigError::InvalidAngle { name: "azimuth", value: self.azimuth });
        }
        if let Some(eps) = self.convergence_epsilon {
            if !(eps.is_finite() && eps > 0.0) {
                return Err(ConfigError::InvalidEpsilon(eps));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn fractal(&self) -> FractalParameters {
        FractalParameters {
            power: self.power,
            iterations: self.order,
            bailout: BAILOUT,
            phi_mode: self.phi_mode,
        }
    }

    #[must_use]
    pub fn estimator(&self) -> Box<dyn DistanceEstimator> {
        match self.shape {
            ShapeKind::Sphere => Box::new(Sphere),
            ShapeKind::Mandelbulb => Box::new(Mandelbulb::new(self.fractal())),
        }
    }

    #[must_use]
    pub fn ray_count(&self) -> usize {
        let r = self.resolution as usize;
        r * r
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} object\nResolution: {}x{}",
            self.shape.name(),
            self.resolution,
            self.resolution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_render() {
        let c = RenderConfig::default();
        assert_eq!(c.resolution, 200);
        assert_eq!(c.march_steps, 200);
        assert_eq!(c.order, 6);
        assert_eq!(c.power, 8);
        assert!((c.proximity - 3.0).abs() < f32::EPSILON);
        assert_eq!(c.shape, ShapeKind::Mandelbulb);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_each_bad_field() {
        let base = RenderConfig::default();
        let cases = [
            (RenderConfig { resolution: 0, ..base.clone() }, ConfigError::ZeroResolution),
            (RenderConfig { order: 0, ..base.clone() }, ConfigError::ZeroOrder),
            (RenderConfig { power: 1, ..base.clone() }, ConfigError::PowerTooSmall(1)),
            (RenderConfig { proximity: 0.0, ..base.clone() }, ConfigError::InvalidProximity(0.0)),
            (
                RenderConfig { azimuth: f32::INFINITY, ..base.clone() },
                ConfigError::InvalidAngle { name: "azimuth", value: f32::INFINITY },
            ),
            (
                RenderConfig { convergence_epsilon: Some(-1.0), ..base.clone() },
                ConfigError::InvalidEpsilon(-1.0),
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn zero_march_steps_are_allowed() {
        let c = RenderConfig { march_steps: 0, ..RenderConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn display_names_shape_and_resolution() {
        let c = RenderConfig { resolution: 64, ..RenderConfig::default() };
        assert_eq!(c.to_string(), "Mandelbulb object\nResolution: 64x64");
    }

    #[test]
    fn fractal_parameters_follow_config() {
        let c = RenderConfig { order: 3, power: 5, phi_mode: PhiMode::Atan2, ..RenderConfig::default() };
        let p = c.fractal().to_kernel_params();
        assert_eq!(p.iterations, 3);
        assert_eq!(p.power, 5);
        assert_eq!(p.phi_mode, PHI_ATAN2);
        assert!((p.bailout - 1.5).abs() < f32::EPSILON);
    }
}
