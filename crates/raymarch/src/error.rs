use compute::ComputeError;
use thiserror::Error;

/// Rejected render configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("resolution must be at least 1 pixel")]
    ZeroResolution,
    #[error("fractal order must be at least 1 iteration")]
    ZeroOrder,
    #[error("fractal power must be at least 2, got {0}")]
    PowerTooSmall(u32),
    #[error("camera proximity must be positive and finite, got {0}")]
    InvalidProximity(f32),
    #[error("{name} angle must be finite, got {value}")]
    InvalidAngle { name: &'static str, value: f32 },
    #[error("convergence epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f32),
}

#[derive(Error, Debug)]
pub enum RaymarchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("compute backend error: {0}")]
    Backend(#[from] ComputeError),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
