//! Command line arguments.
//!
//! Settings are layered: built-in defaults, then an optional JSON file passed
//! with `--config`, then individual flags.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use raymarch::{PhiMode, RenderConfig, ShapeKind};
use std::fs;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Sphere,
    Mandelbulb,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Sphere => ShapeKind::Sphere,
            ShapeArg::Mandelbulb => ShapeKind::Mandelbulb,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PhiArg {
    Atan,
    Atan2,
}

impl From<PhiArg> for PhiMode {
    fn from(arg: PhiArg) -> Self {
        match arg {
            PhiArg::Atan => PhiMode::Atan,
            PhiArg::Atan2 => PhiMode::Atan2,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mandelmarch")]
#[command(about = "Sphere-traced depth image of a Mandelbulb", long_about = None)]
pub struct Cli {
    /// Load settings from a JSON file; flags override its values
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Image is RESOLUTION x RESOLUTION rays
    #[arg(long, short = 'r')]
    pub resolution: Option<u32>,

    /// Marching iterations per ray
    #[arg(long, short = 'm', value_name = "STEPS")]
    pub march: Option<u32>,

    /// Mandelbulb iterations
    #[arg(long, short = 'o')]
    pub order: Option<u32>,

    /// Mandelbulb power
    #[arg(long, short = 'p')]
    pub power: Option<u32>,

    /// Camera distance from the origin
    #[arg(long)]
    pub proximity: Option<f32>,

    /// Camera elevation in degrees
    #[arg(long, allow_hyphen_values = true, value_name = "DEGREES")]
    pub elevation_deg: Option<f32>,

    /// Camera azimuth in degrees
    #[arg(long, allow_hyphen_values = true, value_name = "DEGREES")]
    pub azimuth_deg: Option<f32>,

    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Azimuth formula used inside the Mandelbulb iteration
    #[arg(long, value_enum)]
    pub phi: Option<PhiArg>,

    /// Stop early once no ray moves further than this in one iteration
    #[arg(long, value_name = "DISTANCE")]
    pub epsilon: Option<f32>,

    /// Directory receiving the image and its figure file
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Compute and shade without writing any files
    #[arg(long)]
    pub no_save: bool,
}

impl Cli {
    /// Builds the render configuration from the file (if any) and the flags.
    ///
    /// # Errors
    ///
    /// Fails if the configuration file cannot be read or parsed.
    pub fn load_config(&self) -> Result<RenderConfig> {
        let base = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                RenderConfig::from_json(&json)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => RenderConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Overrides `config` with every flag that was given.
    #[must_use]
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(steps) = self.march {
            config.march_steps = steps;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(power) = self.power {
            config.power = power;
        }
        if let Some(proximity) = self.proximity {
            config.proximity = proximity;
        }
        if let Some(degrees) = self.elevation_deg {
            config.elevation = degrees.to_radians();
        }
        if let Some(degrees) = self.azimuth_deg {
            config.azimuth = degrees.to_radians();
        }
        if let Some(shape) = self.shape {
            config.shape = shape.into();
        }
        if let Some(phi) = self.phi {
            config.phi_mode = phi.into();
        }
        if self.epsilon.is_some() {
            config.convergence_epsilon = self.epsilon;
        }
        config
    }
}
