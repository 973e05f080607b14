//! # Mandelmarch Application Logic
//!
//! [`run`] drives a single render: it resolves the configuration, marches
//! every ray, shades the depth map and, unless disabled, writes the image
//! and its figure annotation.

use crate::cli::Cli;
use anyhow::{Context, Result};
use raymarch::{compute_depth_map, RenderConfig, RenderResult};
use render::{save_outputs, shade, Annotation, SavedFiles, ShadedImage};

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub config: RenderConfig,
    pub result: RenderResult,
    pub shaded: ShadedImage,
    /// `None` when saving was disabled.
    pub saved: Option<SavedFiles>,
}

/// Runs one render as described by `cli`.
///
/// # Errors
///
/// Returns any error from loading or validating the configuration, from the
/// ray marcher, from shading, or from writing the output files.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let config = cli.load_config()?;
    config.validate().context("invalid render configuration")?;
    tracing::info!("{config}");

    let result = compute_depth_map(&config).context("computing depth map")?;
    tracing::info!(
        "Marched {} of {} iterations in {:.2?}",
        result.iterations_run,
        config.march_steps,
        result.elapsed
    );

    let shaded = shade(&result.depth_map).context("shading depth map")?;

    let saved = if cli.no_save {
        None
    } else {
        let annotation = Annotation::new(&config, &result);
        let files = save_outputs(&shaded, &annotation, &cli.output_dir)
            .with_context(|| format!("saving image to {}", cli.output_dir.display()))?;
        Some(files)
    };

    Ok(RunSummary { config, result, shaded, saved })
}
