//! Writes the shaded image and its annotated figure next to each other.
//!
//! Both files share a local-time stamp, e.g. `20230106180732Mandelbulb.png`
//! and `figure_20230106180732Mandelbulb.json`.

use crate::error::RenderError;
use crate::shading::ShadedImage;
use chrono::{DateTime, Local};
use raymarch::{RenderConfig, RenderResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

const STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Title block and settings recorded alongside an image.
#[derive(Clone, Debug, Serialize)]
pub struct Annotation {
    pub title: String,
    pub shape: String,
    pub march_iterations: u32,
    pub iterations_run: u32,
    pub fractal_order: u32,
    pub elapsed_seconds: f64,
    pub config: RenderConfig,
}

impl Annotation {
    #[must_use]
    pub fn new(config: &RenderConfig, result: &RenderResult) -> Self {
        let elapsed_seconds = result.elapsed.as_secs_f64();
        let shape = config.shape.name().to_string();
        let title = format!(
            "Marching iterations: {}\n{} iterations: {}\nElapsed time: {:.0} s",
            config.march_steps, shape, config.order, elapsed_seconds
        );
        Self {
            title,
            shape,
            march_iterations: config.march_steps,
            iterations_run: result.iterations_run,
            fractal_order: config.order,
            elapsed_seconds,
            config: config.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFiles {
    pub image: PathBuf,
    pub figure: PathBuf,
}

#[must_use]
pub fn file_stem(stamp: &DateTime<Local>, shape: &str) -> String {
    format!("{}{}", stamp.format(STAMP_FORMAT), shape)
}

/// Saves under `dir`, stamped with the current local time.
///
/// # Errors
///
/// Returns [`RenderError`] if the directory cannot be created or either file
/// cannot be written.
pub fn save_outputs(
    shaded: &ShadedImage,
    annotation: &Annotation,
    dir: &Path,
) -> Result<SavedFiles, RenderError> {
    save_outputs_at(shaded, annotation, dir, &Local::now())
}

/// Saves under `dir` using an explicit time stamp.
///
/// # Errors
///
/// Returns [`RenderError`] if the directory cannot be created or either file
/// cannot be written.
pub fn save_outputs_at(
    shaded: &ShadedImage,
    annotation: &Annotation,
    dir: &Path,
    stamp: &DateTime<Local>,
) -> Result<SavedFiles, RenderError> {
    fs::create_dir_all(dir)?;
    let stem = file_stem(stamp, &annotation.shape);
    let image = dir.join(format!("{stem}.png"));
    let figure = dir.join(format!("figure_{stem}.json"));

    shaded.to_gray_image()?.save(&image)?;
    let writer = BufWriter::new(File::create(&figure)?);
    serde_json::to_writer_pretty(writer, annotation)?;

    tracing::info!("Image files saved: {} and {}", image.display(), figure.display());
    Ok(SavedFiles { image, figure })
}
