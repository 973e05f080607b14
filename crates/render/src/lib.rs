#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Render
//!
//! Presentation layer for depth maps: [`shade`] turns distances into a
//! lighting imitation and [`save_outputs`] writes the result as a
//! timestamped grayscale PNG together with an annotated figure file.

pub mod error;
pub mod output;
pub mod shading;

pub use error::RenderError;
pub use output::{file_stem, save_outputs, save_outputs_at, Annotation, SavedFiles};
pub use shading::{shade, ShadedImage};
