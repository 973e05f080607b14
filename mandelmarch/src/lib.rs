//! # Mandelmarch
//!
//! Renders depth images of a Mandelbulb (or a plain sphere) by sphere tracing
//! a square grid of camera rays against a distance estimator.
//!
//! ## The Crates
//!
//! -   **`mandelmarch`:** this crate. It parses the command line, installs
//!     logging and drives one render from configuration to saved files.
//! -   **[`compute`]:** batched numeric kernels behind the `ComputeBackend`
//!     trait, with a CPU backend that evaluates every ray in a plain loop.
//! -   **[`raymarch`]:** camera setup, distance estimators, the ray marcher
//!     and the projection of final ray positions into a depth map.
//! -   **[`render`]:** fake lighting of the depth map and the timestamped
//!     PNG plus figure annotation written next to it.
//!
//! ## Getting Started
//!
//! ```text
//! mandelmarch --resolution 400 --march 200 --order 6 --elevation-deg 310
//! ```
//!
//! Set `RUST_LOG=debug` to follow the marching progress.

pub mod app;
pub mod cli;

pub use compute;
pub use raymarch;
pub use render;
