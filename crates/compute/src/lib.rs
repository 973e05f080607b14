#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Compute
//!
//! Batched numeric kernels for the sphere-tracing pipeline.
//!
//! Every kernel works on a whole batch of rays at once. Inputs are handed over
//! as [`BufferView`]s (raw bytes plus a shape), the backend validates the
//! buffers and returns one byte vector per output. The [`CpuBackend`] runs
//! every kernel as a scalar loop over the batch.

use std::sync::Arc;
use thiserror::Error;

mod backend;
mod cpu_backend;
pub mod kernels;
pub mod layout;
pub mod types;

pub use backend::ComputeBackend;
pub use cpu_backend::CpuBackend;
pub use types::{MandelbulbParams, MarchParams, Vec3, PHI_ATAN, PHI_ATAN2};

#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("buffer shape mismatch: {0}")]
    ShapeMismatch(&'static str),
    #[error("invalid kernel parameters: {0}")]
    InvalidParams(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    // Distance estimators
    SphereDistance,
    MandelbulbDistance,

    // Marching
    MarchStep,
    CameraDistance,
}

impl Kernel {
    #[must_use]
    pub const fn binding_count(&self) -> u32 {
        layout::binding_count(self)
    }
}

#[derive(Clone, Debug)]
pub struct BufferView {
    pub data: Arc<[u8]>,
    pub shape: Vec<usize>, // Number of elements per dimension
    pub element_size_in_bytes: usize, // Size of a single element described by the innermost dimension of shape
}

impl BufferView {
    #[must_use]
    pub fn new(data: Arc<[u8]>, shape: Vec<usize>, element_size_in_bytes: usize) -> Self {
        Self { data, shape, element_size_in_bytes }
    }

    /// Builds a one-dimensional view over a copy of `values`.
    #[must_use]
    pub fn from_slice<T: bytemuck::Pod>(values: &[T]) -> Self {
        let data: Arc<[u8]> = Arc::from(bytemuck::cast_slice::<T, u8>(values));
        Self::new(data, vec![values.len()], std::mem::size_of::<T>())
    }

    /// Zeroed output placeholder holding `len` elements of `T`.
    #[must_use]
    pub fn placeholder<T: bytemuck::Pod>(len: usize) -> Self {
        Self::new(
            vec![0u8; len * std::mem::size_of::<T>()].into(),
            vec![len],
            std::mem::size_of::<T>(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Copies a read-back byte buffer into typed elements.
///
/// Returned buffers carry no alignment guarantee, so elements are read one by
/// one instead of being cast in place.
///
/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] if the byte count is not a multiple
/// of the element size.
pub fn read_back<T: bytemuck::Pod>(bytes: &[u8]) -> Result<Vec<T>, ComputeError> {
    let size = std::mem::size_of::<T>();
    if size == 0 || bytes.len() % size != 0 {
        return Err(ComputeError::ShapeMismatch(
            "read-back buffer is not a whole number of elements",
        ));
    }
    Ok(bytes
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned::<T>)
        .collect())
}

/// Returns the compute backend used by the renderer.
#[must_use]
pub fn default_backend() -> Arc<dyn ComputeBackend> {
    tracing::info!("Using CpuBackend.");
    Arc::new(CpuBackend::new())
}
