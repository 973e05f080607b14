use compute::{read_back, BufferView, ComputeBackend, ComputeError, Kernel, Vec3};

/// Square grid of camera-to-surface distances.
///
/// Row `i`, column `j` belongs to the ray through image-plane sample `(i, j)`.
/// Values are neither normalised nor clipped.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthMap {
    resolution: usize,
    values: Vec<f32>,
}

impl DepthMap {
    /// # Errors
    ///
    /// Returns [`ComputeError::ShapeMismatch`] unless `values` holds exactly
    /// `resolution * resolution` entries.
    pub fn new(resolution: usize, values: Vec<f32>) -> Result<Self, ComputeError> {
        if values.len() != resolution * resolution {
            return Err(ComputeError::ShapeMismatch(
                "depth map needs resolution * resolution values",
            ));
        }
        Ok(Self { resolution, values })
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.resolution && col < self.resolution {
            self.values.get(row * self.resolution + col).copied()
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.values.chunks(self.resolution.max(1))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

/// Distances from `camera` to each final ray position, reshaped into a grid.
///
/// # Errors
///
/// Propagates backend errors and rejects position counts that do not form a
/// `resolution x resolution` grid.
pub fn project(
    backend: &dyn ComputeBackend,
    positions: &[Vec3],
    camera: Vec3,
    resolution: usize,
) -> Result<DepthMap, ComputeError> {
    let binds = [
        BufferView::from_slice(positions),
        BufferView::from_slice(&[camera]),
        BufferView::placeholder::<f32>(positions.len()),
    ];
    let out = backend.dispatch(&Kernel::CameraDistance, &binds, crate::workgroups(positions.len()))?;
    let bytes = out
        .into_iter()
        .next()
        .ok_or(ComputeError::ShapeMismatch("CameraDistance returned no output buffer"))?;
    DepthMap::new(resolution, read_back(&bytes)?)
}
