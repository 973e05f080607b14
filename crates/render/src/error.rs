use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("depth map of resolution {0} is too small to shade (need at least 3)")]
    ImageTooSmall(usize),
    #[error("pixel buffer does not match a {width}x{height} image")]
    BufferSize { width: usize, height: usize },
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write figure annotation: {0}")]
    Json(#[from] serde_json::Error),
}
