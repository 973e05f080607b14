//! Fake lighting from depth differences.
//!
//! Neighbouring depths along the second image-plane axis are differenced to
//! approximate how much the surface faces the viewer; the slope is squashed
//! through `atan` and pixels that hit nothing are left black.

use crate::error::RenderError;
use image::GrayImage;
use raymarch::DepthMap;

/// Depths at or beyond this count as background.
pub const BACKGROUND_DEPTH: f32 = 4.0;
pub const SLOPE_GAIN: f32 = 250.0;
pub const SLOPE_BIAS: f32 = 0.1;
/// Brightness gained per pixel of resolution.
pub const INTENSITY_PER_PIXEL: f32 = 1.0 / 2000.0;

/// Intensities in `[0, 1]`, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedImage {
    width: usize,
    height: usize,
    pixels: Vec<f32>,
}

impl ShadedImage {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    /// Stretches the intensity range onto 8-bit gray; a constant image is black.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::BufferSize`] if the dimensions overflow `u32`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_gray_image(&self) -> Result<GrayImage, RenderError> {
        let (lo, hi) = self
            .pixels
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let range = hi - lo;
        let bytes: Vec<u8> = self
            .pixels
            .iter()
            .map(|&v| {
                if range > 0.0 {
                    (((v - lo) / range) * 255.0).round() as u8
                } else {
                    0
                }
            })
            .collect();

        let size_err = || RenderError::BufferSize { width: self.width, height: self.height };
        let width = u32::try_from(self.width).map_err(|_| size_err())?;
        let height = u32::try_from(self.height).map_err(|_| size_err())?;
        GrayImage::from_raw(width, height, bytes).ok_or_else(size_err)
    }
}

/// Shades `depth` into an image `resolution` wide and `resolution - 2` high.
///
/// Image column `x` is depth-map row `x`; image row `y` is depth-map column `y`.
///
/// # Errors
///
/// Returns [`RenderError::ImageTooSmall`] for resolutions below 3.
#[allow(clippy::cast_precision_loss)]
pub fn shade(depth: &DepthMap) -> Result<ShadedImage, RenderError> {
    let resolution = depth.resolution();
    if resolution < 3 {
        return Err(RenderError::ImageTooSmall(resolution));
    }
    let width = resolution;
    let height = resolution - 2;
    let gain = resolution as f32 * INTENSITY_PER_PIXEL;

    let mut pixels = vec![0.0; width * height];
    for (x, row) in depth.rows().enumerate() {
        for (y, pair) in row.windows(2).take(height).enumerate() {
            let (here, next) = (pair[0], pair[1]);
            if here < BACKGROUND_DEPTH {
                let lit = ((here - next) * SLOPE_GAIN - SLOPE_BIAS).atan() * gain;
                if lit.is_finite() {
                    pixels[y * width + x] = lit.clamp(0.0, 1.0);
                }
            }
        }
    }

    Ok(ShadedImage { width, height, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(resolution: usize, f: impl Fn(usize, usize) -> f32) -> DepthMap {
        let mut values = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            for j in 0..resolution {
                values.push(f(i, j));
            }
        }
        DepthMap::new(resolution, values).unwrap()
    }

    #[test]
    fn flat_surface_is_dark() {
        let shaded = shade(&depth(5, |_, _| 2.0)).unwrap();
        assert_eq!(shaded.width(), 5);
        assert_eq!(shaded.height(), 3);
        assert!(shaded.pixels().iter().all(|&v| v == 0.0));
        let gray = shaded.to_gray_image().unwrap();
        assert!(gray.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn receding_slope_lights_only_its_row() {
        // Depth-map row 1 gets closer along j; every other row is flat.
        let shaded = shade(&depth(6, |i, j| if i == 1 { 3.0 - 0.1 * j as f32 } else { 2.0 })).unwrap();
        let expected = (0.1_f32 * 250.0 - 0.1).atan() * 6.0 / 2000.0;
        for y in 0..shaded.height() {
            assert!((shaded.get(1, y).unwrap() - expected).abs() < 1e-5);
            for x in [0, 2, 3, 4, 5] {
                assert_eq!(shaded.get(x, y), Some(0.0));
            }
        }
    }

    #[test]
    fn background_is_masked() {
        let shaded = shade(&depth(4, |_, j| 6.0 - j as f32)).unwrap();
        assert!(shaded.pixels().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn intensity_is_clipped_to_one() {
        // atan saturates near pi / 2, so the gain must exceed 2 / pi to clip.
        let shaded = shade(&depth(1500, |i, j| if i == 0 { 3.0 - 0.1 * j as f32 } else { 1.0 })).unwrap();
        assert!(shaded.pixels().iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(shaded.get(0, 0), Some(1.0));
    }

    #[test]
    fn tiny_maps_are_rejected() {
        let result = shade(&depth(2, |_, _| 1.0));
        assert!(matches!(result, Err(RenderError::ImageTooSmall(2))));
    }

    #[test]
    fn gray_image_spans_full_range() {
        let shaded = shade(&depth(5, |i, j| if i == 2 { 3.0 - 0.5 * j as f32 } else { 2.0 })).unwrap();
        let gray = shaded.to_gray_image().unwrap();
        assert_eq!(gray.dimensions(), (5, 3));
        assert_eq!(gray.get_pixel(2, 0).0[0], 255);
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
    }
}
