use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::encoding::TextureFormat;
use crate::image_pipeline::message::RegionOfInterest;
use crate::image_pipeline::texture::types::Texture2D;

const HIGHLIGHT: [u8; 4] = [255, 0, 0, 255];
const BACKGROUND: [u8; 4] = [0, 0, 0, 0];
/// Margin added around the region when no overlay size is known.
const OVERLAY_MARGIN: usize = 10;

fn region_bounds(roi: &RegionOfInterest) -> (usize, usize, usize, usize) {
    (
        roi.x_offset as usize,
        roi.y_offset as usize,
        roi.width as usize,
        roi.height as usize,
    )
}

fn check_fits(roi: &RegionOfInterest, width: usize, height: usize) -> Result<()> {
    let (x, y, w, h) = region_bounds(roi);
    if x + w > width || y + h > height {
        return Err(ConversionError::InvalidRegion {
            x_offset: x,
            y_offset: y,
            width: w,
            height: h,
        });
    }
    Ok(())
}

impl Texture2D {
    /// Crops the region of interest out of this texture.
    pub fn region_of_interest(&self, roi: &RegionOfInterest) -> Result<Texture2D> {
        check_fits(roi, self.width(), self.height())?;
        let (x, y, w, h) = region_bounds(roi);
        let pixel_bytes = self.format().bytes_per_pixel();

        let mut data = Vec::with_capacity(w * h * pixel_bytes);
        for row in self.data().chunks_exact(self.row_bytes().max(1)).skip(y).take(h) {
            data.extend_from_slice(&row[x * pixel_bytes..(x + w) * pixel_bytes]);
        }

        Texture2D::from_raw(w, h, self.format(), data)
    }
}

/// Builds an RGBA overlay that marks the region of interest in red.
///
/// Used when there is no source texture to crop from. A zero `width` or
/// `height` sizes the overlay to just contain the region plus a margin.
pub fn highlight_region(roi: &RegionOfInterest, width: usize, height: usize) -> Result<Texture2D> {
    let (x, y, w, h) = region_bounds(roi);
    let (width, height) = if width == 0 || height == 0 {
        (x + w + OVERLAY_MARGIN, y + h + OVERLAY_MARGIN)
    } else {
        (width, height)
    };
    check_fits(roi, width, height)?;
    debug!("Highlighting {}x{} region in {}x{} overlay", w, h, width, height);

    let mut overlay = Texture2D::filled(width, height, TextureFormat::RGBA32, &BACKGROUND)?;
    for py in y..y + h {
        for px in x..x + w {
            overlay.set_pixel(px, py, &HIGHLIGHT);
        }
    }
    Ok(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roi(x_offset: u32, y_offset: u32, width: u32, height: u32) -> RegionOfInterest {
        RegionOfInterest {
            x_offset,
            y_offset,
            width,
            height,
        }
    }

    #[test]
    fn test_crop() {
        let data: Vec<u8> = (0..16).collect();
        let texture = Texture2D::from_raw(4, 4, TextureFormat::R8, data).unwrap();
        let cropped = texture.region_of_interest(&roi(1, 2, 2, 2)).unwrap();
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.data(), &[9, 10, 13, 14]);
    }

    #[test]
    fn test_crop_keeps_format() {
        let data: Vec<u8> = (0..24).collect();
        let texture = Texture2D::from_raw(2, 3, TextureFormat::RGBA32, data).unwrap();
        let cropped = texture.region_of_interest(&roi(1, 1, 1, 1)).unwrap();
        assert_eq!(cropped.format(), TextureFormat::RGBA32);
        assert_eq!(cropped.data(), &[12, 13, 14, 15]);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let texture = Texture2D::from_raw(4, 4, TextureFormat::R8, vec![0; 16]).unwrap();
        let err = texture.region_of_interest(&roi(3, 0, 2, 1)).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidRegion { x_offset: 3, .. }));
    }

    #[test]
    fn test_highlight_sized_from_region() {
        let overlay = highlight_region(&roi(2, 1, 3, 2), 0, 0).unwrap();
        assert_eq!(overlay.width(), 15);
        assert_eq!(overlay.height(), 13);
        assert_eq!(overlay.pixel(2, 1), Some(&HIGHLIGHT[..]));
        assert_eq!(overlay.pixel(4, 2), Some(&HIGHLIGHT[..]));
        assert_eq!(overlay.pixel(5, 2), Some(&BACKGROUND[..]));
        assert_eq!(overlay.pixel(0, 0), Some(&BACKGROUND[..]));
    }

    #[test]
    fn test_highlight_explicit_size() {
        let overlay = highlight_region(&roi(0, 0, 2, 2), 4, 3).unwrap();
        assert_eq!((overlay.width(), overlay.height()), (4, 3));
        assert!(highlight_region(&roi(3, 0, 2, 2), 4, 3).is_err());
    }
}
