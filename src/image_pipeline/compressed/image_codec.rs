//! Compressed image codec built on the `image` crate.
//!
//! Decodes PNG and JPEG payloads of `sensor_msgs/CompressedImage` into
//! textures, and encodes textures back into those containers.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageOutputFormat, Luma, RgbImage, RgbaImage};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::compressed::decoder::{CompressedImageDecoder, CompressedImageEncoder};
use crate::image_pipeline::compressed::types::CompressedFormat;
use crate::image_pipeline::encoding::TextureFormat;
use crate::image_pipeline::texture::Texture2D;

/// Codec that delegates container parsing to the `image` crate.
///
/// Decoded pixel types map onto textures as follows:
/// - 8-bit gray → `R8`
/// - 8-bit RGB → `RGB24`
/// - 8-bit RGBA → `RGBA32`
/// - 16-bit gray → `R16` (little endian samples)
/// - anything else is converted to 8-bit RGBA → `RGBA32`
pub struct ImageCrateCodec;

impl CompressedImageDecoder for ImageCrateCodec {
    /// Decodes a compressed image, guessing the container from its magic bytes.
    ///
    /// # Returns
    ///
    /// * `Ok(Texture2D)` - Decoded texture, rows top to bottom
    /// * `Err(ConversionError::DecodeError)` - The payload could not be parsed
    fn decode(&self, data: &[u8]) -> Result<Texture2D> {
        debug!("Decoding compressed image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let (width, height, format, bytes) = match decoded {
            DynamicImage::ImageLuma8(buf) => {
                (buf.width(), buf.height(), TextureFormat::R8, buf.into_raw())
            }
            DynamicImage::ImageRgb8(buf) => {
                (buf.width(), buf.height(), TextureFormat::RGB24, buf.into_raw())
            }
            DynamicImage::ImageRgba8(buf) => {
                (buf.width(), buf.height(), TextureFormat::RGBA32, buf.into_raw())
            }
            DynamicImage::ImageLuma16(buf) => {
                let (width, height) = (buf.width(), buf.height());
                let bytes = buf.into_raw().iter().flat_map(|v| v.to_le_bytes()).collect();
                (width, height, TextureFormat::R16, bytes)
            }
            other => {
                let buf = other.to_rgba8();
                (buf.width(), buf.height(), TextureFormat::RGBA32, buf.into_raw())
            }
        };

        debug!("Decoded image: {}x{} as {:?}", width, height, format);
        Texture2D::from_raw(width as usize, height as usize, format, bytes)
    }
}

fn to_dynamic(texture: &Texture2D) -> Result<DynamicImage> {
    let width = texture.width() as u32;
    let height = texture.height() as u32;
    let data = texture.data().to_vec();
    let mismatch = || ConversionError::EncodeError("texture buffer does not match its size".to_string());

    let image = match texture.format() {
        TextureFormat::R8 => {
            DynamicImage::ImageLuma8(GrayImage::from_raw(width, height, data).ok_or_else(mismatch)?)
        }
        TextureFormat::RGB24 => {
            DynamicImage::ImageRgb8(RgbImage::from_raw(width, height, data).ok_or_else(mismatch)?)
        }
        TextureFormat::RGBA32 => {
            DynamicImage::ImageRgba8(RgbaImage::from_raw(width, height, data).ok_or_else(mismatch)?)
        }
        TextureFormat::R16 => {
            let samples: Vec<u16> = data
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            let buf = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(width, height, samples)
                .ok_or_else(mismatch)?;
            DynamicImage::ImageLuma16(buf)
        }
        other => {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{:?} cannot be compressed",
                other
            )));
        }
    };
    Ok(image)
}

impl CompressedImageEncoder for ImageCrateCodec {
    fn encode(&self, texture: &Texture2D, format: CompressedFormat) -> Result<Vec<u8>> {
        debug!(
            "Encoding {}x{} {:?} texture as {}",
            texture.width(),
            texture.height(),
            texture.format(),
            format.name()
        );

        let image = to_dynamic(texture)?;
        let output_format = match format {
            CompressedFormat::Png => ImageOutputFormat::Png,
            CompressedFormat::Jpeg(quality) => ImageOutputFormat::Jpeg(quality.clamp(1, 100)),
        };

        let mut buffer = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buffer), output_format)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(buffer)
    }
}

/// Encodes a texture with the default codec.
pub fn encode_compressed(texture: &Texture2D, format: CompressedFormat) -> Result<Vec<u8>> {
    ImageCrateCodec.encode(texture, format)
}
