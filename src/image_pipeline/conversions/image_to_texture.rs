use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    codec::{PixelLayout, reorder_with_layout},
    common::error::{ConversionError, Result},
    compressed::{CompressedFormat, CompressedImageDecoder, CompressedImageEncoder, ImageCrateCodec},
    conversions::types::ConversionConfig,
    encoding::{tag_pixel_bytes, texture_format},
    message::{CompressedImageMessage, ImageMessage},
    texture::Texture2D,
};

pub struct ImageToTexturePipeline<D: CompressedImageDecoder, E: CompressedImageEncoder> {
    decoder: D,
    encoder: E,
    config: ConversionConfig,
}

impl ImageToTexturePipeline<ImageCrateCodec, ImageCrateCodec> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            decoder: ImageCrateCodec,
            encoder: ImageCrateCodec,
            config,
        }
    }
}

/// Drops per-row padding when `step` is wider than the packed row.
fn packed_rows(data: &[u8], step: usize, row_bytes: usize, height: usize) -> Cow<'_, [u8]> {
    if step <= row_bytes || row_bytes == 0 || data.len() != step * height {
        return Cow::Borrowed(data);
    }
    let mut packed = Vec::with_capacity(row_bytes * height);
    for row in data.chunks_exact(step) {
        packed.extend_from_slice(&row[..row_bytes]);
    }
    Cow::Owned(packed)
}

impl<D: CompressedImageDecoder, E: CompressedImageEncoder> ImageToTexturePipeline<D, E> {
    pub fn with_custom(decoder: D, encoder: E, config: ConversionConfig) -> Self {
        Self {
            decoder,
            encoder,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn reorders(&self) -> bool {
        self.config.channel_swap || self.config.flip_vertical
    }

    fn reorder<'a>(
        &self,
        data: &'a [u8],
        layout: PixelLayout,
        width: usize,
        height: usize,
    ) -> Cow<'a, [u8]> {
        reorder_with_layout(
            data,
            layout,
            width,
            height,
            self.config.channel_swap,
            self.config.flip_vertical,
        )
    }

    /// Loads a raw image message into a texture, applying the configured
    /// channel swap and vertical flip.
    #[instrument(skip(self, message), fields(encoding = %message.encoding, input_size = message.data.len()))]
    pub fn convert(&self, message: &ImageMessage) -> Result<Texture2D> {
        let width = message.width as usize;
        let height = message.height as usize;

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let format = texture_format(&message.encoding)?;
        let row_bytes = width * format.bytes_per_pixel();
        let step = message.step as usize;
        // only strip padding when the tag's own pixel width matches the format
        let tag_bytes = tag_pixel_bytes(&message.encoding);
        if step > row_bytes && tag_bytes != Some(format.bytes_per_pixel()) {
            warn!(step, row_bytes, "Row stride does not match {:?}", format);
            return Err(ConversionError::BufferSizeMismatch {
                expected: row_bytes * height,
                actual: message.data.len(),
            });
        }
        let data = packed_rows(&message.data, step, row_bytes, height);

        let mut data = if self.reorders() {
            let _span = tracing::info_span!("reorder_pixels").entered();
            let layout = PixelLayout::infer(&message.encoding, width, height, data.len())?;
            self.reorder(&data, layout, width, height).into_owned()
        } else {
            data.into_owned()
        };

        // textures hold little endian samples
        let sample_bytes = format.bytes_per_channel();
        if message.is_bigendian != 0 && sample_bytes > 1 {
            for sample in data.chunks_exact_mut(sample_bytes) {
                sample.reverse();
            }
        }

        let texture = Texture2D::from_raw(width, height, format, data)?;
        debug!(?format, width, height, "Loaded raw image");
        Ok(texture)
    }

    /// Decodes a compressed image message into a texture, applying the
    /// configured channel swap and vertical flip.
    #[instrument(skip(self, message), fields(format = %message.format, input_size = message.data.len()))]
    pub fn convert_compressed(&self, message: &CompressedImageMessage) -> Result<Texture2D> {
        let texture = {
            let _span = tracing::info_span!("decode_compressed").entered();
            self.decoder.decode(&message.data)?
        };
        self.apply_reorder(texture)
    }

    fn apply_reorder(&self, texture: Texture2D) -> Result<Texture2D> {
        let (width, height) = (texture.width(), texture.height());
        self.validate_dimensions(width, height)?;
        if !self.reorders() {
            return Ok(texture);
        }

        let _span = tracing::info_span!("reorder_pixels").entered();
        let format = texture.format();
        let layout = PixelLayout {
            channels: format.channels(),
            sample_bytes: format.bytes_per_channel(),
        };
        let data = self.reorder(texture.data(), layout, width, height).into_owned();
        Texture2D::from_raw(width, height, format, data)
    }

    /// Reads a compressed image file, reorders it and writes it back out.
    ///
    /// The output container follows the output file extension (`png`,
    /// `jpg`/`jpeg`); without an extension PNG is written.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Texture2D> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let output_format = output_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(CompressedFormat::from_name)
            .transpose()?
            .unwrap_or(CompressedFormat::Png);

        let texture = {
            let _span = tracing::info_span!("decode_compressed").entered();
            self.decoder.decode(&input_data)?
        };
        let texture = self.apply_reorder(texture)?;

        let encoded = {
            let _span = tracing::info_span!("encode_compressed").entered();
            self.encoder.encode(&texture, output_format)?
        };

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        info!(
            width = texture.width(),
            height = texture.height(),
            "Conversion complete"
        );
        Ok(texture)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
