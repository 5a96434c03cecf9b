use crate::image_pipeline::{
    common::error::Result,
    compressed::{CompressedFormat, encode_compressed},
    encoding::encoding_for,
    message::{CompressedImageMessage, ImageMessage},
    texture::Texture2D,
};

/// Packs a texture into a raw image message.
///
/// `encoding` overrides the tag derived from the texture format. Samples are
/// written little endian and rows are unpadded.
pub fn to_image_message(texture: &Texture2D, encoding: Option<&str>) -> ImageMessage {
    ImageMessage {
        width: texture.width() as u32,
        height: texture.height() as u32,
        encoding: encoding
            .unwrap_or_else(|| encoding_for(texture.format()))
            .to_string(),
        is_bigendian: 0,
        step: texture.row_bytes() as u32,
        data: texture.data().to_vec(),
    }
}

/// Compresses a texture into a compressed image message.
pub fn to_compressed_message(
    texture: &Texture2D,
    format: CompressedFormat,
) -> Result<CompressedImageMessage> {
    Ok(CompressedImageMessage {
        format: format.name().to_string(),
        data: encode_compressed(texture, format)?,
    })
}
