use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::compressed::types::CompressedFormat;
use crate::image_pipeline::texture::Texture2D;

pub trait CompressedImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<Texture2D>;
}

pub trait CompressedImageEncoder {
    fn encode(&self, texture: &Texture2D, format: CompressedFormat) -> Result<Vec<u8>>;
}
