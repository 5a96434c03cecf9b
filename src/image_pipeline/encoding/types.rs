//! Texture representation types

/// Channel arrangement of a decoded texel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    R,
    RG,
    RGB,
    RGBA,
}

impl ChannelLayout {
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::R => 1,
            ChannelLayout::RG => 2,
            ChannelLayout::RGB => 3,
            ChannelLayout::RGBA => 4,
        }
    }
}

/// Canonical decoded pixel representations a raw image can be loaded into.
///
/// Names follow the bits-per-texel convention of GPU texture formats, so
/// `RG16` is two 8-bit channels and `RGB48` three 16-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// One 8-bit channel
    R8,
    /// Two 8-bit channels
    RG16,
    /// Three 8-bit channels
    RGB24,
    /// Four 8-bit channels
    RGBA32,
    /// One 16-bit channel
    R16,
    /// Two 16-bit channels
    RG32,
    /// Three 16-bit channels
    RGB48,
    /// Four 16-bit channels
    RGBA64,
    /// One 32-bit float channel
    RFloat,
    /// Two 32-bit float channels
    RGFloat,
    /// Four 32-bit float channels
    RGBAFloat,
}

impl TextureFormat {
    /// Bit depth of a single channel and the channel layout.
    pub fn representation(self) -> (u32, ChannelLayout) {
        match self {
            TextureFormat::R8 => (8, ChannelLayout::R),
            TextureFormat::RG16 => (8, ChannelLayout::RG),
            TextureFormat::RGB24 => (8, ChannelLayout::RGB),
            TextureFormat::RGBA32 => (8, ChannelLayout::RGBA),
            TextureFormat::R16 => (16, ChannelLayout::R),
            TextureFormat::RG32 => (16, ChannelLayout::RG),
            TextureFormat::RGB48 => (16, ChannelLayout::RGB),
            TextureFormat::RGBA64 => (16, ChannelLayout::RGBA),
            TextureFormat::RFloat => (32, ChannelLayout::R),
            TextureFormat::RGFloat => (32, ChannelLayout::RG),
            TextureFormat::RGBAFloat => (32, ChannelLayout::RGBA),
        }
    }

    pub fn bits_per_channel(self) -> u32 {
        self.representation().0
    }

    pub fn channels(self) -> usize {
        self.representation().1.channels()
    }

    pub fn bytes_per_channel(self) -> usize {
        (self.bits_per_channel() / 8) as usize
    }

    pub fn bytes_per_pixel(self) -> usize {
        self.channels() * self.bytes_per_channel()
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            TextureFormat::RFloat | TextureFormat::RGFloat | TextureFormat::RGBAFloat
        )
    }
}
