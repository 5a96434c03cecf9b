//! Image to texture conversion configuration types

/// Largest width or height accepted by default
pub const DEFAULT_MAX_DIMENSION: usize = 16384;

/// Configuration for image to texture conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Swap the first and third channel (BGR <-> RGB), alpha untouched
    pub channel_swap: bool,
    /// Reverse the row order of the image
    pub flip_vertical: bool,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Upper bound on width and height when validating
    pub max_dimension: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            channel_swap: false,
            flip_vertical: false,
            validate_dimensions: true,
            max_dimension: Some(DEFAULT_MAX_DIMENSION),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    channel_swap: Option<bool>,
    flip_vertical: Option<bool>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ConversionConfigBuilder {
    pub fn channel_swap(mut self, enable: bool) -> Self {
        self.channel_swap = Some(enable);
        self
    }

    pub fn flip_vertical(mut self, enable: bool) -> Self {
        self.flip_vertical = Some(enable);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            channel_swap: self.channel_swap.unwrap_or(default.channel_swap),
            flip_vertical: self.flip_vertical.unwrap_or(default.flip_vertical),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
