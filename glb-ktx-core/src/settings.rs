//! Compression settings and their defaults
//!
//! The defaults reproduce the fixed configuration the converter has always
//! been run with: quality 128, compression level 5, 4096px textures.

use crate::error::{GlbKtxError, Result};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Default ETC1S quality, 1-255 (lower = smaller files)
pub const DEFAULT_QUALITY: u8 = 128;

/// Default compression level, 0-5 (higher = better compression, slower)
pub const DEFAULT_COMPRESSION: u8 = 5;

/// Default maximum texture dimension in pixels
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 4096;

/// Accepted quality range
pub const QUALITY_RANGE: RangeInclusive<u8> = 1..=255;

/// Accepted compression level range
pub const COMPRESSION_RANGE: RangeInclusive<u8> = 0..=5;

/// Parameters handed to the texture compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionSettings {
    quality: u8,
    compression: u8,
    /// Shown in the settings banner only. The converter is never told about
    /// it, so textures larger than this are not resized.
    max_texture_size: u32,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            compression: DEFAULT_COMPRESSION,
            max_texture_size: DEFAULT_MAX_TEXTURE_SIZE,
        }
    }
}

impl CompressionSettings {
    /// Create validated settings
    pub fn new(quality: u8, compression: u8, max_texture_size: u32) -> Result<Self> {
        if !QUALITY_RANGE.contains(&quality) {
            return Err(GlbKtxError::invalid_setting(
                "quality",
                format!(
                    "{quality} is outside {}-{}",
                    QUALITY_RANGE.start(),
                    QUALITY_RANGE.end()
                ),
            ));
        }
        if !COMPRESSION_RANGE.contains(&compression) {
            return Err(GlbKtxError::invalid_setting(
                "compression",
                format!(
                    "{compression} is outside {}-{}",
                    COMPRESSION_RANGE.start(),
                    COMPRESSION_RANGE.end()
                ),
            ));
        }
        if max_texture_size == 0 {
            return Err(GlbKtxError::invalid_setting(
                "max_texture_size",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            quality,
            compression,
            max_texture_size,
        })
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn compression(&self) -> u8 {
        self.compression
    }

    pub fn max_texture_size(&self) -> u32 {
        self.max_texture_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CompressionSettings::default();
        assert_eq!(settings.quality(), 128);
        assert_eq!(settings.compression(), 5);
        assert_eq!(settings.max_texture_size(), 4096);
        assert_eq!(
            CompressionSettings::new(128, 5, 4096).unwrap(),
            CompressionSettings::default()
        );
    }

    #[test]
    fn test_quality_bounds() {
        assert!(CompressionSettings::new(1, 0, 1).is_ok());
        assert!(CompressionSettings::new(255, 5, 1).is_ok());

        let err = CompressionSettings::new(0, 5, 4096).unwrap_err();
        assert!(matches!(err, GlbKtxError::InvalidSetting { ref name, .. } if name == "quality"));
    }

    #[test]
    fn test_compression_bounds() {
        let err = CompressionSettings::new(128, 6, 4096).unwrap_err();
        assert!(
            matches!(err, GlbKtxError::InvalidSetting { ref name, .. } if name == "compression")
        );
    }

    #[test]
    fn test_zero_texture_size_rejected() {
        assert!(CompressionSettings::new(128, 5, 0).is_err());
    }
}
