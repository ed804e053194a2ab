//! Error types for the Layer II encoder core
//!
//! The two per-frame operations (subband analysis and bit-budget accounting)
//! never fail. Everything around them that takes caller-supplied values
//! reports problems through the types defined here.

use std::panic::Location;

use thiserror::Error;

use crate::types::MpegVersion;

/// Main error type for the encoder core
#[derive(Debug, Error)]
pub enum EncoderError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input data validation errors
    #[error("Input data error: {0}")]
    InputData(#[from] InputDataError),

    /// Memory allocation failures
    #[error("Memory allocation error: {0}")]
    Alloc(#[from] AllocError),
}

/// Rate and format lookup errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample rate not usable by MPEG-1 or MPEG-2 LSF Layer II
    #[error("{0} Hz is not a legal sample rate")]
    UnsupportedSampleRate(u32),

    /// Bitrate not present in the table for the given version
    #[error("{bitrate} kbps is not a legal bitrate for version '{}'", .version.name())]
    UnsupportedBitrate { bitrate: u32, version: MpegVersion },

    /// Raw version number outside {0, 1}
    #[error("invalid version index {0}")]
    InvalidMpegVersion(i32),

    /// Layer II handles mono and stereo only
    #[error("Invalid channel count {0}: expected 1 or 2")]
    InvalidChannels(usize),
}

/// Input data validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputDataError {
    /// Invalid PCM data length
    #[error("Invalid PCM data length: expected {expected} samples, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Channel index beyond the analyzer's channel count
    #[error("Invalid channel index {channel}: analyzer has {channels} channels")]
    InvalidChannelIndex { channel: usize, channels: usize },
}

/// Zero-filled allocation failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The allocator refused the request, or the byte size overflowed
    #[error("Unable to allocate {size} bytes at {location}")]
    OutOfMemory {
        size: usize,
        location: &'static Location<'static>,
    },
}

/// Specialized result types for different modules
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type InputResult<T> = std::result::Result<T, InputDataError>;
pub type AllocResult<T> = std::result::Result<T, AllocError>;
pub type Result<T> = std::result::Result<T, EncoderError>;
