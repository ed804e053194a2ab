//! Shared constants and small types for Layer II encoding

use crate::error::{ConfigError, ConfigResult};

/// Number of subbands produced per analysis hop
pub const SBLIMIT: usize = 32;
/// Length of the analysis window and of the per-channel sample history
pub const HAN_SIZE: usize = 512;
/// Full-scale reference for 16-bit PCM
pub const SCALE: f64 = 32768.0;
/// PCM samples per Layer II frame, for both MPEG-1 and MPEG-2 LSF
pub const SAMPLES_PER_FRAME: usize = 1152;
/// Subband sample blocks per frame (one scalefactor each)
pub const SCALE_BLOCK_COUNT: usize = 3;
/// Subband samples per scalefactor block
pub const SCALE_BLOCK: usize = 12;
/// Layer II slots are bytes
pub const BITS_PER_SLOT: u32 = 8;
/// Layer II carries at most two channels
pub const MAX_CHANNELS: usize = 2;

/// One channel's subband samples for a whole frame: `[block][slot][subband]`
pub type ChannelSubbands = [[[f64; SBLIMIT]; SCALE_BLOCK]; SCALE_BLOCK_COUNT];

/// MPEG audio version as signalled by the Layer II header ID bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MpegVersion {
    /// MPEG-2 lower sampling frequencies (16, 22.05, 24 kHz)
    Mpeg2Lsf = 0,
    /// MPEG-1 (32, 44.1, 48 kHz)
    Mpeg1 = 1,
}

impl MpegVersion {
    /// Human-readable version name
    pub fn name(self) -> &'static str {
        match self {
            MpegVersion::Mpeg2Lsf => "MPEG-2 LSF",
            MpegVersion::Mpeg1 => "MPEG-1",
        }
    }

    /// Row of the bitrate table for this version
    pub fn table_row(self) -> usize {
        self as usize
    }
}

impl TryFrom<i32> for MpegVersion {
    type Error = ConfigError;

    fn try_from(value: i32) -> ConfigResult<Self> {
        match value {
            0 => Ok(MpegVersion::Mpeg2Lsf),
            1 => Ok(MpegVersion::Mpeg1),
            other => Err(ConfigError::InvalidMpegVersion(other)),
        }
    }
}

/// Name for a raw version number, tolerating out-of-range values
pub fn mpeg_version_name(version: i32) -> &'static str {
    MpegVersion::try_from(version)
        .map(MpegVersion::name)
        .unwrap_or("Illegal Version")
}
