//! Rate and format lookups
//!
//! Pure mappings over the constant tables in [`crate::tables`]. Invalid
//! inputs log a diagnostic and return an error; nothing here panics.

use crate::error::{ConfigError, ConfigResult};
use crate::tables::{BITRATE_TABLE, SAMPLE_RATES};
use crate::types::{MpegVersion, SAMPLES_PER_FRAME};

/// Library version string
pub fn library_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Library homepage
pub fn library_url() -> &'static str {
    env!("CARGO_PKG_HOMEPAGE")
}

/// Bitrate index (1..=14) for a bitrate in kbps
///
/// Free format (index 0) is not selectable.
pub fn bitrate_index(bitrate: u32, version: MpegVersion) -> ConfigResult<usize> {
    let row = &BITRATE_TABLE[version.table_row()];
    match row.iter().skip(1).position(|&rate| rate == bitrate) {
        Some(pos) => Ok(pos + 1),
        None => {
            log::warn!(
                "bitrate_index: {} is not a legal bitrate for version '{}'",
                bitrate,
                version.name()
            );
            Err(ConfigError::UnsupportedBitrate { bitrate, version })
        }
    }
}

/// Bitrate in kbps for an index, or 0 outside 1..=14
pub fn index_bitrate(version: MpegVersion, index: usize) -> u32 {
    if (1..15).contains(&index) {
        BITRATE_TABLE[version.table_row()][index]
    } else {
        0
    }
}

/// Position of a legal sample rate in [`SAMPLE_RATES`]
fn samplerate_position(sample_rate: u32, caller: &str) -> ConfigResult<usize> {
    SAMPLE_RATES
        .iter()
        .position(|&rate| rate == sample_rate)
        .ok_or_else(|| {
            log::warn!("{}: {} is not a legal sample rate", caller, sample_rate);
            ConfigError::UnsupportedSampleRate(sample_rate)
        })
}

/// Sample rate index as written into the frame header
pub fn samplerate_index(sample_rate: u32) -> ConfigResult<usize> {
    samplerate_position(sample_rate, "samplerate_index").map(|pos| pos % 3)
}

/// MPEG version implied by a sample rate
pub fn version_for_samplerate(sample_rate: u32) -> ConfigResult<MpegVersion> {
    let pos = samplerate_position(sample_rate, "version_for_samplerate")?;
    Ok(if pos < 3 {
        MpegVersion::Mpeg1
    } else {
        MpegVersion::Mpeg2Lsf
    })
}

/// Frame length in bytes, including the padding slot when set
///
/// A zero `sample_rate` yields 0; validate it with [`samplerate_index`] first.
pub fn frame_length(bitrate: u32, sample_rate: u32, padding: bool) -> usize {
    let slots_per_kbps = (SAMPLES_PER_FRAME / 8) as u64;
    let bytes = (slots_per_kbps * u64::from(bitrate) * 1000)
        .checked_div(u64::from(sample_rate))
        .unwrap_or(0);
    bytes as usize + usize::from(padding)
}
