//! PCM audio data processing utilities
//!
//! Channel separation for interleaved or planar 16-bit input, and conversion
//! of 32-sample blocks to the full-scale floating point the filterbank takes.

use crate::error::{InputDataError, InputResult};
use crate::types::{SBLIMIT, SCALE};

/// De-interleave non-interleaved PCM data into separate channel buffers
///
/// Takes PCM data in format [L0, L1, ..., LN, R0, R1, ..., RN] and
/// separates it into individual channel buffers.
pub fn deinterleave_pcm_non_interleaved(
    pcm_data: &[i16],
    channels: usize,
    samples_per_frame: usize,
    channel_buffers: &mut [Vec<i16>],
) {
    for (ch, buffer) in channel_buffers.iter_mut().enumerate().take(channels) {
        buffer.clear();
        let start = (ch * samples_per_frame).min(pcm_data.len());
        let end = (start + samples_per_frame).min(pcm_data.len());
        buffer.extend_from_slice(&pcm_data[start..end]);
    }
}

/// De-interleave interleaved PCM data into separate channel buffers
///
/// Takes PCM data in format [L0, R0, L1, R1, ..., LN, RN] and
/// separates it into individual channel buffers.
pub fn deinterleave_pcm_interleaved(
    pcm_data: &[i16],
    channels: usize,
    samples_per_frame: usize,
    channel_buffers: &mut [Vec<i16>],
) {
    if channels == 0 {
        return;
    }
    for (ch, buffer) in channel_buffers.iter_mut().enumerate().take(channels) {
        buffer.clear();
        buffer.reserve(samples_per_frame);
        buffer.extend(
            pcm_data
                .iter()
                .skip(ch)
                .step_by(channels)
                .take(samples_per_frame)
                .copied(),
        );
    }
}

/// Scale one 32-sample block by the 16-bit full-scale reference
pub fn scale_block(pcm: &[i16]) -> InputResult<[f64; SBLIMIT]> {
    if pcm.len() != SBLIMIT {
        return Err(InputDataError::InvalidLength {
            expected: SBLIMIT,
            actual: pcm.len(),
        });
    }
    let mut block = [0.0; SBLIMIT];
    for (out, &sample) in block.iter_mut().zip(pcm) {
        *out = f64::from(sample) / SCALE;
    }
    Ok(block)
}
