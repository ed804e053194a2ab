//! Frame bit budget and padding decisions
//!
//! A Layer II frame is a whole number of byte slots, but the slot count that
//! matches the nominal bitrate is usually fractional (417.96 slots at
//! 128 kbps / 44.1 kHz). The accountant reports the whole-slot budget and
//! decides, with a running fractional lag, which frames carry one extra
//! padding slot so that the long-run average matches the bitrate exactly.
//!
//! The lag is a running accumulator: frames must be accounted one at a
//! time and in order.

use crate::error::ConfigResult;
use crate::types::{BITS_PER_SLOT, SAMPLES_PER_FRAME};
use crate::util::{bitrate_index, frame_length, version_for_samplerate};

/// Budget for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameAllocation {
    /// Payload bits the quantizer may spend (whole slots only)
    pub bits_available: u32,
    /// Whether the frame gets the extra padding slot
    pub padding: bool,
    /// Lag after this frame, to be passed to the next one
    pub slot_lag: f64,
}

/// Exact, possibly fractional, slots per frame at the nominal bitrate
pub fn average_slots(bitrate_kbps: u32, sample_rate_hz: u32) -> f64 {
    (SAMPLES_PER_FRAME as f64 / (f64::from(sample_rate_hz) / 1000.0))
        * (f64::from(bitrate_kbps) / 8.0)
}

/// Bits available for the frame, and whether it is padded
///
/// The padding slot only lengthens the frame downstream; it is never
/// included in `bits_available`. Padding is suppressed entirely in VBR mode.
/// Rates should be validated first (see [`crate::util`]); out-of-table
/// values saturate the bit count and never pad.
pub fn compute_available_bits(
    bitrate_kbps: u32,
    sample_rate_hz: u32,
    padding_enabled: bool,
    vbr_enabled: bool,
    lag: f64,
) -> FrameAllocation {
    let average = average_slots(bitrate_kbps, sample_rate_hz);
    let whole = average.floor();
    let frac = average - whole;

    let mut padding = false;
    let mut slot_lag = lag;

    // NaN (zero sample rate) fails the comparison
    if frac > 0.0 && padding_enabled && !vbr_enabled {
        if slot_lag > frac - 1.0 {
            slot_lag -= frac;
        } else {
            padding = true;
            slot_lag += 1.0 - frac;
        }
    }

    FrameAllocation {
        bits_available: (whole as u32).saturating_mul(BITS_PER_SLOT),
        padding,
        slot_lag,
    }
}

/// Per-session bit budget accountant
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBudget {
    bitrate_kbps: u32,
    sample_rate_hz: u32,
    padding_enabled: bool,
    vbr_enabled: bool,
    slot_lag: f64,
    frames: u64,
}

impl FrameBudget {
    /// Start a session with zero lag
    ///
    /// Fails unless the sample rate and bitrate form a legal pair.
    pub fn new(
        bitrate_kbps: u32,
        sample_rate_hz: u32,
        padding_enabled: bool,
        vbr_enabled: bool,
    ) -> ConfigResult<Self> {
        let version = version_for_samplerate(sample_rate_hz)?;
        bitrate_index(bitrate_kbps, version)?;
        Ok(Self {
            bitrate_kbps,
            sample_rate_hz,
            padding_enabled,
            vbr_enabled,
            slot_lag: 0.0,
            frames: 0,
        })
    }

    /// Account the next frame and advance the lag
    pub fn next_frame(&mut self) -> FrameAllocation {
        let allocation = compute_available_bits(
            self.bitrate_kbps,
            self.sample_rate_hz,
            self.padding_enabled,
            self.vbr_enabled,
            self.slot_lag,
        );
        log::trace!(
            "frame {}: bits_available={} padding={} slot_lag={:.6}",
            self.frames,
            allocation.bits_available,
            allocation.padding,
            allocation.slot_lag
        );
        self.slot_lag = allocation.slot_lag;
        self.frames += 1;
        allocation
    }

    /// Budget at a candidate bitrate, without touching the lag
    ///
    /// Used by VBR bitrate selection, which never pads.
    pub fn available_bits_at(&self, bitrate_kbps: u32) -> u32 {
        compute_available_bits(bitrate_kbps, self.sample_rate_hz, false, true, self.slot_lag)
            .bits_available
    }

    /// Frame length in bytes for an allocation from this session
    pub fn frame_bytes(&self, allocation: &FrameAllocation) -> usize {
        frame_length(self.bitrate_kbps, self.sample_rate_hz, allocation.padding)
    }

    pub fn slot_lag(&self) -> f64 {
        self.slot_lag
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn bitrate(&self) -> u32 {
        self.bitrate_kbps
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate_hz
    }

    pub fn padding_enabled(&self) -> bool {
        self.padding_enabled
    }

    pub fn vbr_enabled(&self) -> bool {
        self.vbr_enabled
    }
}
