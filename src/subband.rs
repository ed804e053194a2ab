//! Subband analysis filterbank
//!
//! Polyphase analysis for Layer II: every call shifts 32 new PCM samples into
//! a 512-sample history, windows it with the analysis window and folds the
//! 64 windowed sums into 32 subband samples through a 16x32 cosine matrix.
//!
//! The history is kept as two 256-sample halves, each holding 32 rows of 8
//! lanes. Consecutive calls alternate halves, and the lane origin steps back
//! by one every second call, so a sample written once is read in place for
//! the rest of its lifetime without shifting the buffer.
//!
//! Every [`FilterbankState`] must be fed by one caller at a time, in frame
//! order. The window and matrix are immutable and shared.

use lazy_static::lazy_static;
use std::f64::consts::PI;

use crate::error::{ConfigError, ConfigResult, InputDataError, InputResult, Result};
use crate::mem::zeroed_slice;
use crate::pcm_utils::{
    deinterleave_pcm_interleaved, deinterleave_pcm_non_interleaved, scale_block,
};
use crate::tables::ENWINDOW;
use crate::types::{
    ChannelSubbands, HAN_SIZE, MAX_CHANNELS, SAMPLES_PER_FRAME, SBLIMIT, SCALE_BLOCK,
    SCALE_BLOCK_COUNT,
};

/// Lanes per history row
const LANES: usize = 8;
/// Rows of the cosine matrix; the other 16 subbands come from symmetry
const MATRIX_ROWS: usize = SBLIMIT / 2;
/// Distance between window taps belonging to the same output position
const WINDOW_STRIDE: usize = 64;

lazy_static! {
    static ref DCT_MATRIX: CoefficientMatrix = CoefficientMatrix::new();
    static ref STANDARD_WINDOW: AnalysisWindow = AnalysisWindow::new(ENWINDOW);
}

/// Cosine projection matrix, `m[i][k] = cos((2i+1) k pi / 64)`
///
/// Entries are rounded to nine decimals so that every platform produces the
/// same matrix regardless of its `cos` implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientMatrix {
    m: [[f64; SBLIMIT]; MATRIX_ROWS],
}

impl CoefficientMatrix {
    pub fn new() -> Self {
        let mut m = [[0.0; SBLIMIT]; MATRIX_ROWS];
        for (i, row) in m.iter_mut().enumerate() {
            for (k, entry) in row.iter_mut().enumerate() {
                let angle = ((2 * i + 1) * k) as f64 * (PI / 64.0);
                // f64::round rounds half away from zero
                *entry = (1e9 * angle.cos()).round() * 1e-9;
            }
        }
        Self { m }
    }

    /// Process-wide instance
    pub fn shared() -> &'static CoefficientMatrix {
        &DCT_MATRIX
    }

    pub fn row(&self, row: usize) -> &[f64; SBLIMIT] {
        &self.m[row]
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.m[row][column]
    }
}

impl Default for CoefficientMatrix {
    fn default() -> Self {
        Self::new()
    }
}

/// 512-tap analysis window
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisWindow {
    coefficients: [f64; HAN_SIZE],
}

impl AnalysisWindow {
    pub const fn new(coefficients: [f64; HAN_SIZE]) -> Self {
        Self { coefficients }
    }

    /// The standard ISO 11172-3 window, shared process-wide
    pub fn standard() -> &'static AnalysisWindow {
        &STANDARD_WINDOW
    }

    /// Tap `tap` (0..8) for windowed output `position` (0..64)
    #[inline]
    pub fn tap(&self, position: usize, tap: usize) -> f64 {
        self.coefficients[position + tap * WINDOW_STRIDE]
    }

    pub fn coefficients(&self) -> &[f64; HAN_SIZE] {
        &self.coefficients
    }
}

/// Sample history addressed by `(half, row, lane)`
#[derive(Debug, Clone, PartialEq)]
struct SampleHistory {
    halves: [[[f64; LANES]; SBLIMIT]; 2],
}

impl SampleHistory {
    fn new() -> Self {
        Self {
            halves: [[[0.0; LANES]; SBLIMIT]; 2],
        }
    }

    #[inline]
    fn write(&mut self, half: usize, row: usize, lane: usize, value: f64) {
        self.halves[half][row][lane] = value;
    }

    #[inline]
    fn read(&self, half: usize, row: usize, lane: usize) -> f64 {
        self.halves[half][row][lane]
    }

    /// Dot product of one row's 8 lanes, taken circularly from `first_lane`,
    /// with the window taps of `position`
    #[inline]
    fn windowed_sum(
        &self,
        half: usize,
        row: usize,
        first_lane: usize,
        window: &AnalysisWindow,
        position: usize,
    ) -> f64 {
        let lanes = &self.halves[half][row];
        let mut t = lanes[first_lane] * window.tap(position, 0);
        for tap in 1..LANES {
            t += lanes[(first_lane + tap) % LANES] * window.tap(position, tap);
        }
        t
    }

    fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.halves.iter().flatten().flatten().copied()
    }
}

/// Per-channel analysis state
#[derive(Debug, Clone, PartialEq)]
pub struct FilterbankState {
    history: SampleHistory,
    lane_offset: usize,
    half: usize,
}

impl FilterbankState {
    /// Zeroed history, lane origin 0, first half active
    pub fn new() -> Self {
        Self {
            history: SampleHistory::new(),
            lane_offset: 0,
            half: 0,
        }
    }

    /// Analyze 32 new samples with the shared window and matrix
    ///
    /// Samples are in time order and already divided by the full-scale
    /// reference.
    pub fn analyze(&mut self, samples: &[f64; SBLIMIT]) -> [f64; SBLIMIT] {
        self.analyze_with(AnalysisWindow::standard(), CoefficientMatrix::shared(), samples)
    }

    /// Analyze 32 new samples with an explicit window and matrix
    pub fn analyze_with(
        &mut self,
        window: &AnalysisWindow,
        matrix: &CoefficientMatrix,
        samples: &[f64; SBLIMIT],
    ) -> [f64; SBLIMIT] {
        let active = self.half;
        let origin = self.lane_offset;

        // Newest sample lands in row 0
        for (i, &sample) in samples.iter().enumerate() {
            self.history.write(active, SBLIMIT - 1 - i, origin, sample);
        }

        let mut y = [0.0; 2 * SBLIMIT];
        for (row, out) in y[..SBLIMIT].iter_mut().enumerate() {
            *out = self.history.windowed_sum(active, row, origin, window, row);
        }

        let (other, other_origin) = if active == 1 {
            (0, (origin + 1) % LANES)
        } else {
            (1, origin)
        };
        for (row, out) in y[SBLIMIT..].iter_mut().enumerate() {
            *out = self
                .history
                .windowed_sum(other, row, other_origin, window, row + SBLIMIT);
        }

        let yprime = fold(&y);
        let subbands = project(matrix, &yprime);

        self.half ^= 1;
        if self.half == 1 {
            self.lane_offset = (self.lane_offset + LANES - 1) % LANES;
        }

        subbands
    }

    /// Lane origin, in 0..8
    pub fn lane_offset(&self) -> usize {
        self.lane_offset
    }

    /// Index of the half written by the next call
    pub fn half_selector(&self) -> usize {
        self.half
    }

    /// Raw history sample at `(half, row, lane)`
    pub fn history_sample(&self, half: usize, row: usize, lane: usize) -> f64 {
        self.history.read(half, row, lane)
    }

    /// True once every stored sample is exactly zero
    pub fn is_silent(&self) -> bool {
        self.history.iter().all(|sample| sample == 0.0)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FilterbankState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold the 64 windowed sums into the 32 inputs of the cosine matrix
fn fold(y: &[f64; 2 * SBLIMIT]) -> [f64; SBLIMIT] {
    let mut yprime = [0.0; SBLIMIT];
    yprime[0] = y[16];
    for i in 1..=16 {
        yprime[i] = y[16 + i] + y[16 - i];
    }
    for i in 17..SBLIMIT {
        yprime[i] = y[16 + i] - y[80 - i];
    }
    yprime
}

/// Project onto the 16 matrix rows; row `i` yields subbands `i` and `31 - i`
fn project(matrix: &CoefficientMatrix, yprime: &[f64; SBLIMIT]) -> [f64; SBLIMIT] {
    let mut subbands = [0.0; SBLIMIT];
    for i in (0..MATRIX_ROWS).rev() {
        let mut s0 = 0.0;
        let mut s1 = 0.0;
        for (m, x) in matrix
            .row(i)
            .chunks_exact(2)
            .zip(yprime.chunks_exact(2))
        {
            s0 += m[0] * x[0];
            s1 += m[1] * x[1];
        }
        subbands[i] = s0 + s1;
        subbands[SBLIMIT - 1 - i] = s0 - s1;
    }
    subbands
}

/// Subband samples of one frame, `[channel]` then `[block][slot][subband]`
pub type FrameSubbands = Vec<ChannelSubbands>;

/// Analysis filterbank for all channels of a stream
#[derive(Debug, Clone)]
pub struct SubbandAnalyzer {
    channels: Vec<FilterbankState>,
}

impl SubbandAnalyzer {
    /// Create an analyzer for mono (1) or stereo (2) input
    pub fn new(channels: usize) -> ConfigResult<Self> {
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(ConfigError::InvalidChannels(channels));
        }
        Ok(Self {
            channels: vec![FilterbankState::new(); channels],
        })
    }

    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    pub fn state(&self, channel: usize) -> Option<&FilterbankState> {
        self.channels.get(channel)
    }

    /// Scale and analyze one block of 32 PCM samples for `channel`
    pub fn filter_block(&mut self, channel: usize, pcm: &[i16]) -> InputResult<[f64; SBLIMIT]> {
        let channels = self.channels.len();
        let state = self
            .channels
            .get_mut(channel)
            .ok_or(InputDataError::InvalidChannelIndex { channel, channels })?;
        let block = scale_block(pcm)?;
        Ok(state.analyze(&block))
    }

    /// Analyze one frame of planar PCM, 1152 samples per channel
    ///
    /// Blocks are processed in time order, alternating channels within each
    /// block, exactly as the quantizer expects them.
    pub fn filter_frame(&mut self, pcm: &[Vec<i16>]) -> Result<FrameSubbands> {
        let channels = self.channels.len();
        if pcm.len() != channels {
            return Err(InputDataError::InvalidLength {
                expected: channels,
                actual: pcm.len(),
            }
            .into());
        }
        if let Some(short) = pcm.iter().find(|c| c.len() != SAMPLES_PER_FRAME) {
            return Err(InputDataError::InvalidLength {
                expected: SAMPLES_PER_FRAME,
                actual: short.len(),
            }
            .into());
        }

        let mut frame: FrameSubbands = zeroed_slice(channels)?;
        for block in 0..SCALE_BLOCK_COUNT {
            for slot in 0..SCALE_BLOCK {
                let start = (block * SCALE_BLOCK + slot) * SBLIMIT;
                for ch in 0..channels {
                    frame[ch][block][slot] =
                        self.filter_block(ch, &pcm[ch][start..start + SBLIMIT])?;
                }
            }
        }
        Ok(frame)
    }

    /// Analyze one frame of interleaved PCM (L, R, L, R, ...)
    pub fn filter_frame_interleaved(&mut self, pcm: &[i16]) -> Result<FrameSubbands> {
        let channels = self.channels.len();
        let expected = SAMPLES_PER_FRAME * channels;
        if pcm.len() != expected {
            return Err(InputDataError::InvalidLength {
                expected,
                actual: pcm.len(),
            }
            .into());
        }

        let mut buffers = vec![Vec::new(); channels];
        deinterleave_pcm_interleaved(pcm, channels, SAMPLES_PER_FRAME, &mut buffers);
        self.filter_frame(&buffers)
    }

    /// Analyze one frame of channel-after-channel PCM in a single buffer
    pub fn filter_frame_planar(&mut self, pcm: &[i16]) -> Result<FrameSubbands> {
        let channels = self.channels.len();
        let expected = SAMPLES_PER_FRAME * channels;
        if pcm.len() != expected {
            return Err(InputDataError::InvalidLength {
                expected,
                actual: pcm.len(),
            }
            .into());
        }

        let mut buffers = vec![Vec::new(); channels];
        deinterleave_pcm_non_interleaved(pcm, channels, SAMPLES_PER_FRAME, &mut buffers);
        self.filter_frame(&buffers)
    }

    pub fn reset(&mut self) {
        self.channels.iter_mut().for_each(FilterbankState::reset);
    }
}
