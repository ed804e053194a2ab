//! # twolame-rs
//!
//! The signal-processing core of an MPEG-1/2 Audio Layer II encoder, based on
//! the twolame library: the 32-band polyphase analysis filterbank and the
//! frame bit-budget accountant that decides padding to hold the bitrate
//! exactly.
//!

pub mod bitstream;
pub mod config;
pub mod error;
pub mod frame_budget;
pub mod mem;
pub mod pcm_utils;
pub mod subband;
pub mod tables;
pub mod types;
pub mod util;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use bitstream::BitBuffer;
pub use config::{EncoderOptions, StreamParams};
pub use error::{AllocError, ConfigError, EncoderError, InputDataError, Result};
pub use frame_budget::{compute_available_bits, FrameAllocation, FrameBudget};
pub use subband::{AnalysisWindow, CoefficientMatrix, FilterbankState, SubbandAnalyzer};
pub use types::MpegVersion;
