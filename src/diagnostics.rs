//! Per-frame trace collection
//!
//! Records the bit budget and padding decision of every frame together with
//! a summary of the subband output, and saves them to JSON for comparison
//! against reference encoder runs.
//!
//! This module is only available when the "diagnostics" feature is enabled.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EncoderOptions;
use crate::frame_budget::{FrameAllocation, FrameBudget};
use crate::types::SBLIMIT;

/// One frame's accounting record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameTrace {
    /// Frame number (1-based)
    pub frame_number: u64,
    pub bits_available: u32,
    pub padding: bool,
    pub slot_lag: f64,
    /// Frame length including padding
    pub frame_bytes: usize,
    /// Peak absolute subband sample per subband, when analysis ran
    pub subband_peaks: Option<Vec<f64>>,
}

/// Complete trace of an encoding session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTrace {
    pub options: EncoderOptions,
    pub created_at: DateTime<Utc>,
    pub frames: Vec<FrameTrace>,
}

/// Accumulates frame traces for one session
#[derive(Debug)]
pub struct TraceCollector {
    trace: SessionTrace,
    max_frames: usize,
}

impl TraceCollector {
    /// Record at most `max_frames` frames
    pub fn new(options: EncoderOptions, max_frames: usize) -> Self {
        Self {
            trace: SessionTrace {
                options,
                created_at: Utc::now(),
                frames: Vec::new(),
            },
            max_frames,
        }
    }

    /// Record one frame; ignored once the limit is reached
    pub fn record(
        &mut self,
        budget: &FrameBudget,
        allocation: &FrameAllocation,
        subbands: Option<&[[f64; SBLIMIT]]>,
    ) {
        if self.trace.frames.len() >= self.max_frames {
            return;
        }
        let subband_peaks = subbands.map(|blocks| {
            let mut peaks = vec![0.0f64; SBLIMIT];
            for block in blocks {
                for (peak, &sample) in peaks.iter_mut().zip(block) {
                    *peak = peak.max(sample.abs());
                }
            }
            peaks
        });
        self.trace.frames.push(FrameTrace {
            frame_number: self.trace.frames.len() as u64 + 1,
            bits_available: allocation.bits_available,
            padding: allocation.padding,
            slot_lag: allocation.slot_lag,
            frame_bytes: budget.frame_bytes(allocation),
            subband_peaks,
        });
    }

    pub fn trace(&self) -> &SessionTrace {
        &self.trace
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.trace)
    }

    /// Save the trace as JSON to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        log::info!("Trace data saved to: {}", path.as_ref().display());
        Ok(())
    }

    /// Default file name, stamped with the session start time
    pub fn default_file_name(&self) -> String {
        format!(
            "twolame_trace_{}k_{}hz_{}.json",
            self.trace.options.bitrate,
            self.trace.options.sample_rate,
            self.trace.created_at.format("%Y%m%d_%H%M%S")
        )
    }
}
