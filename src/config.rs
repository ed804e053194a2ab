//! Encoder session configuration
//!
//! Holds the session-constant rate parameters, validates them against the
//! Layer II tables and hands out the per-session state objects built from
//! them.

use crate::error::{ConfigError, ConfigResult};
use crate::frame_budget::FrameBudget;
use crate::subband::SubbandAnalyzer;
use crate::types::{MpegVersion, MAX_CHANNELS};
use crate::util::{
    bitrate_index, library_url, library_version, samplerate_index, version_for_samplerate,
};

/// Session-constant encoder options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderOptions {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Nominal bitrate in kbps
    pub bitrate: u32,
    /// Number of audio channels (1 or 2)
    pub channels: usize,
    /// Insert padding slots to hold the bitrate exactly
    pub padding: bool,
    /// Variable bitrate mode
    pub vbr: bool,
    /// 0 silent, 1 brief, 2 and above detailed
    pub verbosity: u8,
}

/// Header fields derived from validated options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamParams {
    pub version: MpegVersion,
    pub bitrate_index: usize,
    pub samplerate_index: usize,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_vbr(mut self, vbr: bool) -> Self {
        self.vbr = vbr;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Validate the options and derive the header fields
    pub fn validate(&self) -> ConfigResult<StreamParams> {
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(ConfigError::InvalidChannels(self.channels));
        }
        let version = version_for_samplerate(self.sample_rate)?;
        let samplerate_index = samplerate_index(self.sample_rate)?;
        let bitrate_index = bitrate_index(self.bitrate, version)?;
        Ok(StreamParams {
            version,
            bitrate_index,
            samplerate_index,
        })
    }

    /// Bit budget accountant for a new session
    pub fn frame_budget(&self) -> ConfigResult<FrameBudget> {
        self.validate()?;
        FrameBudget::new(self.bitrate, self.sample_rate, self.padding, self.vbr)
    }

    /// Analysis filterbank for a new session
    pub fn subband_analyzer(&self) -> ConfigResult<SubbandAnalyzer> {
        self.validate()?;
        SubbandAnalyzer::new(self.channels)
    }

    /// Configuration report at the given verbosity, `None` when silent
    pub fn summary(&self, verbosity: u8) -> Option<String> {
        let version_name = version_for_samplerate(self.sample_rate)
            .map(MpegVersion::name)
            .unwrap_or("Illegal Version");
        let on_off = |flag: bool| if flag { "On " } else { "Off" };

        match verbosity {
            0 => None,
            1 => Some(format!(
                "LibTwoLame version {} ({})\nEncoding as {}Hz, {} kbps, {}, {} Layer II",
                library_version(),
                library_url(),
                self.sample_rate,
                self.bitrate,
                if self.vbr { "VBR" } else { "CBR" },
                version_name
            )),
            _ => {
                let rate = if self.vbr {
                    "VBR".to_string()
                } else {
                    format!("{} kbps CBR", self.bitrate)
                };
                let channels = if self.channels == 1 { "Mono" } else { "Stereo" };
                Some(format!(
                    "---------------------------------------------------------\n\
                     LibTwoLame {} ({})\n\
                     Output: {} Hz, {}\n\
                     {} {} Layer II\n\
                     [Padding:{}  VBR:{}]\n\
                     ---------------------------------------------------------",
                    library_version(),
                    library_url(),
                    self.sample_rate,
                    channels,
                    rate,
                    version_name,
                    if self.padding { "Normal" } else { "Off   " },
                    on_off(self.vbr)
                ))
            }
        }
    }

    /// Write the configuration report through the logger
    pub fn log_config(&self) {
        if let Some(report) = self.summary(self.verbosity) {
            for line in report.lines() {
                log::info!("{}", line);
            }
        }
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bitrate: 192,
            channels: 2,
            padding: false,
            vbr: false,
            verbosity: 1,
        }
    }
}
