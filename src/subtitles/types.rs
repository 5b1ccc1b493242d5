use super::utils::format_timestamp;
use crate::errors::SubtitleError;
use serde::Serialize;

/// One timed subtitle entry, times in milliseconds
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubtitleElement {
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
}

impl SubtitleElement {
    pub fn new(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Start time in SRT notation (`HH:MM:SS,mmm`)
    pub fn format_start(&self) -> String {
        format_timestamp(self.start_ms)
    }

    /// End time in SRT notation (`HH:MM:SS,mmm`)
    pub fn format_end(&self) -> String {
        format_timestamp(self.end_ms)
    }
}

/// Outcome of asking a reader whether its content starts with a valid entry
#[derive(Debug, PartialEq)]
pub enum Probe {
    /// The first entry parsed; the format matches
    Ready,
    /// The content is well-formed for this format but holds no entries
    Exhausted,
    /// The content is not in this format
    Mismatch(SubtitleError),
}

/// Options shared by all format readers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// Frame rate used for frame-based formats when the file does not declare one
    pub frame_rate: f64,
}

impl DecodeOptions {
    pub const DEFAULT_FRAME_RATE: f64 = 23.976;

    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// The configured frame rate, or the default when it is unusable.
    pub fn effective_frame_rate(&self) -> f64 {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            self.frame_rate
        } else {
            Self::DEFAULT_FRAME_RATE
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            frame_rate: Self::DEFAULT_FRAME_RATE,
        }
    }
}
