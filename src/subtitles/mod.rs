mod decoder;
mod format;
mod formats;
mod reader;
mod registry;
mod types;
mod utils;

pub use decoder::{
    decode, decode_with_formats, decode_with_options, detect_and_decode, read_subtitles,
    DecodedSubtitles,
};
pub use format::SubtitleFormat;
pub use reader::{SubtitleReader, SubtitleReaderFactory};
pub use registry::rank;
pub use types::{DecodeOptions, Probe, SubtitleElement};

// Exports for testing
pub use utils::format_timestamp;
