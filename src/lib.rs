pub mod streams;
pub use streams::{md5_hex, MemoryFile, TextLines};

pub mod subtitles;
pub use subtitles::{
    decode, decode_with_options, detect_and_decode, read_subtitles, DecodeOptions, DecodedSubtitles,
    SubtitleElement, SubtitleFormat,
};

pub mod errors;
pub use errors::{DecodeError, DecodeResult, SubtitleError, SubtitleResult};
