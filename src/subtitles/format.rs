use super::formats::{
    MicroDvdParser, SubRipParser, SubStationAlphaParser, SubViewerParser, WebVttParser,
};
use super::reader::{LookaheadReader, SubtitleReader, SubtitleReaderFactory};
use super::types::DecodeOptions;
use crate::streams::TextLines;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Subtitle formats known to the decoder, in trial order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubtitleFormat {
    SubRip,
    MicroDvd,
    SubViewer,
    SubStationAlpha,
    WebVtt,
}

impl SubtitleFormat {
    /// Every format in declared order.
    pub const ALL: &'static [SubtitleFormat] = &[
        SubtitleFormat::SubRip,
        SubtitleFormat::MicroDvd,
        SubtitleFormat::SubViewer,
        SubtitleFormat::SubStationAlpha,
        SubtitleFormat::WebVtt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SubtitleFormat::SubRip => "SubRip",
            SubtitleFormat::MicroDvd => "MicroDVD",
            SubtitleFormat::SubViewer => "SubViewer",
            SubtitleFormat::SubStationAlpha => "SubStation Alpha",
            SubtitleFormat::WebVtt => "WebVTT",
        }
    }

    /// File extensions associated with the format, lowercase, without dot
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SubtitleFormat::SubRip => &["srt"],
            SubtitleFormat::MicroDvd => &["sub", "txt"],
            SubtitleFormat::SubViewer => &["sub"],
            SubtitleFormat::SubStationAlpha => &["ssa", "ass"],
            SubtitleFormat::WebVtt => &["vtt"],
        }
    }

    /// Whether `filename` ends with one of this format's extensions.
    pub fn accepts(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }

    /// Create a reader for this format over `lines`.
    pub fn new_reader<'a>(
        &self,
        lines: TextLines<'a>,
        options: &DecodeOptions,
    ) -> Box<dyn SubtitleReader + 'a> {
        match self {
            SubtitleFormat::SubRip => Box::new(LookaheadReader::new(lines, SubRipParser)),
            SubtitleFormat::MicroDvd => Box::new(LookaheadReader::new(
                lines,
                MicroDvdParser::new(options.effective_frame_rate()),
            )),
            SubtitleFormat::SubViewer => Box::new(LookaheadReader::new(lines, SubViewerParser)),
            SubtitleFormat::SubStationAlpha => {
                Box::new(LookaheadReader::new(lines, SubStationAlphaParser::default()))
            }
            SubtitleFormat::WebVtt => {
                Box::new(LookaheadReader::new(lines, WebVttParser::default()))
            }
        }
    }
}

impl SubtitleReaderFactory for SubtitleFormat {
    fn name(&self) -> &str {
        SubtitleFormat::name(self)
    }

    fn accepts(&self, filename: &str) -> bool {
        SubtitleFormat::accepts(self, filename)
    }

    fn new_reader<'a>(
        &self,
        lines: TextLines<'a>,
        options: &DecodeOptions,
    ) -> Box<dyn SubtitleReader + 'a> {
        SubtitleFormat::new_reader(self, lines, options)
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::SubtitleFormat;

    #[test]
    fn test_extension_filter() {
        assert!(SubtitleFormat::SubRip.accepts("movie.srt"));
        assert!(SubtitleFormat::SubRip.accepts("/tmp/Movie.SRT"));
        assert!(!SubtitleFormat::SubRip.accepts("movie.srt.bak"));
        assert!(!SubtitleFormat::SubRip.accepts("srt"));
        assert!(SubtitleFormat::MicroDvd.accepts("movie.txt"));
        assert!(SubtitleFormat::MicroDvd.accepts("movie.sub"));
        assert!(SubtitleFormat::SubViewer.accepts("movie.sub"));
        assert!(SubtitleFormat::SubStationAlpha.accepts("movie.ass"));
        assert!(SubtitleFormat::WebVtt.accepts("movie.vtt"));
        assert!(!SubtitleFormat::WebVtt.accepts(""));
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = SubtitleFormat::ALL.iter().map(|f| f.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SubtitleFormat::ALL.len());
        assert_eq!(SubtitleFormat::WebVtt.to_string(), "WebVTT");
    }
}
