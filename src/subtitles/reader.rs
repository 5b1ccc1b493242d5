use super::types::{DecodeOptions, Probe, SubtitleElement};
use crate::errors::{SubtitleError, SubtitleResult};
use crate::streams::TextLines;
use std::io;

/// Streaming access to the entries of one subtitle document.
///
/// `probe` must be called before `next_element`. A reader that reports
/// `Probe::Ready` keeps the probed entry and hands it out first.
#[cfg_attr(test, mockall::automock)]
pub trait SubtitleReader {
    /// Check whether the content starts with a valid entry of this format.
    fn probe(&mut self) -> Probe;

    /// Pull the next entry, `Ok(None)` at end of stream.
    fn next_element(&mut self) -> SubtitleResult<Option<SubtitleElement>>;

    /// Release the underlying input. Calling it again is a no-op.
    fn close(&mut self) -> io::Result<()>;
}

/// A subtitle format as seen by the decode loop
pub trait SubtitleReaderFactory {
    fn name(&self) -> &str;

    /// Whether `filename` carries one of this format's extensions.
    fn accepts(&self, filename: &str) -> bool;

    fn new_reader<'a>(
        &self,
        lines: TextLines<'a>,
        options: &DecodeOptions,
    ) -> Box<dyn SubtitleReader + 'a>;
}

/// Format-specific grammar: parse one entry from the current cursor position.
pub(crate) trait ElementParser {
    fn read_next(
        &mut self,
        lines: &mut TextLines<'_>,
    ) -> SubtitleResult<Option<SubtitleElement>>;
}

/// Adapts an `ElementParser` to `SubtitleReader` by buffering one entry
#[derive(Debug)]
pub(crate) struct LookaheadReader<'a, P> {
    lines: Option<TextLines<'a>>,
    parser: P,
    pending: Option<SubtitleElement>,
}

impl<'a, P: ElementParser> LookaheadReader<'a, P> {
    pub fn new(lines: TextLines<'a>, parser: P) -> Self {
        Self {
            lines: Some(lines),
            parser,
            pending: None,
        }
    }

    fn read_next(&mut self) -> SubtitleResult<Option<SubtitleElement>> {
        match self.lines.as_mut() {
            Some(lines) => self.parser.read_next(lines),
            None => Err(SubtitleError::new("reader is closed")),
        }
    }
}

impl<P: ElementParser> SubtitleReader for LookaheadReader<'_, P> {
    fn probe(&mut self) -> Probe {
        if self.pending.is_some() {
            return Probe::Ready;
        }
        match self.read_next() {
            Ok(Some(element)) => {
                self.pending = Some(element);
                Probe::Ready
            }
            Ok(None) => Probe::Exhausted,
            Err(err) => Probe::Mismatch(err),
        }
    }

    fn next_element(&mut self) -> SubtitleResult<Option<SubtitleElement>> {
        if let Some(element) = self.pending.take() {
            return Ok(Some(element));
        }
        self.read_next()
    }

    fn close(&mut self) -> io::Result<()> {
        self.lines = None;
        self.pending = None;
        Ok(())
    }
}
