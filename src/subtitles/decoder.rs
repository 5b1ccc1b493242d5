use super::format::SubtitleFormat;
use super::reader::{SubtitleReader, SubtitleReaderFactory};
use super::registry::rank;
use super::types::{DecodeOptions, Probe, SubtitleElement};
use crate::errors::{DecodeError, DecodeResult};
use crate::streams::MemoryFile;
use log::{debug, info, warn};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// Elements decoded from a file together with the format that matched
#[derive(Debug)]
pub struct DecodedSubtitles<'f, F = SubtitleFormat> {
    pub format: &'f F,
    pub elements: Vec<SubtitleElement>,
}

/// Decode a subtitle file even if its extension is wrong.
pub fn decode(file: &MemoryFile) -> DecodeResult<Vec<SubtitleElement>> {
    decode_with_options(file, &DecodeOptions::default())
}

pub fn decode_with_options(
    file: &MemoryFile,
    options: &DecodeOptions,
) -> DecodeResult<Vec<SubtitleElement>> {
    decode_with_formats(file, SubtitleFormat::ALL, options).map(|decoded| decoded.elements)
}

/// Decode and report which format matched.
pub fn detect_and_decode(file: &MemoryFile) -> DecodeResult<DecodedSubtitles<'static>> {
    decode_with_formats(file, SubtitleFormat::ALL, &DecodeOptions::default())
}

/// Read `path` into memory and decode it.
pub fn read_subtitles<P: AsRef<Path>>(path: P) -> DecodeResult<Vec<SubtitleElement>> {
    let file = MemoryFile::read(path)?;
    decode(&file)
}

/// Try each of `formats`, likely ones first, and return the output of the
/// first reader that recognizes the content.
///
/// A probe that fails or finds nothing moves on to the next format. Once a
/// probe has found an entry the format is committed: a read error after that
/// point is returned as `CorruptContent` instead of trying other formats.
pub fn decode_with_formats<'f, F: SubtitleReaderFactory>(
    file: &MemoryFile,
    formats: &'f [F],
    options: &DecodeOptions,
) -> DecodeResult<DecodedSubtitles<'f, F>> {
    let candidates = rank(file.name(), formats);
    let mut attempted = Vec::with_capacity(candidates.len());

    for format in candidates {
        attempted.push(format.name().to_string());
        let mut reader =
            ClosingReader::new(format.new_reader(file.text_lines(), options), format.name());

        match reader.probe() {
            Probe::Ready => {}
            Probe::Exhausted => {
                debug!("{}: no entries in '{}'", format.name(), file.name());
                continue;
            }
            Probe::Mismatch(err) => {
                debug!("{}: does not match '{}': {}", format.name(), file.name(), err);
                continue;
            }
        }

        let mut elements = Vec::with_capacity(500);
        loop {
            let next = reader.next_element().map_err(|source| DecodeError::CorruptContent {
                format: format.name().to_string(),
                source,
            })?;
            match next {
                Some(element) => elements.push(element),
                None => break,
            }
        }

        if elements.is_empty() {
            warn!(
                "{}: probe succeeded but no entries were read from '{}'",
                format.name(),
                file.name()
            );
            continue;
        }

        info!(
            "Decoded '{}' as {}: {} entries",
            file.name(),
            format.name(),
            elements.len()
        );
        return Ok(DecodedSubtitles { format, elements });
    }

    Err(DecodeError::UnsupportedFormat {
        filename: file.name().to_string(),
        attempted,
    })
}

/// Closes the wrapped reader when dropped
struct ClosingReader<'a, 'n> {
    reader: Box<dyn SubtitleReader + 'a>,
    format: &'n str,
}

impl<'a, 'n> ClosingReader<'a, 'n> {
    fn new(reader: Box<dyn SubtitleReader + 'a>, format: &'n str) -> Self {
        Self { reader, format }
    }
}

impl<'a> Deref for ClosingReader<'a, '_> {
    type Target = dyn SubtitleReader + 'a;

    fn deref(&self) -> &Self::Target {
        self.reader.as_ref()
    }
}

impl DerefMut for ClosingReader<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.reader.as_mut()
    }
}

impl Drop for ClosingReader<'_, '_> {
    fn drop(&mut self) {
        if let Err(err) = self.reader.close() {
            warn!("{}: failed to close reader: {}", self.format, err);
        }
    }
}
