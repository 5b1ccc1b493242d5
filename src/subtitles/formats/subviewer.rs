use crate::errors::{SubtitleError, SubtitleResult};
use crate::streams::TextLines;
use crate::subtitles::reader::ElementParser;
use crate::subtitles::types::SubtitleElement;
use crate::subtitles::utils::clock_to_millis;
use once_cell::sync::Lazy;
use regex::Regex;

static SUBVIEWER_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})\.(\d{2}),(\d+):(\d{2}):(\d{2})\.(\d{2})$").unwrap()
});

/// SubViewer 2.0 (.sub): `[TAG]` header, then `H:MM:SS.cc,H:MM:SS.cc` blocks
#[derive(Debug, Default)]
pub(crate) struct SubViewerParser;

impl ElementParser for SubViewerParser {
    fn read_next(
        &mut self,
        lines: &mut TextLines<'_>,
    ) -> SubtitleResult<Option<SubtitleElement>> {
        let timing = loop {
            let Some(line) = lines.next_line() else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('[') {
                continue;
            }
            break line.to_string();
        };

        let caps = SUBVIEWER_TIMING.captures(&timing).ok_or_else(|| {
            SubtitleError::at_line(lines.line_number(), format!("expected timing: {:?}", timing))
        })?;
        let start = clock_to_millis(&caps[1], &caps[2], &caps[3], &caps[4]);
        let end = clock_to_millis(&caps[5], &caps[6], &caps[7], &caps[8]);
        let (Some(start_ms), Some(end_ms)) = (start, end) else {
            return Err(SubtitleError::at_line(
                lines.line_number(),
                format!("timing out of range: {:?}", timing),
            ));
        };

        let mut text = Vec::new();
        while let Some(line) = lines.next_line() {
            if line.trim().is_empty() {
                break;
            }
            text.push(line);
        }

        Ok(Some(SubtitleElement::new(
            start_ms,
            end_ms,
            text.join("\n").replace("[br]", "\n"),
        )))
    }
}
