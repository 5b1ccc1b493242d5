use crate::errors::{SubtitleError, SubtitleResult};
use crate::streams::TextLines;
use crate::subtitles::reader::ElementParser;
use crate::subtitles::types::SubtitleElement;
use crate::subtitles::utils::clock_to_millis;
use once_cell::sync::Lazy;
use regex::Regex;

static SRT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})$").unwrap());

/// SubRip (.srt): numbered blocks with `HH:MM:SS,mmm --> HH:MM:SS,mmm` timings
#[derive(Debug, Default)]
pub(crate) struct SubRipParser;

impl ElementParser for SubRipParser {
    fn read_next(
        &mut self,
        lines: &mut TextLines<'_>,
    ) -> SubtitleResult<Option<SubtitleElement>> {
        lines.skip_blank_lines();
        let Some(number) = lines.next_line() else {
            return Ok(None);
        };
        let number = number.trim();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(SubtitleError::at_line(
                lines.line_number(),
                format!("expected subtitle number: {:?}", number),
            ));
        }

        let timing = lines.next_line().ok_or_else(|| {
            SubtitleError::at_line(lines.line_number(), "unexpected end of file, expected timing")
        })?;
        let (start_ms, end_ms) = parse_timing(&timing).ok_or_else(|| {
            SubtitleError::at_line(lines.line_number(), format!("invalid timing: {:?}", timing))
        })?;

        let mut text = Vec::new();
        while let Some(line) = lines.next_line() {
            if line.trim().is_empty() {
                break;
            }
            text.push(line);
        }

        Ok(Some(SubtitleElement::new(start_ms, end_ms, text.join("\n"))))
    }
}

fn parse_timing(line: &str) -> Option<(u64, u64)> {
    let (start, end) = line.split_once("-->")?;
    // end time may be followed by position coordinates (X1:... Y2:...)
    let end = end.split_whitespace().next()?;
    Some((parse_time(start.trim())?, parse_time(end)?))
}

fn parse_time(value: &str) -> Option<u64> {
    let caps = SRT_TIME.captures(value)?;
    clock_to_millis(&caps[1], &caps[2], &caps[3], &caps[4])
}
