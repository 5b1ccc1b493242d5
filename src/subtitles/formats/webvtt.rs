use crate::errors::{SubtitleError, SubtitleResult};
use crate::streams::TextLines;
use crate::subtitles::reader::ElementParser;
use crate::subtitles::types::SubtitleElement;
use crate::subtitles::utils::clock_to_millis;
use once_cell::sync::Lazy;
use regex::Regex;

static VTT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d+):)?(\d{2}):(\d{2})\.(\d{3})$").unwrap());

/// WebVTT (.vtt): `WEBVTT` signature followed by cue blocks
#[derive(Debug, Default)]
pub(crate) struct WebVttParser {
    header_read: bool,
}

impl ElementParser for WebVttParser {
    fn read_next(
        &mut self,
        lines: &mut TextLines<'_>,
    ) -> SubtitleResult<Option<SubtitleElement>> {
        if !self.header_read {
            read_header(lines)?;
            self.header_read = true;
        }

        loop {
            lines.skip_blank_lines();
            let Some(line) = lines.next_line() else {
                return Ok(None);
            };

            if ["NOTE", "STYLE", "REGION"].iter().any(|kw| is_block_keyword(&line, kw)) {
                skip_block(lines);
                continue;
            }

            let timing = if line.contains("-->") {
                line
            } else {
                // cue identifier
                lines
                    .next_line()
                    .filter(|next| next.contains("-->"))
                    .ok_or_else(|| {
                        SubtitleError::at_line(
                            lines.line_number(),
                            "expected cue timing after identifier",
                        )
                    })?
            };
            let (start_ms, end_ms) = parse_timing(&timing).ok_or_else(|| {
                SubtitleError::at_line(
                    lines.line_number(),
                    format!("invalid cue timing: {:?}", timing),
                )
            })?;

            let mut text = Vec::new();
            while let Some(line) = lines.next_line() {
                if line.trim().is_empty() {
                    break;
                }
                text.push(line);
            }
            return Ok(Some(SubtitleElement::new(start_ms, end_ms, text.join("\n"))));
        }
    }
}

fn read_header(lines: &mut TextLines<'_>) -> SubtitleResult<()> {
    let signature = lines.next_line().unwrap_or_default();
    let valid = signature
        .strip_prefix("WEBVTT")
        .map(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .unwrap_or(false);
    if !valid {
        return Err(SubtitleError::at_line(1, "missing WEBVTT signature"));
    }
    // header metadata lines run until the first blank line
    skip_block(lines);
    Ok(())
}

fn is_block_keyword(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .map(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .unwrap_or(false)
}

fn skip_block(lines: &mut TextLines<'_>) {
    while let Some(line) = lines.next_line() {
        if line.trim().is_empty() {
            break;
        }
    }
}

fn parse_timing(line: &str) -> Option<(u64, u64)> {
    let (start, rest) = line.split_once("-->")?;
    // cue settings may follow the end time
    let end = rest.split_whitespace().next()?;
    Some((parse_time(start.trim())?, parse_time(end)?))
}

fn parse_time(value: &str) -> Option<u64> {
    let caps = VTT_TIME.captures(value)?;
    let hours = caps.get(1).map_or("0", |m| m.as_str());
    clock_to_millis(hours, &caps[2], &caps[3], &caps[4])
}
