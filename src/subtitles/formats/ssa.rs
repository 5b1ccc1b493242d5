use crate::errors::{SubtitleError, SubtitleResult};
use crate::streams::TextLines;
use crate::subtitles::reader::ElementParser;
use crate::subtitles::types::SubtitleElement;
use crate::subtitles::utils::clock_to_millis;
use once_cell::sync::Lazy;
use regex::Regex;

static SSA_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d{2}):(\d{2})\.(\d{1,3})$").unwrap());
static OVERRIDE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Column positions taken from the `Format:` line of the `[Events]` section
#[derive(Debug)]
struct EventColumns {
    count: usize,
    start: usize,
    end: usize,
    text: usize,
}

/// SubStation Alpha (.ssa/.ass): `Dialogue:` lines of the `[Events]` section
#[derive(Debug, Default)]
pub(crate) struct SubStationAlphaParser {
    columns: Option<EventColumns>,
    finished: bool,
}

impl ElementParser for SubStationAlphaParser {
    fn read_next(
        &mut self,
        lines: &mut TextLines<'_>,
    ) -> SubtitleResult<Option<SubtitleElement>> {
        if self.finished {
            return Ok(None);
        }
        let columns = match self.columns.take() {
            Some(columns) => columns,
            None => read_event_format(lines)?,
        };
        let columns = &*self.columns.insert(columns);

        while let Some(line) = lines.next_line() {
            let line = line.trim();
            if line.starts_with('[') {
                // events section ended ([Fonts], [Graphics], ...)
                self.finished = true;
                return Ok(None);
            }
            let Some(value) = strip_key(line, "Dialogue") else {
                continue;
            };

            let fields: Vec<&str> = value.splitn(columns.count, ',').collect();
            if fields.len() < columns.count {
                return Err(SubtitleError::at_line(
                    lines.line_number(),
                    format!("expected {} fields in dialogue line", columns.count),
                ));
            }
            let start_ms = parse_time(fields[columns.start], lines.line_number())?;
            let end_ms = parse_time(fields[columns.end], lines.line_number())?;
            let text = clean_text(fields[columns.text]);
            return Ok(Some(SubtitleElement::new(start_ms, end_ms, text)));
        }

        self.finished = true;
        Ok(None)
    }
}

/// Advance to `[Events]` and parse its `Format:` line.
fn read_event_format(lines: &mut TextLines<'_>) -> SubtitleResult<EventColumns> {
    loop {
        let line = lines.next_line().ok_or_else(|| {
            SubtitleError::at_line(lines.line_number(), "missing [Events] section")
        })?;
        if line.trim().eq_ignore_ascii_case("[events]") {
            break;
        }
    }

    lines.skip_blank_lines();
    if lines.is_exhausted() {
        return Err(SubtitleError::at_line(
            lines.line_number(),
            "unexpected end of file after [Events]",
        ));
    }
    let line = lines.next_line().unwrap_or_default();
    let format = strip_key(line.trim(), "Format").ok_or_else(|| {
        SubtitleError::at_line(lines.line_number(), "expected Format: line after [Events]")
    })?;

    let names: Vec<String> = format
        .split(',')
        .map(|name| name.trim().to_ascii_lowercase())
        .collect();
    let position = |key: &str| {
        names.iter().position(|name| name == key).ok_or_else(|| {
            SubtitleError::at_line(
                lines.line_number(),
                format!("Format: line has no {} column", key),
            )
        })
    };
    let columns = EventColumns {
        count: names.len(),
        start: position("start")?,
        end: position("end")?,
        text: position("text")?,
    };
    if columns.text != columns.count - 1 {
        return Err(SubtitleError::at_line(
            lines.line_number(),
            "Text must be the last column",
        ));
    }
    Ok(columns)
}

/// Value after `key:` if the line starts with it (case-insensitive).
fn strip_key<'l>(line: &'l str, key: &str) -> Option<&'l str> {
    let (name, value) = line.split_once(':')?;
    name.trim().eq_ignore_ascii_case(key).then(|| value.trim_start())
}

fn parse_time(value: &str, line: usize) -> SubtitleResult<u64> {
    let value = value.trim();
    SSA_TIME
        .captures(value)
        .and_then(|caps| clock_to_millis(&caps[1], &caps[2], &caps[3], &caps[4]))
        .ok_or_else(|| SubtitleError::at_line(line, format!("invalid time: {:?}", value)))
}

fn clean_text(raw: &str) -> String {
    OVERRIDE_BLOCK
        .replace_all(raw, "")
        .replace("\\N", "\n")
        .replace("\\n", "\n")
        .replace("\\h", " ")
}
