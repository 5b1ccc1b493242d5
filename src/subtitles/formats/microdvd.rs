use crate::errors::{SubtitleError, SubtitleResult};
use crate::streams::TextLines;
use crate::subtitles::reader::ElementParser;
use crate::subtitles::types::SubtitleElement;
use crate::subtitles::utils::frames_to_millis;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static MICRODVD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(\d+)\}\{(\d+)\}(.*)$").unwrap());
static STYLE_CODES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\{[^}]*\})+").unwrap());

/// MicroDVD (.sub): `{start}{end}text` lines with frame-based timing
#[derive(Debug)]
pub(crate) struct MicroDvdParser {
    fps: f64,
    first_line: bool,
}

impl MicroDvdParser {
    pub fn new(fps: f64) -> Self {
        Self {
            fps,
            first_line: true,
        }
    }
}

impl ElementParser for MicroDvdParser {
    fn read_next(
        &mut self,
        lines: &mut TextLines<'_>,
    ) -> SubtitleResult<Option<SubtitleElement>> {
        loop {
            lines.skip_blank_lines();
            let Some(line) = lines.next_line() else {
                return Ok(None);
            };
            let caps = MICRODVD_LINE.captures(line.trim()).ok_or_else(|| {
                SubtitleError::at_line(
                    lines.line_number(),
                    format!("expected {{start}}{{end}}text: {:?}", line),
                )
            })?;
            let start = parse_frame(&caps[1], lines.line_number())?;
            let end = parse_frame(&caps[2], lines.line_number())?;
            let body = &caps[3];

            // {1}{1}25.000 declares the frame rate instead of a subtitle
            if std::mem::take(&mut self.first_line) && start == end && start <= 1 {
                let declared = body.trim().parse::<f64>().ok();
                if let Some(fps) = declared.filter(|f| f.is_finite() && *f > 0.0) {
                    debug!("MicroDVD frame rate declared in file: {}", fps);
                    self.fps = fps;
                    continue;
                }
            }

            let text = STYLE_CODES.replace(body, "").replace('|', "\n");
            return Ok(Some(SubtitleElement::new(
                frames_to_millis(start, self.fps),
                frames_to_millis(end, self.fps),
                text,
            )));
        }
    }
}

fn parse_frame(value: &str, line: usize) -> SubtitleResult<u64> {
    value
        .parse()
        .map_err(|_| {
            SubtitleError::at_line(line, format!("frame number out of range: {}", value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(data: &[u8], fps: f64) -> SubtitleResult<Vec<SubtitleElement>> {
        let mut lines = TextLines::new(data);
        let mut parser = MicroDvdParser::new(fps);
        let mut out = Vec::new();
        while let Some(element) = parser.read_next(&mut lines)? {
            out.push(element);
        }
        Ok(out)
    }

    #[test]
    fn test_frames_use_default_rate() {
        let entries = read_all(b"{25}{50}Hello|World\n", 25.0).unwrap();
        assert_eq!(entries, vec![SubtitleElement::new(1_000, 2_000, "Hello\nWorld")]);
    }

    #[test]
    fn test_declared_frame_rate_is_applied_and_skipped() {
        let entries = read_all(b"{1}{1}50\n{50}{100}{y:i}Styled\n", 25.0).unwrap();
        assert_eq!(entries, vec![SubtitleElement::new(1_000, 2_000, "Styled")]);
    }

    #[test]
    fn test_first_line_with_text_is_not_a_frame_rate() {
        let entries = read_all(b"{1}{1}Hi\n", 25.0).unwrap();
        assert_eq!(entries, vec![SubtitleElement::new(40, 40, "Hi")]);
    }

    #[test]
    fn test_rejects_other_formats() {
        let err = read_all(b"1\n00:00:01,000 --> 00:00:02,000\nHello\n", 25.0).unwrap_err();
        assert_eq!(err.line, Some(1));
        assert!(read_all(b"[Script Info]\n", 25.0).is_err());
    }

    #[test]
    fn test_rejects_malformed_line_after_valid_one() {
        let mut lines = TextLines::new(b"{0}{25}ok\nbroken\n");
        let mut parser = MicroDvdParser::new(25.0);
        assert!(parser.read_next(&mut lines).unwrap().is_some());
        let err = parser.read_next(&mut lines).unwrap_err();
        assert_eq!(err.line, Some(2));
    }
}
