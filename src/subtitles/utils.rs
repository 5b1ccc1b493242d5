/// Format milliseconds in SRT format
pub fn format_timestamp(ms: u64) -> String {
    let millis = ms % 1000;
    let total_seconds = ms / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Combine clock fields into milliseconds.
///
/// `fraction` holds the digits after the seconds separator; its length decides
/// the unit (1 = tenths, 2 = centiseconds, 3 = milliseconds). Returns `None`
/// when minutes or seconds are out of range, a field is not numeric or the
/// total does not fit in a `u64`.
pub(crate) fn clock_to_millis(
    hours: &str,
    minutes: &str,
    seconds: &str,
    fraction: &str,
) -> Option<u64> {
    let hours: u64 = hours.parse().ok()?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let fraction_ms = match fraction.len() {
        0 => 0,
        1..=3 => {
            let value: u64 = fraction.parse().ok()?;
            value * 10u64.pow(3 - fraction.len() as u32)
        }
        _ => return None,
    };

    hours
        .checked_mul(3_600_000)?
        .checked_add(minutes * 60_000 + seconds * 1_000 + fraction_ms)
}

/// Convert a frame number to milliseconds at `fps`, rounding to nearest.
pub(crate) fn frames_to_millis(frame: u64, fps: f64) -> u64 {
    ((frame as f64) * 1000.0 / fps).round() as u64
}
