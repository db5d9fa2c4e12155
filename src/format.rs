//! Formatting Helpers
//!
//! Stateless conversions used by the dashboard: wall-clock strings for
//! "last updated" labels and thousands-grouped counters.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveTime, TimeZone};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Largest integer a browser number represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// A time string that does not match `HH:MM:SS`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid format. Expected HH:mm:ss, got: {input}")]
pub struct FormatError {
    pub input: String,
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also admit other Unicode digits.
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("time pattern is valid")
    })
}

/// Format an instant as zero-padded `HH:MM:SS` in local time.
///
/// The instant's own zone is ignored; a UTC timestamp renders as the wall
/// clock the user sees.
pub fn to_time_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// `HH:MM:SS` for the current local time
pub fn current_time_string() -> String {
    to_time_string(&Local::now())
}

/// Parse a strict `HH:MM:SS` string and place it on today's local date.
///
/// Only the shape is checked. Two-digit fields beyond their natural range
/// roll over, so `"25:00:00"` lands at 01:00 tomorrow and `"00:61:00"` at
/// 01:01 today.
pub fn time_string_to_timestamp(time_string: &str) -> Result<DateTime<Local>, FormatError> {
    let captures = time_pattern()
        .captures(time_string)
        .ok_or_else(|| FormatError {
            input: time_string.to_string(),
        })?;

    // The pattern guarantees two ASCII digits per group.
    let field = |i: usize| -> i64 {
        captures[i]
            .bytes()
            .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'))
    };
    let (hours, minutes, seconds) = (field(1), field(2), field(3));

    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    let naive = midnight
        + Duration::hours(hours)
        + Duration::minutes(minutes)
        + Duration::seconds(seconds);

    Ok(match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Skipped by a DST jump: move forward past the gap like a browser does.
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    })
}

/// Render an integer with comma thousands separators.
///
/// Values above [`MAX_SAFE_INTEGER`] render as `">9007199254740991"` since
/// the browser could not have carried them exactly.
pub fn prettify_number(number: i64) -> String {
    if number > MAX_SAFE_INTEGER {
        return format!(">{}", MAX_SAFE_INTEGER);
    }

    let digits = number.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if number < 0 {
        out.push('-');
    }

    let lead = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    out.push_str(&digits[..lead]);
    for chunk in digits.as_bytes()[lead..].chunks(3) {
        out.push(',');
        out.extend(chunk.iter().map(|&b| b as char));
    }

    out
}
