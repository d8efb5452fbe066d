//! Display Helpers
//!
//! Text formatting shared by list rows and the patch page.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Units for `time_since`, largest first
const TIME_UNITS: &[(i64, &str)] = &[
    (31_536_000, "yr"),
    (2_592_000, "mth"),
    (604_800, "wk"),
    (86_400, "d"),
    (3_600, "hr"),
    (60, "min"),
];

/// Compact age of `then` relative to `now`, e.g. "3d" or "45s".
///
/// A unit is only used once more than one whole unit has passed, so 60-119
/// seconds still read as seconds.
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    for (unit, suffix) in TIME_UNITS {
        let whole = seconds / unit;
        if whole > 1 {
            return format!("{}{}", whole, suffix);
        }
    }
    format!("{}s", seconds)
}

/// Tags for display, or "No tags"
pub fn tags_label(tags: &[String]) -> String {
    if tags.is_empty() {
        "No tags".to_string()
    } else {
        tags.join(", ")
    }
}

pub fn upload_date_label(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Escape a user-chosen name for use as one path segment
pub fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// `src` for an inline base64 JPEG
pub fn jpeg_data_url(base64: &str) -> String {
    format!("data:image/jpeg;base64,{}", base64)
}
