//! Bitrate label derived from a source URL

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_QUALITY: &str = "Unknown";

/// Values at or below this are not labelled.
const MIN_LABELLED_BITRATE: i32 = 1000;

static BITRATE_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"br=([0-9]+)").expect("bitrate pattern is valid"));

/// Derive a display label from the first `br=<digits>` in `url`.
///
/// Bitrates above 1000 become `"<br / 1000> kbps"` (truncating). Anything
/// else, including a missing or overflowing value, is `"Unknown"`.
pub fn extract_quality(url: &str) -> String {
    let bitrate = BITRATE_PARAM
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i32>().ok());

    match bitrate {
        Some(br) if br > MIN_LABELLED_BITRATE => format!("{} kbps", br / 1000),
        _ => UNKNOWN_QUALITY.to_string(),
    }
}
