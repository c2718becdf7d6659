//! Publisher time labels: `H:MM:SS`, `MM:SS`, or bare seconds.
//!
//! Parsing is deliberately lenient. Publisher break lists arrive with labels
//! in whatever shape the ad server produced; a malformed part reads as 0
//! rather than rejecting the whole break.

/// Parse a time label into seconds.
///
/// Splits on `:`; three or more parts read as `H:M:S`, two as `M:S`, one as
/// bare seconds. Parts may be fractional. Empty labels and unparsable parts
/// read as 0.
#[must_use]
pub fn parse_time_label(label: &str) -> f64 {
    fn part(s: &str) -> f64 {
        s.trim().parse::<f64>().unwrap_or(0.0)
    }

    if label.is_empty() {
        return 0.0;
    }
    let parts: Vec<&str> = label.split(':').collect();
    match parts.as_slice() {
        [h, m, s, ..] => part(h) * 3600.0 + part(m) * 60.0 + part(s),
        [m, s] => part(m) * 60.0 + part(s),
        [s] => part(s),
        [] => 0.0,
    }
}

/// Format seconds for display: `H:MM:SS` at one hour and beyond, `MM:SS`
/// below. Negative input formats as the `"-1"` sentinel.
#[must_use]
pub fn time_label(seconds: f64) -> String {
    if seconds < 0.0 {
        return "-1".to_owned();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    let secs = total % 60;
    let minutes = (total / 60) % 60;
    let hours = total / 3600;

    if hours >= 1 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
