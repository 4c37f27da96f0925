//! Human-readable formatting used by wallet frontends: peer table columns,
//! transaction timestamps, and tooltip text.
//!
//! Everything here is a pure function of its inputs, so frontends can call
//! these from any thread.

use std::{borrow::Cow, time::Duration};

use chrono::{DateTime, TimeZone};

/// Service bits a peer can advertise in its `version` message, paired with
/// the name we display for each.
pub const KNOWN_SERVICES: &[(u64, &str)] = &[(1 << 0, "NETWORK")];

/// Format a duration as e.g. `"2 d 3 h 15 s"`.
///
/// Zero-valued components are skipped, except that `"0 s"` is printed when the
/// whole duration rounds down to zero seconds.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let mins = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::with_capacity(4);
    if days != 0 {
        parts.push(format!("{days} d"));
    }
    if hours != 0 {
        parts.push(format!("{hours} h"));
    }
    if mins != 0 {
        parts.push(format!("{mins} m"));
    }
    if seconds != 0 || parts.is_empty() {
        parts.push(format!("{seconds} s"));
    }
    parts.join(" ")
}

/// Format a peer's ping time in whole milliseconds, e.g. `"153 ms"`. A zero
/// ping means we haven't measured one yet and displays as `"N/A"`.
pub fn format_ping_time(ping: Duration) -> Cow<'static, str> {
    if ping.is_zero() {
        Cow::Borrowed("N/A")
    } else {
        Cow::Owned(format!("{} ms", ping.as_millis()))
    }
}

/// Format a peer's clock offset from ours, in seconds, e.g. `"-3 s"`.
pub fn format_time_offset(offset_secs: i64) -> String {
    format!("{offset_secs} s")
}

/// Format a peer's advertised service bitmask as a comma-separated list of
/// the service names we know about, or `"None"`. Unknown bits are ignored.
pub fn format_services(mask: u64) -> String {
    let names = KNOWN_SERVICES
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>();

    if names.is_empty() {
        "None".to_owned()
    } else {
        names.join(", ")
    }
}

/// Format a timestamp as `"YYYY-MM-DD hh:mm"` in the timestamp's own zone.
pub fn date_time_str<Tz>(date_time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date_time.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a unix timestamp (in seconds) as `"YYYY-MM-DD hh:mm"` UTC. Returns
/// [`None`] if the timestamp is out of range.
pub fn unix_date_time_str(unix_secs: i64) -> Option<String> {
    DateTime::from_timestamp(unix_secs, 0).map(|dt| date_time_str(&dt))
}

/// Escape text for inclusion in HTML (`&`, `<`, `>`, `"`). If `multi_line`
/// is set, newlines also become `<br>` line breaks.
pub fn html_escape(s: &str, multi_line: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' if multi_line => out.push_str("<br>\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Long plain-text tooltips don't wrap, so convert them to rich text, which
/// does. Returns [`None`] if the tooltip should be left as-is: it's at most
/// `size_threshold` chars long, or it's already rich text.
pub fn tooltip_to_rich_text(
    tooltip: &str,
    size_threshold: usize,
) -> Option<String> {
    if tooltip.chars().count() <= size_threshold
        || tooltip.starts_with("<qt>")
        || might_be_rich_text(tooltip)
    {
        return None;
    }

    Some(format!("<qt>{}<qt/>", html_escape(tooltip, true)))
}

/// A cheap heuristic: rich text starts (after whitespace) with an opening tag
/// like `<b>` or `<p align=...>`.
fn might_be_rich_text(s: &str) -> bool {
    let Some(rest) = s.trim_start().strip_prefix('<') else {
        return false;
    };
    let tag_len = rest
        .find(|c: char| c == '>' || c.is_ascii_whitespace())
        .unwrap_or(0);
    tag_len > 0
        && rest[..tag_len]
            .trim_end_matches('/')
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
        && rest[tag_len..].contains('>')
}

#[cfg(test)]
mod test {
    use chrono::{FixedOffset, Utc};
    use proptest::{arbitrary::any, prop_assert, prop_assert_eq, proptest};

    use super::*;

    #[test]
    fn format_duration_manual() {
        let fmt = |secs| format_duration(Duration::from_secs(secs));
        assert_eq!(fmt(0), "0 s");
        assert_eq!(fmt(59), "59 s");
        assert_eq!(fmt(60), "1 m");
        assert_eq!(fmt(3600), "1 h");
        assert_eq!(fmt(3661), "1 h 1 m 1 s");
        assert_eq!(fmt(86_400), "1 d");
        assert_eq!(fmt(2 * 86_400 + 3 * 3600 + 15), "2 d 3 h 15 s");
        // sub-second precision is dropped
        assert_eq!(format_duration(Duration::from_millis(999)), "0 s");
    }

    #[test]
    fn format_duration_never_empty() {
        proptest!(|(secs in any::<u64>())| {
            let s = format_duration(Duration::from_secs(secs));
            prop_assert!(!s.is_empty());

            // Only the "0 s" special case may print a zero component
            let tokens = s.split(' ').collect::<Vec<_>>();
            prop_assert_eq!(tokens.len() % 2, 0);
            for pair in tokens.chunks(2) {
                prop_assert!(pair[0] != "0" || s == "0 s");
            }
        })
    }

    #[test]
    fn format_ping_time_manual() {
        assert_eq!(format_ping_time(Duration::ZERO), "N/A");
        assert_eq!(format_ping_time(Duration::from_micros(1_500)), "1 ms");
        assert_eq!(format_ping_time(Duration::from_millis(153)), "153 ms");
        assert_eq!(format_ping_time(Duration::from_secs(2)), "2000 ms");
        // Measured, but rounds down to zero ms
        assert_eq!(format_ping_time(Duration::from_micros(10)), "0 ms");
    }

    #[test]
    fn format_time_offset_and_services() {
        assert_eq!(format_time_offset(0), "0 s");
        assert_eq!(format_time_offset(-3), "-3 s");
        assert_eq!(format_services(0), "None");
        assert_eq!(format_services(1), "NETWORK");
        assert_eq!(format_services(0b1001), "NETWORK");
        assert_eq!(format_services(0b1000), "None");
    }

    #[test]
    fn date_time_str_manual() {
        let dt = Utc.with_ymd_and_hms(2019, 3, 7, 14, 5, 59).unwrap();
        assert_eq!(date_time_str(&dt), "2019-03-07 14:05");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            date_time_str(&dt.with_timezone(&plus_two)),
            "2019-03-07 16:05"
        );

        assert_eq!(unix_date_time_str(0).as_deref(), Some("1970-01-01 00:00"));
        assert_eq!(unix_date_time_str(i64::MAX), None);
    }

    #[test]
    fn html_escape_manual() {
        assert_eq!(
            html_escape("a < b && c > \"d\"", false),
            "a &lt; b &amp;&amp; c &gt; &quot;d&quot;"
        );
        assert_eq!(html_escape("one\ntwo", false), "one\ntwo");
        assert_eq!(html_escape("one\ntwo", true), "one<br>\ntwo");
        assert_eq!(html_escape("", true), "");
    }

    #[test]
    fn html_escape_output_has_no_raw_brackets() {
        proptest!(|(s in any::<String>())| {
            let escaped = html_escape(&s, false);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            // No newlines are introduced or removed in single-line mode
            prop_assert_eq!(
                s.matches('\n').count(),
                escaped.matches('\n').count()
            );
        })
    }

    #[test]
    fn tooltip_to_rich_text_manual() {
        // short tooltips are left alone
        assert_eq!(tooltip_to_rich_text("short", 10), None);
        assert_eq!(tooltip_to_rich_text("exactly 10", 10), None);

        assert_eq!(
            tooltip_to_rich_text("a long tooltip\nwith <angle> brackets", 10)
                .as_deref(),
            Some("<qt>a long tooltip<br>\nwith &lt;angle&gt; brackets<qt/>"),
        );

        // already rich text
        assert_eq!(tooltip_to_rich_text("<qt>already converted</qt>", 5), None);
        assert_eq!(tooltip_to_rich_text("<b>bold</b> tooltip text", 5), None);
        assert_eq!(
            tooltip_to_rich_text("<p align=center>centered</p>", 5),
            None
        );

        // a leading '<' alone doesn't make it rich text
        assert!(
            tooltip_to_rich_text("<- click here to send coins", 5).is_some()
        );
        assert!(tooltip_to_rich_text("< 5 confirmations", 5).is_some());
    }
}
