//! Relative paths for the REST v1 endpoints this crate covers.
//!
//! Every builder returns a path relative to `endpoint::API_ROOT`, without a
//! leading slash. User-supplied titles are percent-encoded as one segment.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::types::EventType;

pub const PAGE: &str = "page";
pub const SUMMARY: &str = "summary";
pub const RANDOM: &str = "random";
pub const TITLE: &str = "title";
pub const FEED: &str = "feed";
pub const ON_THIS_DAY: &str = "onthisday";

/// Characters escaped inside a single path segment. `\` is included because
/// URL parsers treat it as `/` for http(s).
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `raw` so it occupies exactly one path segment.
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

/// `page/summary/{title}`
pub fn page_summary(title: &str) -> String {
    format!("{PAGE}/{SUMMARY}/{}", encode_segment(title))
}

/// `page/title/{title}`
pub fn page_title(title: &str) -> String {
    format!("{PAGE}/{TITLE}/{}", encode_segment(title))
}

/// `page/random/summary`
pub fn page_summary_random() -> String {
    format!("{PAGE}/{RANDOM}/{SUMMARY}")
}

/// `page/random/title`
pub fn page_title_random() -> String {
    format!("{PAGE}/{RANDOM}/{TITLE}")
}

/// `feed/onthisday/{type}/{mm}/{dd}`
///
/// Month and day are zero-padded but not range checked; the service rejects
/// impossible dates itself.
pub fn feed_on_this_day(month: u32, day: u32, event_type: EventType) -> String {
    format!("{FEED}/{ON_THIS_DAY}/{event_type}/{month:02}/{day:02}")
}
