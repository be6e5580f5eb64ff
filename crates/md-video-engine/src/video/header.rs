use std::sync::OnceLock;

use regex::Regex;

/// `[video]` or `[video: any title]`, case-insensitive.
///
/// The title is decorative; it only keeps the header from reading as a bare
/// reference link.
fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADER_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(?:\[video\]|\[video: .*\])$").expect("Invalid video header regex")
    })
}

/// Returns true if `line` opens a video block.
pub fn is_video_header(line: &str) -> bool {
    header_regex().is_match(line.trim_end())
}
