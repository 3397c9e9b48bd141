use std::sync::OnceLock;

use regex::Regex;

/// List item markers: `- `/`* ` bullets and `N. ` numbered items.
pub struct ListMarker;

impl ListMarker {
    /// Detects a bullet marker, returning the untrimmed remainder.
    pub fn unordered(line: &str) -> Option<&str> {
        line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
    }

    /// Detects a numbered marker, returning the literal number and the
    /// untrimmed remainder. The number is reproduced verbatim downstream,
    /// duplicates and gaps included. A digit run too large for `u64` is not
    /// treated as a marker.
    pub fn ordered(line: &str) -> Option<(u64, &str)> {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        let re = NUMBERED
            .get_or_init(|| Regex::new(r"^(\d+)\. ").expect("invalid numbered marker regex"));

        let caps = re.captures(line)?;
        let index: u64 = caps[1].parse().ok()?;
        Some((index, &line[caps[0].len()..]))
    }
}
