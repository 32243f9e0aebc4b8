//! ISO 8601 duration parsing
//!
//! The Data API reports video lengths as ISO 8601 durations (`PT1H2M3S`,
//! `PT45S`, ...). Malformed or partial input degrades to zero seconds so a
//! single bad duration cannot fail a whole report.

/// Parsed duration split into its clock components
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl VideoDuration {
    /// Total length in seconds
    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Parse an ISO 8601 duration of the form `PT#H#M#S`
///
/// Any component may be absent. Date components (days, weeks) and garbage
/// input yield the zero duration.
pub fn parse_duration(input: &str) -> VideoDuration {
    let body = match input.strip_prefix("PT") {
        Some(rest) => rest,
        None => return VideoDuration::default(),
    };

    let mut duration = VideoDuration::default();
    let mut digits = String::new();

    for ch in body.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let value: u64 = match digits.parse() {
            Ok(v) => v,
            Err(_) => return VideoDuration::default(),
        };
        match ch {
            'H' => duration.hours = value,
            'M' => duration.minutes = value,
            'S' => duration.seconds = value,
            _ => return VideoDuration::default(),
        }
        digits.clear();
    }

    // Trailing digits without a unit designator
    if !digits.is_empty() {
        return VideoDuration::default();
    }

    duration
}

/// Parse an ISO 8601 duration directly to total seconds
pub fn parse_duration_seconds(input: &str) -> u64 {
    parse_duration(input).total_seconds()
}
