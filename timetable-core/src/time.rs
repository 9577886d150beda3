//! Minute-of-day formatting and parsing.

/// Format a minute-of-day as "HH:MM".
pub fn format_minute(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Parse "HH:MM" (or "H:MM") into a minute-of-day.
pub fn parse_minute(s: &str) -> Option<u16> {
    let (hours, minutes) = s.split_once(':')?;
    let hours: u16 = hours.trim().parse().ok()?;
    let minutes: u16 = minutes.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}
