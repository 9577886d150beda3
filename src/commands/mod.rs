pub mod copy;
pub mod group;
pub mod new;
pub mod rm;
pub mod show;

use anyhow::{bail, Context, Result};
use timetable_core::COLOR_PALETTE;

/// Resolve a user-supplied color: a palette index ("0".."7") or a
/// "#RRGGBB" value. `None` falls back to the first palette color.
pub(crate) fn resolve_color(input: Option<&str>) -> Result<String> {
    let Some(input) = input else {
        return Ok(COLOR_PALETTE[0].to_string());
    };

    if let Ok(index) = input.parse::<usize>() {
        return COLOR_PALETTE
            .get(index)
            .map(|c| c.to_string())
            .with_context(|| {
                format!(
                    "Color index {index} out of range (0-{})",
                    COLOR_PALETTE.len() - 1
                )
            });
    }

    if input.len() == 7
        && input.starts_with('#')
        && input[1..].chars().all(|c| c.is_ascii_hexdigit())
    {
        return Ok(input.to_uppercase());
    }

    bail!("Invalid color '{input}' (use a palette index 0-7 or #RRGGBB)")
}

/// Parse an "HH:MM" argument into a minute-of-day.
pub(crate) fn parse_time_arg(input: &str) -> Result<u16> {
    timetable_core::time::parse_minute(input)
        .with_context(|| format!("Invalid time '{input}' (expected HH:MM)"))
}
