//! Aggregate numbers for one day's events.

use crate::event::Event;

/// Summary of a single day, for display alongside the day view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayStats {
    pub total_events: usize,
    /// Minutes covered by at least one event; overlap counts once.
    pub busy_minutes: u32,
    pub earliest_start: Option<u16>,
    pub latest_end: Option<u16>,
}

/// Compute stats over a day's events. The caller is expected to pass the
/// events of a single day; dates are not inspected here.
pub fn day_stats(events: &[Event]) -> DayStats {
    if events.is_empty() {
        return DayStats::default();
    }

    let mut ranges: Vec<(u16, u16)> = events
        .iter()
        .map(|e| (e.start_minute, e.end_minute))
        .collect();
    ranges.sort_unstable();

    let mut busy_minutes: u32 = 0;
    let (mut span_start, mut span_end) = ranges[0];
    for &(start, end) in &ranges[1..] {
        if start <= span_end {
            span_end = span_end.max(end);
        } else {
            busy_minutes += (span_end - span_start) as u32;
            span_start = start;
            span_end = end;
        }
    }
    busy_minutes += (span_end - span_start) as u32;

    DayStats {
        total_events: events.len(),
        busy_minutes,
        earliest_start: events.iter().map(|e| e.start_minute).min(),
        latest_end: events.iter().map(|e| e.end_minute).max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_event(start: u16, end: u16) -> Event {
        let date: NaiveDate = "2024-01-01".parse().unwrap();
        Event::new("e", date, start, end, "#EF4444").unwrap()
    }

    #[test]
    fn empty_day_is_all_zeroes() {
        assert_eq!(day_stats(&[]), DayStats::default());
    }

    #[test]
    fn disjoint_events_sum_their_durations() {
        let stats = day_stats(&[make_event(480, 540), make_event(600, 660)]);
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.busy_minutes, 120);
        assert_eq!(stats.earliest_start, Some(480));
        assert_eq!(stats.latest_end, Some(660));
    }

    #[test]
    fn overlap_counts_once() {
        let stats = day_stats(&[make_event(480, 540), make_event(510, 570)]);
        assert_eq!(stats.busy_minutes, 90);
    }

    #[test]
    fn contained_event_adds_nothing() {
        let stats = day_stats(&[make_event(480, 600), make_event(500, 520)]);
        assert_eq!(stats.busy_minutes, 120);
    }
}
