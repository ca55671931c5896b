use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::Event;

/// A calendar bucket used to select events around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// The exact calendar date (year, month, day).
    Day,
    /// The ISO-8601 week (Monday to Sunday), keyed by ISO week-year and week number.
    Week,
    /// The calendar month of the calendar year.
    Month,
}

impl Period {
    /// Returns true if `date` falls in the same period as `reference`.
    pub fn contains(self, reference: NaiveDate, date: NaiveDate) -> bool {
        match self {
            Period::Day => date == reference,
            Period::Week => date.iso_week() == reference.iso_week(),
            Period::Month => date.year() == reference.year() && date.month() == reference.month(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters events that fall in `period` around `reference`.
///
/// Matches keep the order of the input slice; no sorting by date is done.
pub fn filter_events_by_period<'a>(
    events: &'a [Event],
    period: Period,
    reference: NaiveDate,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| period.contains(reference, event.local_date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NewEvent;
    use chrono::{Local, TimeZone};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: u64, year: i32, month: u32, day: u32) -> Event {
        let at = Local.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap();
        NewEvent::new(1, format!("event {id}"), at).into_event(id)
    }

    #[test]
    fn test_day_uses_full_date() {
        assert!(Period::Day.contains(date(2024, 1, 15), date(2024, 1, 15)));
        // Same day of month and year, different month.
        assert!(!Period::Day.contains(date(2024, 1, 15), date(2024, 2, 15)));
        assert!(!Period::Day.contains(date(2024, 1, 15), date(2023, 1, 15)));
    }

    #[test]
    fn test_week_runs_monday_to_sunday() {
        let reference = date(2024, 1, 17);
        assert!(Period::Week.contains(reference, date(2024, 1, 15)));
        assert!(Period::Week.contains(reference, date(2024, 1, 21)));
        assert!(!Period::Week.contains(reference, date(2024, 1, 22)));
        assert!(!Period::Week.contains(reference, date(2024, 1, 14)));
    }

    #[test]
    fn test_week_uses_iso_week_year() {
        // 2024-12-30 (Monday) is in ISO week 1 of 2025.
        assert!(Period::Week.contains(date(2025, 1, 2), date(2024, 12, 30)));
        // 2021-01-03 (Sunday) is in ISO week 53 of 2020.
        assert!(Period::Week.contains(date(2020, 12, 31), date(2021, 1, 3)));
        assert!(!Period::Week.contains(date(2021, 1, 4), date(2021, 1, 3)));
    }

    #[test]
    fn test_week_same_number_different_year() {
        assert!(!Period::Week.contains(date(2024, 1, 17), date(2023, 1, 18)));
    }

    #[test]
    fn test_month_requires_same_year() {
        assert!(Period::Month.contains(date(2024, 1, 1), date(2024, 1, 31)));
        assert!(!Period::Month.contains(date(2024, 1, 1), date(2024, 2, 1)));
        assert!(!Period::Month.contains(date(2024, 1, 1), date(2023, 1, 15)));
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let events = vec![
            event(1, 2024, 1, 16),
            event(2, 2024, 2, 1),
            event(3, 2024, 1, 15),
        ];

        let ids: Vec<u64> = filter_events_by_period(&events, Period::Month, date(2024, 1, 20))
            .iter()
            .map(|e| e.event_id)
            .collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::Day.to_string(), "day");
        assert_eq!(Period::Week.to_string(), "week");
        assert_eq!(Period::Month.to_string(), "month");
    }
}
