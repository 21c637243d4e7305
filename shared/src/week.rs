//! Week window filtering.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Event;

/// Sunday of the week containing `today` (Monday-first weeks).
///
/// A Sunday maps to itself.
pub fn upcoming_sunday(today: NaiveDate) -> NaiveDate {
    let offset = (6 - today.weekday().num_days_from_monday() as i64).rem_euclid(7);
    today + Duration::days(offset)
}

/// Inclusive date range from today through the upcoming Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: upcoming_sunday(today),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// First event inside the window.
///
/// `events` must be sorted ascending by date, so the first hit is also the
/// earliest.
pub fn first_in_window<'a>(window: &WeekWindow, events: &'a [Event]) -> Option<&'a Event> {
    events.iter().find(|event| window.contains(event.date))
}
