//! Partitions parsed entries into the four reminder views.

use crate::entry::Entry;
use chrono::{Datelike, Duration, NaiveDate};

/// How many days ahead a birthday is surfaced as upcoming, unless
/// configured otherwise.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 3;

/// Four disjoint, order-preserving views over a set of entries, computed
/// relative to a reference date.
///
/// An entry lands in at most one view. Exact birthdays whose next
/// occurrence lies outside the window, and partial dates with a known day
/// but unknown month (or nothing known at all), land in none.
#[derive(Debug, Default, PartialEq)]
pub struct Views {
    /// Birthdays whose next occurrence is on the reference date itself.
    pub today: Vec<Entry>,
    /// Birthdays inside the window but not today.
    pub upcoming: Vec<Entry>,
    /// Day unknown, but the known month matches the reference month.
    pub uncertain: Vec<Entry>,
    /// Lines that failed to parse.
    pub erroneous: Vec<Entry>,
}

impl Views {
    /// Classifies `entries` relative to `now` in a single pass.
    ///
    /// Rules, first match per entry:
    /// 1. erroneous entries go to `erroneous`;
    /// 2. exact dates go to `today` or `upcoming` when the next occurrence
    ///    falls strictly before `now + window`, and are dropped otherwise;
    /// 3. month-only dates go to `uncertain` when the month is current;
    /// 4. anything else is dropped.
    ///
    /// Input order is preserved within each view.
    pub fn classify(now: NaiveDate, window: Duration, entries: Vec<Entry>) -> Self {
        let deadline = now + window;
        let mut views = Views::default();
        for entry in entries {
            if entry.is_error {
                views.erroneous.push(entry);
                continue;
            }
            if entry.date.is_exact() {
                let Some(next) = entry.date.next_occurrence(now) else {
                    continue;
                };
                if deadline > next {
                    if next.month() == now.month() && next.day() == now.day() {
                        views.today.push(entry);
                    } else {
                        views.upcoming.push(entry);
                    }
                }
                continue;
            }
            if entry.date.has_month && entry.date.resolved.month() == now.month() {
                views.uncertain.push(entry);
            }
            // Day-only dates and fully unknown dates match no view.
        }
        views
    }
}
