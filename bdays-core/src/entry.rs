use chrono::{Datelike, Local, NaiveDate};

/// A calendar date where any of day, month and year may be unknown.
///
/// Absent components resolve to safe defaults (day 1, January, year 1) so a
/// concrete `NaiveDate` always exists; only the presence flags say whether a
/// component was actually given.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialDate {
    /// Original date token, kept verbatim for display.
    pub raw: String,
    /// Calendar value with defaults filled in for absent components.
    pub resolved: NaiveDate,
    pub has_day: bool,
    pub has_month: bool,
    pub has_year: bool,
}

impl PartialDate {
    /// A fully unknown date, used as the placeholder on erroneous entries.
    pub fn unknown() -> Self {
        Self {
            raw: String::new(),
            resolved: NaiveDate::from_ymd_opt(1, 1, 1).expect("valid date"),
            has_day: false,
            has_month: false,
            has_year: false,
        }
    }

    /// True when both day and month are known.
    pub fn is_exact(&self) -> bool {
        self.has_day && self.has_month
    }

    /// Computes the next occurrence of this birthday on or after `date`.
    ///
    /// Compares `(month, day)` in calendar order: a month/day that has
    /// already passed in `date`'s year rolls into the following year.
    /// Returns `None` when the month/day does not exist in the computed year
    /// (Feb 29 outside a leap year).
    ///
    /// Only meaningful when [`is_exact`](Self::is_exact) holds; with an
    /// absent day the default day 1 would stand in for real input, so
    /// callers must check the flags first.
    pub fn next_occurrence(&self, date: NaiveDate) -> Option<NaiveDate> {
        let (month, day) = (self.resolved.month(), self.resolved.day());
        let year = if (month, day) < (date.month(), date.day()) {
            date.year() + 1
        } else {
            date.year()
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// One birthday record, parsed from a single line of the entries file.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The full original line, shown verbatim when parsing failed.
    pub raw: String,
    /// Free-text label: everything after the first space, untouched.
    pub name: String,
    pub date: PartialDate,
    /// When set, `date` carries no information and display falls back to `raw`.
    pub is_error: bool,
}

impl Entry {
    /// An entry whose line could not be parsed. Keeps the raw line only.
    pub fn erroneous(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            name: String::new(),
            date: PartialDate::unknown(),
            is_error: true,
        }
    }

    /// Standard display line for one entry.
    ///
    /// Erroneous entries show the raw line verbatim. Parsed entries show
    /// `name - token(age)`, with `?` standing in for the age when the birth
    /// year is unknown. The age is relative to the real current year, not to
    /// whatever reference date a classification ran against.
    pub fn display_line(&self) -> String {
        if self.is_error {
            return self.raw.clone();
        }
        let age = if self.date.has_year {
            (Local::now().year() - self.date.resolved.year()).to_string()
        } else {
            "?".to_string()
        };
        format!("{} - {}({})", self.name, self.date.raw, age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(day: u32, month: u32, year: i32) -> PartialDate {
        PartialDate {
            raw: format!("{day:02}.{month:02}.{year}"),
            resolved: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            has_day: true,
            has_month: true,
            has_year: true,
        }
    }

    #[test]
    fn occurrence_on_the_reference_day_stays_in_the_same_year() {
        let now = NaiveDate::from_ymd_opt(2019, 2, 2).unwrap();
        let bd = exact(2, 2, 2019);
        assert_eq!(bd.next_occurrence(now), Some(now));
    }

    #[test]
    fn occurrence_later_this_year() {
        let now = NaiveDate::from_ymd_opt(2019, 2, 2).unwrap();
        let bd = exact(3, 2, 2019);
        assert_eq!(
            bd.next_occurrence(now),
            NaiveDate::from_ymd_opt(2019, 2, 3)
        );
    }

    #[test]
    fn occurrence_already_passed_rolls_into_next_year() {
        let now = NaiveDate::from_ymd_opt(2019, 2, 2).unwrap();
        let bd = exact(5, 1, 2019);
        assert_eq!(
            bd.next_occurrence(now),
            NaiveDate::from_ymd_opt(2020, 1, 5)
        );
    }

    #[test]
    fn occurrence_year_is_monotonic_in_the_reference_date() {
        let bd = exact(15, 6, 1990);
        let occurrences: Vec<_> = [(2020, 1, 1), (2020, 6, 14), (2020, 6, 15), (2020, 6, 16)]
            .into_iter()
            .map(|(y, m, d)| {
                bd.next_occurrence(NaiveDate::from_ymd_opt(y, m, d).unwrap())
                    .unwrap()
                    .year()
            })
            .collect();
        assert_eq!(occurrences, vec![2020, 2020, 2020, 2021]);
    }

    #[test]
    fn occurrence_is_idempotent() {
        let now = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let bd = exact(1, 1, 2012);
        assert_eq!(bd.next_occurrence(now), bd.next_occurrence(now));
    }

    #[test]
    fn leap_day_has_no_occurrence_in_common_years() {
        let bd = exact(29, 2, 2000);
        let common = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        assert_eq!(bd.next_occurrence(common), None);
        let leap = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            bd.next_occurrence(leap),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn exactness_needs_day_and_month() {
        let mut date = PartialDate::unknown();
        assert!(!date.is_exact());
        date.has_month = true;
        assert!(!date.is_exact());
        date.has_day = true;
        assert!(date.is_exact());
    }

    #[test]
    fn erroneous_entry_displays_its_raw_line() {
        let entry = Entry::erroneous("incorrect");
        assert_eq!(entry.display_line(), "incorrect");
    }

    #[test]
    fn display_line_without_year_shows_a_question_mark() {
        let entry = Entry {
            raw: "??.02.???? mystery".to_string(),
            name: "mystery".to_string(),
            date: PartialDate {
                raw: "??.02.????".to_string(),
                resolved: NaiveDate::from_ymd_opt(1, 2, 1).unwrap(),
                has_day: false,
                has_month: true,
                has_year: false,
            },
            is_error: false,
        };
        assert_eq!(entry.display_line(), "mystery - ??.02.????(?)");
    }
}
