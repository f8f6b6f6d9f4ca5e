//! Maps a calendar date to its semester-relative week index and parity.
//!
//! Weeks follow the ISO 8601 convention: they start on Monday, and every
//! date within one Monday-aligned week shares an index. The semester start's
//! week is week 1, so within a single ISO week-year the index equals
//! `iso_week(date) - iso_week(semester_start) + 1`. Counting whole weeks
//! between the two weeks' Mondays keeps that equality while staying monotone
//! when a semester spans a December/January boundary, where raw ISO week
//! numbers wrap from 52/53 back to 1.

use jiff::civil::Date;

use crate::error::ScheduleError;

/// Classification of a localized week number as odd or even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeekOddity {
    Odd,
    Even,
}

impl WeekOddity {
    pub fn of_week(week: i32) -> Self {
        if week % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

/// Monday of the ISO week containing `date`.
fn week_monday(date: Date) -> Date {
    let offset = date.weekday().to_monday_zero_offset();
    date.checked_add(jiff::Span::new().days(-i64::from(offset)))
        .unwrap()
}

/// Week index of `date` counted from 1, relative to `semester_start`.
///
/// The week before the semester start's week resolves to 0 and is tolerated;
/// anything earlier is an [`ScheduleError::OutOfRangeDate`] precondition
/// violation.
pub fn localized_week_number(date: Date, semester_start: Date) -> Result<i32, ScheduleError> {
    let days = week_monday(semester_start)
        .until(week_monday(date))
        .unwrap()
        .get_days();
    let week = days.div_euclid(7) + 1;
    if week < 0 {
        return Err(ScheduleError::OutOfRangeDate {
            date,
            semester_start,
        });
    }
    Ok(week)
}

/// Parity of the localized week containing `date`. Week 1 is odd.
pub fn week_oddity(date: Date, semester_start: Date) -> Result<WeekOddity, ScheduleError> {
    localized_week_number(date, semester_start).map(WeekOddity::of_week)
}
