use std::fmt;

use jiff::civil::Date;

/// All errors produced by rozklad.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScheduleError {
    /// The date resolves to a negative week index relative to the semester
    /// start. A caller/config mistake, not a transient condition.
    OutOfRangeDate { date: Date, semester_start: Date },

    /// `from_week`/`to_week` violate the range invariant.
    InvalidWeekRange { from_week: u32, to_week: u32 },

    /// A slot number outside 1..
    InvalidSlot { slot: u32 },

    /// Catalog could not be parsed.
    Catalog { message: String },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRangeDate {
                date,
                semester_start,
            } => write!(
                f,
                "date {date} precedes the semester start {semester_start}"
            ),
            Self::InvalidWeekRange { from_week, to_week } => write!(
                f,
                "invalid week range: {from_week}..={to_week} (weeks start at 1, from_week <= to_week)"
            ),
            Self::InvalidSlot { slot } => {
                write!(f, "invalid slot number: {slot} (slots start at 1)")
            }
            Self::Catalog { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl ScheduleError {
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }
}
