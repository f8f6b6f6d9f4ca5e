//! rozklad — semester week resolution and weekly class schedule filtering.
//!
//! Maps a calendar date to its semester-relative week, classifies the week as
//! odd or even, and selects which recurring schedule entries run that week.
//!
//! # Examples
//!
//! ```
//! use jiff::civil::Date;
//! use rozklad::{Catalog, EntryKind, Periodicity, ScheduleEntry, WeekRange, Weekday};
//!
//! let catalog = Catalog::new(
//!     vec![ScheduleEntry::new(
//!         "Математичний аналіз",
//!         "Шевченко Т. Г.",
//!         Weekday::Monday,
//!         1,
//!         Periodicity::Odd,
//!         WeekRange::new(1, 15).unwrap(),
//!         EntryKind::Lecture,
//!     )
//!     .unwrap()],
//!     vec![],
//! );
//!
//! let semester_start = Date::new(2024, 9, 16).unwrap();
//! let days = catalog
//!     .weekly_schedule(Date::new(2024, 9, 30).unwrap(), semester_start)
//!     .unwrap();
//! assert_eq!(days[&Weekday::Monday].len(), 1); // week 3 is odd
//! ```

pub mod error;
pub mod filter;
pub mod labels;
pub mod model;
pub mod render;
pub mod week;

pub use error::ScheduleError;
pub use filter::InfoLookup;
pub use model::{
    Catalog, EntryKind, Periodicity, ResolvedEntry, ScheduleEntry, SupplementaryInfo, WeekRange,
    Weekday,
};
pub use week::WeekOddity;

use std::collections::HashMap;

use jiff::civil::Date;

// --- Catalog convenience methods ---

impl Catalog {
    /// Entries active on the week containing `date`.
    pub fn active_entries(
        &self,
        date: Date,
        semester_start: Date,
    ) -> Result<Vec<&ScheduleEntry>, ScheduleError> {
        filter::active_entries(self, date, semester_start)
    }

    /// Resolved weekly schedule for the week containing `date`, grouped by
    /// weekday.
    pub fn weekly_schedule(
        &self,
        date: Date,
        semester_start: Date,
    ) -> Result<HashMap<Weekday, Vec<ResolvedEntry>>, ScheduleError> {
        filter::weekly_schedule(self, date, semester_start)
    }
}
