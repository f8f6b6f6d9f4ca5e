//! Ukrainian display labels for the closed enum sets.
//!
//! Pure pass-through lookup tables. Matching is exhaustive, so a new enum
//! variant forces a label here at compile time.

use crate::model::{EntryKind, Weekday};

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "понеділок",
        Weekday::Tuesday => "вівторок",
        Weekday::Wednesday => "середа",
        Weekday::Thursday => "четвер",
        Weekday::Friday => "п'ятниця",
        Weekday::Saturday => "субота",
    }
}

pub fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Lecture => "лекція",
        EntryKind::Practice => "практика",
        EntryKind::Lab => "лабораторна",
    }
}
