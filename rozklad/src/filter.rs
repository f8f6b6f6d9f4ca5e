//! Selects the schedule entries active in a date's academic week and groups
//! them by weekday.

use std::collections::HashMap;

use jiff::civil::Date;
use tracing::warn;

use crate::error::ScheduleError;
use crate::model::{Catalog, ResolvedEntry, ScheduleEntry, SupplementaryInfo, Weekday};
use crate::week::{localized_week_number, WeekOddity};

/// Outcome of a supplementary-info lookup.
///
/// A miss is not an error: it carries an empty-note placeholder so schedule
/// generation always completes. The variant makes the fallback visible to
/// callers that care (diagnostics, tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoLookup<'a> {
    Found(&'a SupplementaryInfo),
    Missing(SupplementaryInfo),
}

impl InfoLookup<'_> {
    pub fn note(&self) -> &str {
        match self {
            Self::Found(info) => &info.note,
            Self::Missing(placeholder) => &placeholder.note,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// Exact (name, instructor) match against the catalog's annotations.
///
/// A miss emits one `supplementary_info_missing` warning naming the entry.
pub fn lookup_info<'a>(catalog: &'a Catalog, entry: &ScheduleEntry) -> InfoLookup<'a> {
    match catalog
        .infos()
        .iter()
        .find(|info| info.name == entry.name && info.instructor == entry.instructor)
    {
        Some(info) => InfoLookup::Found(info),
        None => {
            warn!(
                event = "supplementary_info_missing",
                name = %entry.name,
                instructor = %entry.instructor,
                "no supplementary info for entry"
            );
            InfoLookup::Missing(SupplementaryInfo::placeholder(
                entry.name.clone(),
                entry.instructor.clone(),
            ))
        }
    }
}

/// Entries active on the week containing `date`: the localized week must fall
/// inside the entry's week range, and the entry's periodicity must match the
/// week's oddity. No ordering is guaranteed.
pub fn active_entries<'a>(
    catalog: &'a Catalog,
    date: Date,
    semester_start: Date,
) -> Result<Vec<&'a ScheduleEntry>, ScheduleError> {
    let week = localized_week_number(date, semester_start)?;
    let oddity = WeekOddity::of_week(week);
    Ok(catalog
        .entries()
        .iter()
        .filter(|entry| entry.weeks.contains(week) && entry.periodicity.matches(oddity))
        .collect())
}

/// Resolve the full weekly schedule for the week containing `date`.
///
/// Active entries are enriched with their note and display labels and grouped
/// by weekday. Buckets are created lazily: a weekday with no active entries
/// is absent from the map. Entries within a bucket carry no ordering;
/// presentation-time ordering (by slot) is the renderer's concern.
pub fn weekly_schedule(
    catalog: &Catalog,
    date: Date,
    semester_start: Date,
) -> Result<HashMap<Weekday, Vec<ResolvedEntry>>, ScheduleError> {
    let mut days: HashMap<Weekday, Vec<ResolvedEntry>> = HashMap::new();
    for entry in active_entries(catalog, date, semester_start)? {
        let info = lookup_info(catalog, entry);
        days.entry(entry.weekday)
            .or_default()
            .push(ResolvedEntry::from_entry(entry, info.note()));
    }
    Ok(days)
}
