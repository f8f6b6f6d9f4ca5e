#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;
use crate::labels;
use crate::week::WeekOddity;

/// Day of the week a class can be scheduled on. The timetable has no Sunday
/// slots, so Sunday is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days in timetable order, Monday first.
    pub const ALL: [Self; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "monday" => Some(Weekday::Monday),
        "tuesday" => Some(Weekday::Tuesday),
        "wednesday" => Some(Weekday::Wednesday),
        "thursday" => Some(Weekday::Thursday),
        "friday" => Some(Weekday::Friday),
        "saturday" => Some(Weekday::Saturday),
        _ => None,
    }
}

#[cfg(feature = "serde")]
impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_weekday(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown weekday: {s}")))
    }
}

/// Recurrence rule relative to the week's oddity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Periodicity {
    Every,
    Odd,
    Even,
}

impl Periodicity {
    /// Whether an entry with this rule runs in a week of the given oddity.
    pub fn matches(self, oddity: WeekOddity) -> bool {
        match (self, oddity) {
            (Self::Every, _) => true,
            (Self::Odd, WeekOddity::Odd) => true,
            (Self::Even, WeekOddity::Even) => true,
            _ => false,
        }
    }
}

/// Kind of class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntryKind {
    Lecture,
    Practice,
    Lab,
}

impl Default for EntryKind {
    fn default() -> Self {
        Self::Lecture
    }
}

/// Inclusive window of localized weeks in which an entry is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    from_week: u32,
    to_week: u32,
}

impl WeekRange {
    /// Validate `1 <= from_week <= to_week` at construction so the filter
    /// never has to.
    pub fn new(from_week: u32, to_week: u32) -> Result<Self, ScheduleError> {
        if from_week == 0 || from_week > to_week {
            return Err(ScheduleError::InvalidWeekRange { from_week, to_week });
        }
        Ok(Self { from_week, to_week })
    }

    pub fn from_week(self) -> u32 {
        self.from_week
    }

    pub fn to_week(self) -> u32 {
        self.to_week
    }

    pub fn contains(self, week: i32) -> bool {
        week >= self.from_week as i32 && week <= self.to_week as i32
    }
}

#[cfg(feature = "serde")]
impl Serialize for WeekRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("from_week", &self.from_week)?;
        map.serialize_entry("to_week", &self.to_week)?;
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for WeekRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            from_week: u32,
            to_week: u32,
        }
        let raw = Raw::deserialize(deserializer)?;
        WeekRange::new(raw.from_week, raw.to_week).map_err(serde::de::Error::custom)
    }
}

/// One recurring class slot.
///
/// (name, instructor) is the join key to [`SupplementaryInfo`]; together with
/// weekday and slot it identifies the entry for display purposes, but no
/// global uniqueness is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleEntry {
    #[cfg_attr(feature = "serde", serde(rename = "pair_name"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "teacher"))]
    pub instructor: String,
    #[cfg_attr(feature = "serde", serde(rename = "day"))]
    pub weekday: Weekday,
    #[cfg_attr(feature = "serde", serde(rename = "pair_number"))]
    pub slot: u32,
    pub periodicity: Periodicity,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub weeks: WeekRange,
    #[cfg_attr(feature = "serde", serde(rename = "pair_type"))]
    pub kind: EntryKind,
}

impl ScheduleEntry {
    /// Validated constructor: slots are 1-based.
    pub fn new(
        name: impl Into<String>,
        instructor: impl Into<String>,
        weekday: Weekday,
        slot: u32,
        periodicity: Periodicity,
        weeks: WeekRange,
        kind: EntryKind,
    ) -> Result<Self, ScheduleError> {
        if slot == 0 {
            return Err(ScheduleError::InvalidSlot { slot });
        }
        Ok(Self {
            name: name.into(),
            instructor: instructor.into(),
            weekday,
            slot,
            periodicity,
            weeks,
            kind,
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ScheduleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Wire format of pairs.json. `pair_type` may be absent (lecture).
        #[derive(Deserialize)]
        struct Raw {
            pair_name: String,
            teacher: String,
            day: Weekday,
            pair_number: u32,
            periodicity: Periodicity,
            from_week: u32,
            to_week: u32,
            #[serde(default)]
            pair_type: EntryKind,
        }
        let raw = Raw::deserialize(deserializer)?;
        let weeks = WeekRange::new(raw.from_week, raw.to_week).map_err(serde::de::Error::custom)?;
        ScheduleEntry::new(
            raw.pair_name,
            raw.teacher,
            raw.day,
            raw.pair_number,
            raw.periodicity,
            weeks,
            raw.pair_type,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Free-text annotation attached to a class by (name, instructor) match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupplementaryInfo {
    #[cfg_attr(feature = "serde", serde(rename = "pair_name"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "teacher"))]
    pub instructor: String,
    #[cfg_attr(feature = "serde", serde(rename = "additional"))]
    pub note: String,
}

impl SupplementaryInfo {
    /// Empty-note substitute used when no annotation matches an entry.
    pub fn placeholder(name: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructor: instructor.into(),
            note: String::new(),
        }
    }
}

/// Output-facing projection of a [`ScheduleEntry`]: the entry's fields plus
/// its note and the localized display labels for weekday and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedEntry {
    pub name: String,
    pub instructor: String,
    pub weekday: Weekday,
    pub weekday_label: &'static str,
    pub slot: u32,
    pub periodicity: Periodicity,
    pub kind: EntryKind,
    pub kind_label: &'static str,
    pub note: String,
}

impl ResolvedEntry {
    pub(crate) fn from_entry(entry: &ScheduleEntry, note: &str) -> Self {
        Self {
            name: entry.name.clone(),
            instructor: entry.instructor.clone(),
            weekday: entry.weekday,
            weekday_label: labels::weekday_label(entry.weekday),
            slot: entry.slot,
            periodicity: entry.periodicity,
            kind: entry.kind,
            kind_label: labels::kind_label(entry.kind),
            note: note.to_string(),
        }
    }
}

/// Immutable pair of (entries, annotations), loaded once per invocation and
/// read-only thereafter. Reloading means building a new catalog, never
/// mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ScheduleEntry>,
    infos: Vec<SupplementaryInfo>,
}

impl Catalog {
    pub fn new(entries: Vec<ScheduleEntry>, infos: Vec<SupplementaryInfo>) -> Self {
        Self { entries, infos }
    }

    /// Parse a catalog from the JSON documents of pairs.json / pair_info.json.
    #[cfg(feature = "serde")]
    pub fn from_json(entries: &[u8], infos: &[u8]) -> Result<Self, ScheduleError> {
        let entries: Vec<ScheduleEntry> = serde_json::from_slice(entries)
            .map_err(|e| ScheduleError::catalog(format!("invalid schedule entries: {e}")))?;
        let infos: Vec<SupplementaryInfo> = serde_json::from_slice(infos)
            .map_err(|e| ScheduleError::catalog(format!("invalid supplementary info: {e}")))?;
        Ok(Self::new(entries, infos))
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn infos(&self) -> &[SupplementaryInfo] {
        &self.infos
    }
}
