//! Basic rozklad API walkthrough: build a catalog, resolve a week, render.

use jiff::civil::Date;
use rozklad::week::{localized_week_number, week_oddity};
use rozklad::{render, Catalog, EntryKind, Periodicity, ScheduleEntry, WeekRange, Weekday};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(
        vec![
            ScheduleEntry::new(
                "Математичний аналіз",
                "Шевченко Т. Г.",
                Weekday::Monday,
                1,
                Periodicity::Every,
                WeekRange::new(1, 15)?,
                EntryKind::Lecture,
            )?,
            ScheduleEntry::new(
                "Теорія ймовірностей",
                "Бондар С. М.",
                Weekday::Monday,
                2,
                Periodicity::Odd,
                WeekRange::new(1, 15)?,
                EntryKind::Practice,
            )?,
        ],
        vec![],
    );

    let semester_start = Date::new(2024, 9, 16)?;
    let date = Date::new(2024, 9, 30)?;

    // Resolve the week the date falls into
    let week = localized_week_number(date, semester_start)?;
    let oddity = week_oddity(date, semester_start)?;
    println!("{date} is in week {week} ({})\n", oddity.as_str());

    // Both entries are active: week 3 is odd
    let days = catalog.weekly_schedule(date, semester_start)?;
    println!("{}", render::render_markdown(&days, date));

    Ok(())
}
