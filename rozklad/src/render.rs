//! Markdown rendering of a resolved weekly schedule.
//!
//! Presentation-time concerns live here: days come out in timetable order
//! (Monday first) and entries within a day are sorted by slot number.

use std::collections::HashMap;
use std::fmt::Write;

use jiff::civil::Date;

use crate::labels;
use crate::model::{ResolvedEntry, Weekday};

/// Uppercase the first letter, leaving the rest of the label unchanged.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the weekly schedule as a markdown document.
///
/// Days with no active entries are skipped entirely.
pub fn render_markdown(days: &HashMap<Weekday, Vec<ResolvedEntry>>, date: Date) -> String {
    let mut out = format!("Розклад на тиждень з {date} року:\n\n");

    for day in Weekday::ALL {
        let Some(entries) = days.get(&day) else {
            continue;
        };
        let mut entries: Vec<&ResolvedEntry> = entries.iter().collect();
        entries.sort_by_key(|e| e.slot);

        let _ = writeln!(out, "# {}:\n", capitalize(labels::weekday_label(day)));
        for entry in entries {
            let _ = writeln!(
                out,
                "## #{}\nНазва пари: {}\n\nВикладач: {} ({})\n\nДодаткова інформація:\n{}\n",
                entry.slot, entry.name, entry.instructor, entry.kind_label, entry.note
            );
        }
        out.push_str("\n---\n");
    }

    out
}
