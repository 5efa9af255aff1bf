use std::io::{Stdout, Write};

use chrono::NaiveTime;

use super::controller::{FetchState, TimetableView};
use super::models::ScheduleEntry;

/// A trait, necessary for every entity that will present a day's schedule.
pub trait ScheduleRenderer {
    fn render(&mut self, view: &TimetableView);
}

fn format_time(time: Option<NaiveTime>) -> String {
    /* "?" stands in for a time string the service sent malformed */
    time.map_or_else(|| "?".to_string(), |t| t.format("%H.%M").to_string())
}

fn format_entry(entry: &ScheduleEntry) -> String {
    let name = entry
        .name
        .as_deref()
        .or(entry.slot.as_deref())
        .unwrap_or("");
    let mut line = format!(
        "{}-{}  {}",
        format_time(entry.start),
        format_time(entry.end),
        name
    );
    if let Some(room) = entry.room.as_deref() {
        line.push_str(&format!("  ({})", room));
    }
    if let Some(teacher) = entry.teacher.as_deref() {
        line.push_str(&format!("  {}", teacher));
    }
    line
}

/// Allows Stdout to present schedules as plain text lines.
impl ScheduleRenderer for Stdout {
    fn render(&mut self, view: &TimetableView) {
        if view.can_jump_to_today {
            writeln!(self, "{} (t jumps back to today)", view.header).unwrap();
        } else {
            writeln!(self, "{}", view.header).unwrap();
        }
        match view.fetch {
            FetchState::Errored => {
                writeln!(self, "{}", view.error.unwrap_or("There was an error.")).unwrap()
            }
            FetchState::Loading => writeln!(self, "Loading timetable...").unwrap(),
            FetchState::Empty => writeln!(self, "No classes found.").unwrap(),
            FetchState::Loaded => {
                if let Some(week_label) = view.week_label {
                    writeln!(self, "{}", week_label).unwrap();
                }
                for entry in view.entries {
                    writeln!(self, "{}", format_entry(entry)).unwrap();
                }
            }
        }
    }
}
