use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use log::{debug, info};
use reqwest::Client;

use crate::timetable::models::{
    class_model::DayRequest, class_model::DayResponse, class_model::RawClass, ScheduleEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forwards,
    Backwards,
}

/// Slides a date off weekend days in the given direction. Weekdays are
/// returned unchanged; a weekend date moves at most 2 days.
pub fn nearest_weekday(mut date: NaiveDate, direction: Direction) -> NaiveDate {
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date = match direction {
            Direction::Forwards => date + Days::new(1),
            Direction::Backwards => date - Days::new(1),
        };
    }
    date
}

pub fn step_forward(date: NaiveDate) -> NaiveDate {
    nearest_weekday(date + Days::new(1), Direction::Forwards)
}

pub fn step_backward(date: NaiveDate) -> NaiveDate {
    nearest_weekday(date - Days::new(1), Direction::Backwards)
}

/// Human-relative label for the timetable header. Rules are checked in
/// order, first match wins; differences are whole calendar days, never
/// elapsed hours.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    let day_difference = (date - today).num_days();
    if day_difference == 0 {
        format!("Today ({})", date.format("%-d %B"))
    } else if day_difference == 1 {
        format!("Tomorrow ({})", date.format("%-d %B"))
    } else if day_difference == -1 {
        format!("Yesterday ({})", date.format("%-d %B"))
    } else if date.iso_week() == (today - Days::new(7)).iso_week() {
        format!("Last {} ({})", date.format("%A"), date.format("%-d %B"))
    } else if date.iso_week() == (today + Days::new(7)).iso_week() {
        format!("Next {} ({})", date.format("%A"), date.format("%-d %B"))
    } else {
        date.format("%A, %-d %B %Y").to_string()
    }
}

/// Parses the service's "hour.minute" strings, e.g. "9.30". `None` marks
/// a malformed time; the entry is kept anyway.
pub fn parse_class_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H.%M").ok()
}

/* the service sends empty strings as well as nulls for vacant fields */
fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|text| !text.is_empty())
}

/// Turns one day's raw records into the render-ready entry list: drops
/// placeholder slots (no subject and no heading), keeps service order,
/// and inserts the fixed Interval at position 2 (or at the end when the
/// day has fewer than 2 classes). An empty day stays empty.
pub fn normalize_day(raw_classes: Vec<RawClass>) -> Vec<ScheduleEntry> {
    let mut entries = raw_classes
        .into_iter()
        .filter(|class| has_text(&class.subject_desc) || has_text(&class.heading))
        .map(ScheduleEntry::from_raw)
        .collect::<Vec<_>>();
    if !entries.is_empty() {
        let position = entries.len().min(2);
        entries.insert(position, ScheduleEntry::interval());
    }
    entries
}

/// Weekday codes above 5 belong to the alternating "Week B" cycle.
pub fn week_cycle_label(entries: &[ScheduleEntry]) -> Option<&'static str> {
    entries
        .first()
        .and_then(|entry| entry.day)
        .map(|day| if day > 5 { "Week B" } else { "Week A" })
}

pub async fn get_day_classes(
    http_client: &Client,
    endpoint_url: &str,
    student_id: u32,
    date: NaiveDate,
) -> Result<Vec<RawClass>, reqwest::Error> {
    let date_string = date.format("%d/%m/%Y").to_string();
    info!(
        "Getting timetable for student {} on {}",
        student_id, date_string
    );
    let request = DayRequest {
        load_future_date: false,
        date: date_string,
        student_id,
        teacher_id: 0,
    };
    let response = http_client.post(endpoint_url).json(&request).send().await?;
    let day: DayResponse = response.error_for_status()?.json().await?;
    debug!(
        "Received {} raw records: {}",
        day.d.len(),
        serde_json::to_string_pretty(&day.d).unwrap_or_default()
    );
    Ok(day.d)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
