use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{command, Parser};
use serde::Deserialize;

pub mod class_model;

use class_model::RawClass;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. ID of the student whose timetable is shown.
/// 2. Path to config.json, that contains the Spider endpoint configuration.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "ID")]
    pub student_id: u32,
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. URL of the Spider day-timetable endpoint to which requests are posted
#[derive(Deserialize)]
pub struct Config {
    pub endpoint_url: String,
}

/// Whether an entry is a fetched class or the synthetic mid-morning break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Class,
    Interval,
}

/// One canonical period of a day's schedule, ready for rendering.
/// Text fields are copied verbatim from the service; `start`/`end` are
/// parsed from the service's "hour.minute" strings, `None` when the
/// string did not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub name: Option<String>,
    pub room: Option<String>,
    pub teacher: Option<String>,
    pub teacher_email: Option<String>,
    pub slot: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub kind: EntryKind,
    pub day: Option<u8>,
}

impl ScheduleEntry {
    pub fn from_raw(class: RawClass) -> Self {
        ScheduleEntry {
            name: class.subject_desc,
            room: class.room,
            teacher: class.teacher,
            teacher_email: class.teacher_email,
            slot: class.heading,
            start: class
                .from_time
                .as_deref()
                .and_then(super::helpers::parse_class_time),
            end: class
                .to_time
                .as_deref()
                .and_then(super::helpers::parse_class_time),
            kind: EntryKind::Class,
            day: Some(class.day),
        }
    }

    /// The fixed "Interval" break, 10:45-11:15, carried by every non-empty day.
    pub fn interval() -> Self {
        ScheduleEntry {
            name: Some("Interval".to_string()),
            room: None,
            teacher: None,
            teacher_email: None,
            slot: None,
            start: NaiveTime::from_hms_opt(10, 45, 0),
            end: NaiveTime::from_hms_opt(11, 15, 0),
            kind: EntryKind::Interval,
            day: None,
        }
    }
}
