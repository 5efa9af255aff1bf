use std::error::Error;

use chrono::NaiveDate;
use log::{debug, warn};

use super::helpers::{
    nearest_weekday, normalize_day, relative_day_label, step_backward, step_forward,
    week_cycle_label, Direction,
};
use super::models::{class_model::RawClass, ScheduleEntry};

/// What the viewer is shown for the current date. Exactly one state
/// applies at a time and it always describes the most recently requested
/// date, never a cached one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Empty,
    Loaded,
    Errored,
}

/// A navigation action coming in from the outside (buttons, date picker).
/// `JumpTo` and `JumpToToday` honor the chosen date as-is; only the
/// stepping commands slide off weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Back,
    JumpTo(NaiveDate),
    JumpToToday,
}

/// Token for one load cycle. A completion may only commit state while its
/// epoch is still the current one; a superseded fetch is dropped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub epoch: u64,
    pub date: NaiveDate,
}

/// The projection consumed by the rendering surface.
#[derive(Debug)]
pub struct TimetableView<'a> {
    pub fetch: FetchState,
    pub entries: &'a [ScheduleEntry],
    pub header: String,
    pub week_label: Option<&'static str>,
    pub can_jump_to_today: bool,
    pub error: Option<&'a str>,
}

const GENERIC_ERROR_MESSAGE: &str = "There was an error.";

/// Owns the navigation cursor and the outcome of the latest load.
/// Navigation goes through [`TimetableState::apply`], which hands back the
/// ticket for the load it started; the caller runs the fetch and feeds the
/// outcome to [`TimetableState::complete`].
#[derive(Debug)]
pub struct TimetableState {
    pub student_id: u32,
    pub date: NaiveDate,
    pub fetch: FetchState,
    pub entries: Vec<ScheduleEntry>,
    pub error: Option<String>,
    epoch: u64,
}

impl TimetableState {
    /// Initial state: the cursor starts on today, slid forwards off a
    /// weekend, with the first load already begun.
    pub fn new(student_id: u32, today: NaiveDate) -> (Self, LoadTicket) {
        let mut state = TimetableState {
            student_id,
            date: nearest_weekday(today, Direction::Forwards),
            fetch: FetchState::Loading,
            entries: Vec::new(),
            error: None,
            epoch: 0,
        };
        let ticket = state.begin_load();
        (state, ticket)
    }

    fn begin_load(&mut self) -> LoadTicket {
        self.epoch += 1;
        self.entries.clear();
        self.fetch = FetchState::Loading;
        self.error = None;
        LoadTicket {
            epoch: self.epoch,
            date: self.date,
        }
    }

    /// Moves the cursor and begins a load for the new date. Starting a new
    /// load supersedes any ticket still in flight.
    pub fn apply(&mut self, command: NavCommand, today: NaiveDate) -> LoadTicket {
        match command {
            NavCommand::Advance => self.date = step_forward(self.date),
            NavCommand::Back => self.date = step_backward(self.date),
            NavCommand::JumpTo(date) => self.date = date,
            NavCommand::JumpToToday => self.date = today,
        }
        self.begin_load()
    }

    /// Commits the outcome of a load, unless a later load has been begun
    /// in the meantime. Transport failures collapse to one generic
    /// user-facing message; the cause only goes to the log.
    pub fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<RawClass>, Box<dyn Error>>,
    ) {
        if ticket.epoch != self.epoch {
            debug!(
                "Discarding stale response for {} (epoch {}, current {})",
                ticket.date, ticket.epoch, self.epoch
            );
            return;
        }
        match result {
            Ok(raw_classes) => {
                let entries = normalize_day(raw_classes);
                self.fetch = if entries.is_empty() {
                    FetchState::Empty
                } else {
                    FetchState::Loaded
                };
                self.entries = entries;
            }
            Err(cause) => {
                warn!("Timetable request for {} failed: {}", ticket.date, cause);
                self.fetch = FetchState::Errored;
                self.error = Some(GENERIC_ERROR_MESSAGE.to_string());
            }
        }
    }

    pub fn view(&self, today: NaiveDate) -> TimetableView<'_> {
        TimetableView {
            fetch: self.fetch,
            entries: &self.entries,
            header: relative_day_label(self.date, today),
            week_label: week_cycle_label(&self.entries),
            can_jump_to_today: self.date != today,
            error: self.error.as_deref(),
        }
    }
}
