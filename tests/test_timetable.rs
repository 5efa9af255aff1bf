use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::rc::Rc;

use chrono::NaiveDate;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::Figment;
use lib::timetable::controller::{FetchState, NavCommand, TimetableView};
use lib::timetable::day_fetcher::DayFetcher;
use lib::timetable::models::class_model::RawClass;
use lib::timetable::models::Config;
use lib::timetable::renderer::ScheduleRenderer;
use lib::timetable::run_tool::run;

fn make_class(subject: &str, heading: &str, from_time: &str, to_time: &str, day: u8) -> RawClass {
    RawClass {
        subject_desc: Some(subject.to_string()),
        heading: Some(heading.to_string()),
        room: Some("M12".to_string()),
        teacher: Some("J. Mason".to_string()),
        teacher_email: Some("j.mason@example.school.nz".to_string()),
        from_time: Some(from_time.to_string()),
        to_time: Some(to_time.to_string()),
        day,
    }
}

pub struct TestFetcher {
    // keyed by the wire date format, dd/mm/yyyy
    pub days: HashMap<String, Vec<RawClass>>,
    pub failing_dates: Vec<String>,
}

impl DayFetcher for TestFetcher {
    async fn fetch_day(
        &self,
        _student_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<RawClass>, Box<dyn Error>> {
        let key = date.format("%d/%m/%Y").to_string();
        if self.failing_dates.contains(&key) {
            return Err(format!("no route to host for {}", key).into());
        }
        Ok(self.days.get(&key).cloned().unwrap_or_default())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    pub fetch: FetchState,
    pub entry_count: usize,
    pub header: String,
    pub week_label: Option<&'static str>,
    pub can_jump_to_today: bool,
}

pub struct TestRenderer {
    pub frames: Rc<RefCell<Vec<Frame>>>,
}

impl ScheduleRenderer for TestRenderer {
    fn render(&mut self, view: &TimetableView) {
        self.frames.borrow_mut().push(Frame {
            fetch: view.fetch,
            entry_count: view.entries.len(),
            header: view.header.clone(),
            week_label: view.week_label,
            can_jump_to_today: view.can_jump_to_today,
        });
    }
}

#[tokio::test]
async fn test_advancing_across_a_week() {
    // Thursday; advancing twice crosses the weekend into the next ISO week
    let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

    let mut days = HashMap::new();
    days.insert(
        "14/03/2024".to_string(),
        vec![make_class("Math", "P1", "9.00", "9.45", 2)],
    );
    days.insert(
        "18/03/2024".to_string(),
        vec![
            make_class("English", "P1", "9.00", "9.45", 6),
            make_class("Physics", "P2", "9.50", "10.35", 6),
            make_class("Chemistry", "P3", "11.20", "12.05", 6),
        ],
    );
    let test_fetcher = TestFetcher {
        days,
        failing_dates: Vec::new(),
    };

    let frames = Rc::new(RefCell::new(Vec::new()));
    let test_renderer = TestRenderer {
        frames: Rc::clone(&frames),
    };

    run(
        test_fetcher,
        test_renderer,
        123,
        vec![NavCommand::Advance, NavCommand::Advance],
        today,
    )
    .await;

    let frames = frames.borrow();
    assert_eq!(frames.len(), 3);
    assert_eq!(
        frames[0],
        Frame {
            fetch: FetchState::Loaded,
            entry_count: 2,
            header: "Today (14 March)".to_string(),
            week_label: Some("Week A"),
            can_jump_to_today: false,
        }
    );
    // Friday has no records at all
    assert_eq!(
        frames[1],
        Frame {
            fetch: FetchState::Empty,
            entry_count: 0,
            header: "Tomorrow (15 March)".to_string(),
            week_label: None,
            can_jump_to_today: true,
        }
    );
    // Monday: three classes plus the interval, on the alternating cycle
    assert_eq!(
        frames[2],
        Frame {
            fetch: FetchState::Loaded,
            entry_count: 4,
            header: "Next Monday (18 March)".to_string(),
            week_label: Some("Week B"),
            can_jump_to_today: true,
        }
    );
}

#[tokio::test]
async fn test_transport_failure_shows_errored_day() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

    let mut days = HashMap::new();
    days.insert(
        "14/03/2024".to_string(),
        vec![make_class("Math", "P1", "9.00", "9.45", 2)],
    );
    let test_fetcher = TestFetcher {
        days,
        failing_dates: vec!["15/03/2024".to_string()],
    };

    let frames = Rc::new(RefCell::new(Vec::new()));
    let test_renderer = TestRenderer {
        frames: Rc::clone(&frames),
    };

    run(
        test_fetcher,
        test_renderer,
        123,
        vec![NavCommand::Advance, NavCommand::Back],
        today,
    )
    .await;

    let frames = frames.borrow();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].fetch, FetchState::Loaded);
    assert_eq!(frames[1].fetch, FetchState::Errored);
    assert_eq!(frames[1].entry_count, 0);
    // stepping back retries today and recovers
    assert_eq!(frames[2].fetch, FetchState::Loaded);
    assert_eq!(frames[2].header, "Today (14 March)");
}

#[test]
fn test_example_config_extracts() {
    let config: Config = Figment::new()
        .merge(Json::file("example.config.json"))
        .merge(Env::prefixed("SPIDER_"))
        .extract()
        .unwrap();
    assert!(config.endpoint_url.starts_with("https://"));
}
