//! Module with class model compatible with the Spider timetable ASMX API
use serde::{Deserialize, Serialize};

/// One scheduled period as the service returns it. Placeholder slots come
/// back with neither a subject nor a heading and are dropped during
/// normalization. `Day` is the service's weekday indicator (1-7, codes
/// above 5 belong to the alternating "Week B" cycle).
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RawClass {
    pub subject_desc: Option<String>,
    pub heading: Option<String>,
    pub room: Option<String>,
    pub teacher: Option<String>,
    pub teacher_email: Option<String>,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
    #[serde(default)]
    pub day: u8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DayRequest {
    pub load_future_date: bool,
    pub date: String,
    #[serde(rename = "StudentID")]
    pub student_id: u32,
    #[serde(rename = "TeacherID")]
    pub teacher_id: u32,
}

/* ASMX wraps the payload in a single "d" member */
#[derive(Deserialize, Debug)]
pub struct DayResponse {
    pub d: Vec<RawClass>,
}
