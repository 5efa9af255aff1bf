use std::error::Error;

use chrono::NaiveDate;
use reqwest::Client;

use super::{helpers::get_day_classes, models::class_model::RawClass};

/// A trait, necessary for every entity that will be used for getting one
/// day's classes.
#[allow(async_fn_in_trait)]
pub trait DayFetcher {
    async fn fetch_day(
        &self,
        student_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<RawClass>, Box<dyn Error>>;
}

/// The Spider day-timetable endpoint plus the client that talks to it.
pub struct SpiderClient {
    http_client: Client,
    endpoint_url: String,
}

impl SpiderClient {
    pub fn new(endpoint_url: String) -> Self {
        SpiderClient {
            http_client: Client::new(),
            endpoint_url,
        }
    }
}

/// Allows SpiderClient to get day schedules via requests to the Spider
/// resource.
impl DayFetcher for SpiderClient {
    async fn fetch_day(
        &self,
        student_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<RawClass>, Box<dyn Error>> {
        let classes =
            get_day_classes(&self.http_client, &self.endpoint_url, student_id, date).await?;
        Ok(classes)
    }
}
