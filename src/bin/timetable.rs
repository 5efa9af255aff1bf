use lib::timetable::controller::{NavCommand, TimetableState};
use lib::timetable::day_fetcher::{DayFetcher, SpiderClient};
use lib::timetable::models::{Args, Config};
use lib::timetable::renderer::ScheduleRenderer;

use std::io::BufRead;

use chrono::{Local, NaiveDate};
use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::info;

#[tokio::main]
async fn main() {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SPIDER_"))
        .extract()
        .unwrap();
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)
            .unwrap()
            .display()
    );
    let fetcher = SpiderClient::new(config.endpoint_url);
    let mut stdout = std::io::stdout();

    /* Load today's timetable first */
    let today = Local::now().date_naive();
    let (mut state, ticket) = TimetableState::new(args.student_id, today);
    let result = fetcher.fetch_day(state.student_id, ticket.date).await;
    state.complete(&ticket, result);
    stdout.render(&state.view(today));

    /* Navigate until the user quits */
    println!("Commands: n = next day, b = previous day, t = today, dd/mm/yyyy = jump, q = quit");
    for line in std::io::stdin().lock().lines() {
        let line = line.unwrap();
        let today = Local::now().date_naive();
        let command = match line.trim() {
            "" => continue,
            "q" => break,
            "n" => NavCommand::Advance,
            "b" => NavCommand::Back,
            "t" => NavCommand::JumpToToday,
            other => match NaiveDate::parse_from_str(other, "%d/%m/%Y") {
                Ok(date) => NavCommand::JumpTo(date),
                Err(_) => {
                    println!("Unrecognized command: {}", other);
                    continue;
                }
            },
        };
        let ticket = state.apply(command, today);
        let result = fetcher.fetch_day(state.student_id, ticket.date).await;
        state.complete(&ticket, result);
        stdout.render(&state.view(today));
    }
}
