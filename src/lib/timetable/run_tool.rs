use chrono::NaiveDate;

use super::{
    controller::{NavCommand, TimetableState},
    day_fetcher::DayFetcher,
    renderer::ScheduleRenderer,
};

pub async fn run<DF: DayFetcher, SR: ScheduleRenderer>(
    fetcher: DF,
    mut renderer: SR,
    student_id: u32,
    commands: Vec<NavCommand>,
    today: NaiveDate,
) -> () {
    let (mut state, ticket) = TimetableState::new(student_id, today);
    let result = fetcher.fetch_day(student_id, ticket.date).await;
    state.complete(&ticket, result);
    renderer.render(&state.view(today));
    for command in commands {
        let ticket = state.apply(command, today);
        let result = fetcher.fetch_day(student_id, ticket.date).await;
        state.complete(&ticket, result);
        renderer.render(&state.view(today));
    }
}
