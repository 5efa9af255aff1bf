pub mod controller;
pub mod day_fetcher;
pub mod helpers;
pub mod models;
pub mod renderer;
pub mod run_tool;
