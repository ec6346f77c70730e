pub mod cli;
pub mod run;
pub mod run_city_search;

pub use cli::MenuAction;
