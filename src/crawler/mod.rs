pub mod crawler;
pub mod listings;
pub mod pagination;
pub mod types;

pub use crawler::ParkingCrawler;
pub use types::{CrawlConfig, CrawlOutcome};
