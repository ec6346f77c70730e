// src/crawler/crawler.rs
use super::listings::extract_listings;
use super::pagination::total_pages;
use super::types::{CrawlConfig, CrawlOutcome};
use reqwest::Client;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{error, info};

pub struct ParkingCrawler {
    client: Client,
    config: CrawlConfig,
}

impl ParkingCrawler {
    pub fn new(config: CrawlConfig) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; ParkingFinder/0.1)")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Crawls every listing page of one city and returns the
    /// deduplicated set of facility names. Never fails: a pagination
    /// failure is recorded on the outcome and yields an empty set.
    pub async fn crawl(
        &self,
        path_segment: &str,
        city_name: &str,
        progress_callback: Option<Box<dyn Fn(usize, usize, &str) + Send + Sync>>,
    ) -> CrawlOutcome {
        let base_url = format!(
            "{}/{}",
            self.config.site_url.trim_end_matches('/'),
            path_segment
        );

        let total = match total_pages(&self.client, &base_url).await {
            Ok(total) => total,
            Err(e) => {
                error!("Error scraping parkings in {}: {}", city_name, e);
                return CrawlOutcome::failed(e.to_string());
            }
        };

        info!("Crawling {} pages for {}", total, city_name);

        let mut all_parkings = Vec::new();

        // Pages are fetched strictly ascending, one at a time.
        for page in 1..=total {
            let page_url = format!("{}?page={}", base_url, page);
            let parkings = extract_listings(&self.client, &page_url, &self.config).await;
            all_parkings.extend(parkings);

            if let Some(ref callback) = progress_callback {
                callback(page as usize, total as usize, &page_url);
            }
        }

        let unique: BTreeSet<String> = all_parkings.into_iter().collect();
        info!("Found {} unique parkings in {}", unique.len(), city_name);

        CrawlOutcome {
            parkings: unique,
            pages_crawled: total,
            failure: None,
        }
    }
}
