// src/phone/resolver.rs
use super::extractor::PhoneExtractor;
use super::search::SearchProvider;
use crate::config::SearchConfig;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Sentinel standing in for a phone number that could not be discovered.
pub const PHONE_NOT_FOUND: &str = "No encontrado";

/// Fixed pool of request headers; one is picked per lookup so fetches
/// vary a little between runs.
pub const USER_AGENTS: [&str; 2] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneLookup {
    Found(String),
    NotFound,
}

impl PhoneLookup {
    pub fn as_str(&self) -> &str {
        match self {
            PhoneLookup::Found(phone) => phone,
            PhoneLookup::NotFound => PHONE_NOT_FOUND,
        }
    }
}

impl std::fmt::Display for PhoneLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct PhoneResolver {
    client: Client,
    provider: Box<dyn SearchProvider>,
    extractor: PhoneExtractor,
    config: SearchConfig,
    rng: fastrand::Rng,
}

impl PhoneResolver {
    pub fn new(config: SearchConfig, provider: Box<dyn SearchProvider>) -> Self {
        Self::with_rng(config, provider, fastrand::Rng::new())
    }

    /// Builds a resolver with a caller-supplied generator so header and
    /// delay choices are reproducible.
    pub fn with_rng(
        config: SearchConfig,
        provider: Box<dyn SearchProvider>,
        rng: fastrand::Rng,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            provider,
            extractor: PhoneExtractor::new(),
            config,
            rng,
        }
    }

    /// Searches the web for a listing's contact phone. Never fails: a
    /// search-provider error and exhausted candidate pages both collapse
    /// into `NotFound`.
    pub async fn find_phone(&mut self, listing_name: &str, city_name: &str) -> PhoneLookup {
        let query = format!("{} parking {} teléfono contacto", listing_name, city_name);

        let urls = match self
            .provider
            .search(&query, self.config.max_results)
            .await
        {
            Ok(urls) => urls,
            Err(e) => {
                warn!("Error searching phone for {}: {}", listing_name, e);
                return PhoneLookup::NotFound;
            }
        };

        // One header for every fetch within this lookup.
        let user_agent = USER_AGENTS[self.rng.usize(0..USER_AGENTS.len())];

        for (i, url) in urls.iter().enumerate() {
            match self.fetch_candidate(url, user_agent).await {
                Ok(html) => {
                    let text = visible_text_from_html(&html);
                    if let Some(phone) = self.extractor.first_match(&text) {
                        info!("Found phone {} for {} on {}", phone, listing_name, url);
                        return PhoneLookup::Found(phone);
                    }
                }
                Err(e) => {
                    debug!("Skipping candidate {}: {}", url, e);
                    continue;
                }
            }

            // Pause between candidate pages to avoid getting blocked.
            if i + 1 < urls.len() {
                let delay = self
                    .rng
                    .u64(self.config.retry_delay_min_ms..=self.config.retry_delay_max_ms);
                sleep(Duration::from_millis(delay)).await;
            }
        }

        PhoneLookup::NotFound
    }

    async fn fetch_candidate(&self, url: &str, user_agent: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .timeout(Duration::from_secs(self.config.fetch_timeout_seconds))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        Ok(response.text().await?)
    }
}

/// Collapses a page into the text a visitor would see, one space between
/// text nodes.
fn visible_text_from_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").unwrap();

    document
        .select(&body_selector)
        .next()
        .map(|body| {
            body.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_displays_digits_or_the_sentinel() {
        assert_eq!(
            PhoneLookup::Found("666123456".to_string()).to_string(),
            "666123456"
        );
        assert_eq!(PhoneLookup::NotFound.to_string(), "No encontrado");
    }

    #[test]
    fn visible_text_joins_nodes_with_single_spaces() {
        let html = "<html><body><p>Llámanos al</p><span>666 12 34 56</span></body></html>";
        assert_eq!(visible_text_from_html(html), "Llámanos al 666 12 34 56");
    }
}
