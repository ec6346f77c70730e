// src/phone/search.rs
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Web-search seam used by the phone resolver. Implementations return
/// result-page URLs for a free-text query, best first.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;
}

/// Searches through the DuckDuckGo HTML endpoint, which serves plain
/// markup without JavaScript. The endpoint is configurable so tests can
/// point it at a local server.
pub struct HtmlSearchProvider {
    client: Client,
    endpoint: String,
}

impl HtmlSearchProvider {
    pub fn new(endpoint: &str) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; ParkingFinder/0.1)")
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl SearchProvider for HtmlSearchProvider {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = Url::parse_with_params(&self.endpoint, &[("q", query), ("kl", "es-es")])?;

        debug!("Searching: {}", query);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let html = response.text().await?;
        Ok(result_links_from_html(&html, max_results))
    }
}

/// Pulls result URLs out of a results page. Result anchors usually carry
/// a redirect href whose `uddg` parameter holds the real destination;
/// direct http(s) hrefs are taken as-is.
pub fn result_links_from_html(html: &str, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let result_selector = Selector::parse("a.result__a").unwrap();

    let mut links = Vec::new();
    for anchor in document.select(&result_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        if let Some(target) = resolve_result_href(href) {
            links.push(target);
            if links.len() >= max_results {
                break;
            }
        }
    }

    links
}

fn resolve_result_href(href: &str) -> Option<String> {
    // Redirect hrefs come protocol-relative: //duckduckgo.com/l/?uddg=...
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;

    if let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg") {
        return Some(target.into_owned());
    }

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        return Some(absolute);
    }

    None
}
