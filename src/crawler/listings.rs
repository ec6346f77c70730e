// src/crawler/listings.rs
use super::types::CrawlConfig;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Exact class signature of the listing container on a city page. The
/// scraper is coupled to this markup: when it drifts, extraction
/// degrades to empty results rather than an error.
const LISTING_CLASS: &str =
    "grid grid-cols-2 lg:grid-cols-4 gap-4 text-grey-400 font-medium text-sm";

/// Extracts the facility names present on one listing page.
///
/// Sleeps the configured delay before the fetch to respect informal
/// rate limits. Fetch errors are logged and yield an empty list so the
/// surrounding crawl keeps going.
pub async fn extract_listings(client: &Client, page_url: &str, config: &CrawlConfig) -> Vec<String> {
    sleep(Duration::from_millis(config.rate_limit_delay_ms)).await;

    let html = match fetch_page(client, page_url, config.page_timeout_seconds).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Error accessing page {}: {}", page_url, e);
            return Vec::new();
        }
    };

    listings_from_html(&html)
}

async fn fetch_page(client: &Client, url: &str, timeout_seconds: u64) -> Result<String> {
    let response = client
        .get(url)
        .timeout(Duration::from_secs(timeout_seconds))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()).into());
    }

    Ok(response.text().await?)
}

/// Finds the listing container by its exact class attribute and takes
/// the trimmed text of the first link in each item.
pub fn listings_from_html(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let list_selector = Selector::parse("ul").unwrap();
    let item_selector = Selector::parse("li").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let Some(list) = document
        .select(&list_selector)
        .find(|ul| ul.value().attr("class") == Some(LISTING_CLASS))
    else {
        return Vec::new();
    };

    let mut parkings = Vec::new();
    for item in list.select(&item_selector) {
        if let Some(link) = item.select(&link_selector).next() {
            let name = link.text().collect::<String>().trim().to_string();
            if !name.is_empty() {
                parkings.push(name);
            }
        }
    }

    parkings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(list_class: &str, items: &str) -> String {
        format!(
            "<html><body><ul class=\"{}\">{}</ul></body></html>",
            list_class, items
        )
    }

    #[test]
    fn extracts_trimmed_link_text_from_the_listing_container() {
        let html = page(
            LISTING_CLASS,
            r#"<li><a href="/p/sol"> Parking Sol </a></li><li><a href="/p/retiro">Parking Retiro</a></li>"#,
        );

        assert_eq!(
            listings_from_html(&html),
            vec!["Parking Sol".to_string(), "Parking Retiro".to_string()]
        );
    }

    #[test]
    fn returns_empty_when_the_container_is_absent() {
        let html = page("some other-class", r#"<li><a href="/p/sol">Parking Sol</a></li>"#);
        assert!(listings_from_html(&html).is_empty());
    }

    #[test]
    fn skips_items_without_links() {
        let html = page(
            LISTING_CLASS,
            r#"<li>plain text</li><li><a href="/p/sol">Parking Sol</a></li>"#,
        );

        assert_eq!(listings_from_html(&html), vec!["Parking Sol".to_string()]);
    }

    #[test]
    fn a_partial_class_match_does_not_qualify() {
        let html = page("grid grid-cols-2", r#"<li><a href="/p/sol">Parking Sol</a></li>"#);
        assert!(listings_from_html(&html).is_empty());
    }
}
