// src/crawler/pagination.rs
use reqwest::Client;
use scraper::{Html, Selector};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Resolves how many listing pages a city has.
///
/// The one scraping step that propagates failures: the crawl
/// orchestrator wraps it and turns errors into an aborted outcome.
pub async fn total_pages(client: &Client, base_url: &str) -> Result<u32> {
    let response = client.get(base_url).send().await?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()).into());
    }

    let html = response.text().await?;
    Ok(max_page_from_html(&html))
}

/// Scans the pagination landmark for the highest `page` query parameter.
/// Returns 1 when the landmark is absent or no link carries a usable
/// page number.
pub fn max_page_from_html(html: &str) -> u32 {
    let document = Html::parse_document(html);
    let nav_selector = Selector::parse(r#"nav[aria-label="Page navigation"]"#).unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();

    let Some(nav) = document.select(&nav_selector).next() else {
        return 1;
    };

    nav.select(&link_selector)
        .filter_map(|link| link.value().attr("href"))
        .filter_map(page_param)
        .max()
        .unwrap_or(1)
}

/// Extracts the numeric `page` query parameter from an href, if any.
fn page_param(href: &str) -> Option<u32> {
    let query = &href[href.find('?')? + 1..];

    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("page=") {
            return value.parse().ok();
        }
    }

    None
}
