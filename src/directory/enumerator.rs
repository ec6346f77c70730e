// src/directory/enumerator.rs
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Cities known to have listing pages, used whenever live discovery fails.
const FALLBACK_CITIES: [(&str, &str); 5] = [
    ("Madrid", "parking-madrid"),
    ("Barcelona", "parking-barcelona"),
    ("Valencia", "parking-valencia"),
    ("Sevilla", "parking-sevilla"),
    ("Málaga", "parking-malaga"),
];

/// Path segments that identify city listing pages.
const CITY_PATH_PREFIX: &str = "parking-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySource {
    Live,
    Fallback { reason: String },
}

/// City name to path-segment mapping, with a record of whether it came
/// from the live site or the static fallback table.
#[derive(Debug, Clone)]
pub struct CityDirectory {
    pub cities: BTreeMap<String, String>,
    pub source: DirectorySource,
}

impl CityDirectory {
    fn fallback(reason: impl Into<String>) -> Self {
        Self {
            cities: FALLBACK_CITIES
                .iter()
                .map(|(name, path)| (name.to_string(), path.to_string()))
                .collect(),
            source: DirectorySource::Fallback {
                reason: reason.into(),
            },
        }
    }
}

pub struct CityEnumerator {
    client: Client,
    site_url: String,
}

impl CityEnumerator {
    pub fn new(site_url: &str) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; ParkingFinder/0.1)")
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Discovers the city menu from the site home page. Never fails: any
    /// fetch or markup problem degrades to the static fallback table.
    pub async fn discover_cities(&self) -> CityDirectory {
        let html = match self.fetch_home_page().await {
            Ok(html) => html,
            Err(e) => {
                warn!("City discovery fetch failed: {}. Using fallback table.", e);
                return CityDirectory::fallback(e.to_string());
            }
        };

        let cities = cities_from_html(&html);
        if cities.is_empty() {
            warn!("No city links found on home page. Using fallback table.");
            return CityDirectory::fallback("no city links found");
        }

        info!("Discovered {} cities from {}", cities.len(), self.site_url);
        CityDirectory {
            cities,
            source: DirectorySource::Live,
        }
    }

    async fn fetch_home_page(&self) -> Result<String> {
        let response = self.client.get(&self.site_url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        Ok(response.text().await?)
    }
}

/// Pulls city links out of the home page's cities menu. Anchor text is
/// the display name; the href, trimmed of slashes, is the path segment.
/// Only segments with the city prefix qualify.
fn cities_from_html(html: &str) -> BTreeMap<String, String> {
    let document = Html::parse_document(html);
    let menu_selector = Selector::parse("div.cities-menu").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut cities = BTreeMap::new();

    if let Some(menu) = document.select(&menu_selector).next() {
        for link in menu.select(&link_selector) {
            let name = link.text().collect::<String>().trim().to_string();
            let path = link
                .value()
                .attr("href")
                .unwrap_or_default()
                .trim_matches('/')
                .to_string();

            if !name.is_empty() && path.starts_with(CITY_PATH_PREFIX) {
                cities.insert(name, path);
            }
        }
    }

    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_only_city_links_from_menu() {
        let html = r#"
            <html><body>
              <div class="cities-menu">
                <a href="/parking-madrid/">Madrid</a>
                <a href="/parking-bilbao">Bilbao</a>
                <a href="/aeropuertos">Aeropuertos</a>
                <a href="/blog/post">Blog</a>
              </div>
            </body></html>
        "#;

        let cities = cities_from_html(html);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities.get("Madrid").map(String::as_str), Some("parking-madrid"));
        assert_eq!(cities.get("Bilbao").map(String::as_str), Some("parking-bilbao"));
    }

    #[test]
    fn returns_empty_map_when_menu_is_absent() {
        let html = "<html><body><div class='other-menu'><a href='/parking-madrid'>Madrid</a></div></body></html>";
        assert!(cities_from_html(html).is_empty());
    }

    #[test]
    fn ignores_links_outside_the_menu() {
        let html = r#"
            <html><body>
              <a href="/parking-sevilla">Sevilla</a>
              <div class="cities-menu"><a href="/parking-malaga">Málaga</a></div>
            </body></html>
        "#;

        let cities = cities_from_html(html);
        assert_eq!(cities.len(), 1);
        assert!(cities.contains_key("Málaga"));
    }

    #[test]
    fn fallback_table_has_the_five_known_cities() {
        let directory = CityDirectory::fallback("connection refused");

        for city in ["Madrid", "Barcelona", "Valencia", "Sevilla", "Málaga"] {
            assert!(directory.cities.contains_key(city), "missing {}", city);
        }
        assert_eq!(
            directory.source,
            DirectorySource::Fallback {
                reason: "connection refused".to_string()
            }
        );
    }
}
