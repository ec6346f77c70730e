use tracing::info;

use crate::config::Config;
use crate::crawler::{CrawlConfig, ParkingCrawler};
use crate::directory::{CityCatalog, CityEnumerator};
use crate::export::ParkingExporter;
use crate::models::{CliApp, Result};
use crate::phone::{HtmlSearchProvider, PhoneResolver};

#[derive(Debug, Clone)]
pub enum MenuAction {
    SearchParkings,
    RefreshCities,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::SearchParkings => write!(f, "🅿️  Buscar parkings por ciudad"),
            MenuAction::RefreshCities => write!(f, "🔄 Refrescar la lista de ciudades"),
            MenuAction::Exit => write!(f, "🚪 Salir"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let enumerator = CityEnumerator::new(&config.scraping.site_url);

        let crawler = ParkingCrawler::new(CrawlConfig {
            site_url: config.scraping.site_url.clone(),
            rate_limit_delay_ms: config.scraping.rate_limit_delay_ms,
            page_timeout_seconds: config.scraping.page_timeout_seconds,
        });

        let provider = HtmlSearchProvider::new(&config.search.endpoint);
        let resolver = PhoneResolver::new(config.search.clone(), Box::new(provider));

        let exporter = ParkingExporter::new(&config.output.directory, config.output.pretty_json);

        info!("Initialized parking finder against {}", config.scraping.site_url);

        Ok(Self {
            config,
            catalog: CityCatalog::new(),
            enumerator,
            crawler,
            resolver,
            exporter,
        })
    }
}
