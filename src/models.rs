use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    crawler::ParkingCrawler,
    directory::{CityCatalog, CityEnumerator},
    export::ParkingExporter,
    phone::PhoneResolver,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One row of the final table: facility name plus whatever ended up in
/// the phone column (digits, "No encontrado" or "No buscado").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingRecord {
    pub name: String,
    pub phone: String,
}

pub struct CliApp {
    pub config: Config,
    pub catalog: CityCatalog,
    pub enumerator: CityEnumerator,
    pub crawler: ParkingCrawler,
    pub resolver: PhoneResolver,
    pub exporter: ParkingExporter,
}
