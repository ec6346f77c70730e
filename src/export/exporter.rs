// src/export/exporter.rs
use crate::models::{ParkingRecord, Result};
use chrono::Utc;

pub struct ParkingExporter {
    directory: String,
    pretty_json: bool,
}

impl ParkingExporter {
    pub fn new(directory: &str, pretty_json: bool) -> Self {
        Self {
            directory: directory.trim_end_matches('/').to_string(),
            pretty_json,
        }
    }

    pub async fn export_to_csv(&self, records: &[ParkingRecord], filename: &str) -> Result<()> {
        if let Some(parent) = std::path::Path::new(filename).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(filename, csv_content(records)).await?;
        Ok(())
    }

    pub async fn export_to_json(&self, records: &[ParkingRecord], filename: &str) -> Result<()> {
        let json = if self.pretty_json {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };

        tokio::fs::write(filename, json).await?;
        Ok(())
    }

    pub fn csv_filename(&self, city: &str) -> String {
        format!(
            "{}/parkings_{}_{}.csv",
            self.directory,
            city.to_lowercase(),
            Utc::now().format("%Y%m%d_%H%M%S")
        )
    }

    pub fn json_filename(&self, city: &str) -> String {
        format!(
            "{}/parkings_{}_{}.json",
            self.directory,
            city.to_lowercase(),
            Utc::now().format("%Y%m%d_%H%M%S")
        )
    }
}

/// Two-column CSV with the fixed Spanish header. Names are quoted since
/// facility names routinely carry commas.
fn csv_content(records: &[ParkingRecord]) -> String {
    let mut out = String::from("Nombre del Parking,Teléfono\n");

    for record in records {
        out.push_str(&format!(
            "\"{}\",{}\n",
            record.name.replace('"', "\"\""),
            record.phone
        ));
    }

    out
}
