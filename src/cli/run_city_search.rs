// src/cli/run_city_search.rs
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::directory::DirectorySource;
use crate::models::{CliApp, ParkingRecord, Result};

impl CliApp {
    /// One full run: pick a city, crawl its listings, optionally look up
    /// a phone per listing, show the table and offer a CSV download.
    pub async fn run_city_search(&mut self) -> Result<()> {
        println!("\n🅿️  Búsqueda de parkings");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let directory = self.catalog.get_or_discover(&self.enumerator).await;
        if let DirectorySource::Fallback { reason } = &directory.source {
            println!("⚠️  Usando la lista de ciudades de reserva ({})", reason);
        }

        let city_names: Vec<String> = directory.cities.keys().cloned().collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Selecciona una ciudad")
            .items(&city_names)
            .default(0)
            .interact()?;

        let city_name = city_names[selection].clone();
        let path_segment = directory.cities[&city_name].clone();

        let search_phones = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("¿Buscar números de teléfono? (puede tardar más)")
            .default(true)
            .interact()?;

        println!("\n🔍 Buscando parkings en {}...", city_name);

        let outcome = self
            .crawler
            .crawl(
                &path_segment,
                &city_name,
                Some(Box::new(|page, total, _url| {
                    println!("  Extrayendo página {}/{}", page, total);
                })),
            )
            .await;

        if outcome.is_empty() {
            if let Some(reason) = &outcome.failure {
                println!("❌ Error buscando parkings: {}", reason);
            } else {
                println!("❌ No se encontraron parkings en esta ciudad");
            }
            return Ok(());
        }

        println!(
            "✅ Se encontraron {} parkings en {}",
            outcome.parkings.len(),
            city_name
        );

        let mut records = Vec::new();

        if search_phones {
            let total = outcome.parkings.len();
            for (idx, parking) in outcome.parkings.iter().enumerate() {
                println!("[{}/{}] 📞 Buscando teléfono para: {}", idx + 1, total, parking);
                let phone = self.resolver.find_phone(parking, &city_name).await;
                records.push(ParkingRecord {
                    name: parking.clone(),
                    phone: phone.to_string(),
                });
            }
        } else {
            records = outcome
                .parkings
                .iter()
                .map(|parking| ParkingRecord {
                    name: parking.clone(),
                    phone: "No buscado".to_string(),
                })
                .collect();
        }

        self.display_results(&records);

        if Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("¿Descargar CSV?")
            .default(true)
            .interact()?
        {
            let csv_path = self.exporter.csv_filename(&city_name);
            self.exporter.export_to_csv(&records, &csv_path).await?;

            let json_path = self.exporter.json_filename(&city_name);
            self.exporter.export_to_json(&records, &json_path).await?;

            println!("✅ Resultados exportados:");
            println!("  📄 {}", csv_path);
            println!("  📄 {}", json_path);
        }

        Ok(())
    }

    fn display_results(&self, records: &[ParkingRecord]) {
        println!("\n📋 Resultados:");

        let width = records
            .iter()
            .map(|record| record.name.chars().count())
            .max()
            .unwrap_or(20);

        for record in records {
            println!("  {:<width$}  {}", record.name, record.phone, width = width);
        }
    }
}
