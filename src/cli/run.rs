use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(mut self) -> Result<()> {
        println!("\n🅿️  Parking Phone Finder - España");
        println!("═══════════════════════════════════════");
        println!("Encuentra los teléfonos de los parkings disponibles en parclick.es");

        loop {
            let actions = vec![
                MenuAction::SearchParkings,
                MenuAction::RefreshCities,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelecciona una acción")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::SearchParkings => {
                    if let Err(e) = self.run_city_search().await {
                        error!("Parking search failed: {}", e);
                    }
                }
                MenuAction::RefreshCities => {
                    self.catalog.invalidate();
                    let directory = self.catalog.get_or_discover(&self.enumerator).await;
                    println!("✅ {} ciudades disponibles", directory.cities.len());
                }
                MenuAction::Exit => {
                    println!("\n👋 ¡Hasta luego!");
                    break;
                }
            }
        }

        Ok(())
    }
}
