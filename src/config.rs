use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub site_url: String,
    pub rate_limit_delay_ms: u64,
    pub page_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub max_results: usize,
    pub fetch_timeout_seconds: u64,
    pub retry_delay_min_ms: u64,
    pub retry_delay_max_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                site_url: "https://parclick.es".to_string(),
                rate_limit_delay_ms: 1000,
                page_timeout_seconds: 10,
            },
            search: SearchConfig {
                endpoint: "https://html.duckduckgo.com/html/".to_string(),
                max_results: 3,
                fetch_timeout_seconds: 5,
                retry_delay_min_ms: 2000,
                retry_delay_max_ms: 4000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
                pretty_json: true,
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
