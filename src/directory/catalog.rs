// src/directory/catalog.rs
use super::enumerator::{CityDirectory, CityEnumerator};

/// Session-scoped cache of the city directory. Discovery runs on first
/// use and the result is reused until invalidated.
#[derive(Default)]
pub struct CityCatalog {
    cached: Option<CityDirectory>,
}

impl CityCatalog {
    pub fn new() -> Self {
        Self { cached: None }
    }

    pub async fn get_or_discover(&mut self, enumerator: &CityEnumerator) -> &CityDirectory {
        if self.cached.is_none() {
            self.cached = Some(enumerator.discover_cities().await);
        }
        self.cached.as_ref().expect("directory populated above")
    }

    pub fn cached(&self) -> Option<&CityDirectory> {
        self.cached.as_ref()
    }

    /// Drops the cached directory so the next lookup re-discovers.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
