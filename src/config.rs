use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::AppError;

pub const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// JSON catalog to serve instead of the built-in sample data.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup("CAMPUS_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::BadRequest(format!("CAMPUS_ADDR is not a socket address: {}", raw))
            })?,
            None => SocketAddr::from(DEFAULT_ADDR),
        };

        let catalog_path = lookup("CAMPUS_CATALOG")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, catalog_path })
    }

    pub fn load_catalog(&self) -> Result<Catalog, AppError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_json_file(path)?;
                info!("loaded catalog from {}", path.display());
                Ok(catalog)
            }
            None => {
                info!("CAMPUS_CATALOG not set, serving sample catalog");
                Ok(Catalog::sample())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, SocketAddr::from(DEFAULT_ADDR));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn reads_addr_and_catalog_path() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CAMPUS_ADDR", "0.0.0.0:8080"),
            ("CAMPUS_CATALOG", "data/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
    }

    #[test]
    fn blank_catalog_path_means_sample() {
        let config = AppConfig::from_lookup(lookup_from(&[("CAMPUS_CATALOG", "  ")])).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.load_catalog().unwrap(), Catalog::sample());
    }

    #[test]
    fn rejects_bad_addr() {
        let err = AppConfig::from_lookup(lookup_from(&[("CAMPUS_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn missing_catalog_file_is_io_error() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "CAMPUS_CATALOG",
            "/definitely/not/here/catalog.json",
        )]))
        .unwrap();
        assert!(matches!(config.load_catalog(), Err(AppError::Io(_))));
    }
}
