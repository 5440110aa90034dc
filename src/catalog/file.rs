use crate::catalog::error::validate_records;
use crate::catalog::traits::CatalogProvider;
use crate::models::{Catalog, PropertyRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Catalog read from a JSON array of listings on disk
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn load(&self) -> Result<Catalog> {
        debug!("Reading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let records: Vec<PropertyRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        validate_records(&records)
            .with_context(|| format!("Invalid catalog in {}", self.path.display()))?;

        info!("💾 Loaded {} properties from {}", records.len(), self.path.display());
        Ok(Catalog::new(self.source_name(), records))
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
