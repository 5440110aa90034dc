use crate::models::Catalog;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all catalog sources
/// The filter engine only ever sees the loaded records, never the provider
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load the full catalog
    async fn load(&self) -> Result<Catalog>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
