use crate::catalog::error::validate_records;
use crate::catalog::traits::CatalogProvider;
use crate::models::{Catalog, PropertyRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Catalog fetched as a JSON array from an HTTP endpoint
pub struct RemoteCatalog {
    client: Client,
    url: String,
}

impl RemoteCatalog {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("imovel-showcase/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogProvider for RemoteCatalog {
    async fn load(&self) -> Result<Catalog> {
        debug!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch catalog")?;

        if !response.status().is_success() {
            warn!("Catalog endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch catalog: {}", response.status());
        }

        let records: Vec<PropertyRecord> = response
            .json()
            .await
            .context("Failed to decode catalog response")?;

        validate_records(&records).context("Invalid remote catalog")?;

        info!("Fetched {} properties from {}", records.len(), self.url);
        Ok(Catalog::new(self.source_name(), records))
    }

    fn source_name(&self) -> &'static str {
        "Remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_configured_url() {
        let catalog = RemoteCatalog::new("http://localhost:9/catalog.json", Duration::from_secs(1)).unwrap();
        assert_eq!(catalog.url(), "http://localhost:9/catalog.json");
        assert_eq!(catalog.source_name(), "Remote");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let catalog = RemoteCatalog::new("http://127.0.0.1:9/catalog.json", Duration::from_secs(1)).unwrap();
        assert!(catalog.load().await.is_err());
    }
}
