pub mod error;
pub mod file;
pub mod mock;
pub mod remote;
pub mod traits;

pub use error::{validate_records, CatalogError};
pub use file::JsonFileCatalog;
pub use mock::{MockCatalog, MOCK_LOCATIONS};
pub use remote::RemoteCatalog;
pub use traits::CatalogProvider;

use anyhow::Result;
use std::time::Duration;

/// Pick a provider from a source string: "mock", an http(s) URL, or a file path
pub fn provider_for(source: &str, timeout: Duration) -> Result<Box<dyn CatalogProvider>> {
    let source = source.trim();
    if source.is_empty() || source.eq_ignore_ascii_case("mock") {
        Ok(Box::new(MockCatalog::new()))
    } else if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Box::new(RemoteCatalog::new(source, timeout)?))
    } else {
        Ok(Box::new(JsonFileCatalog::new(source)))
    }
}
