use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direct contact for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// Core property listing data model
///
/// Only `price`, `bedrooms`, `bathrooms`, `garage_spaces` and `location` take
/// part in filtering. The rest is display data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: u32,
    pub title: String,
    /// "neighborhood, city" label
    pub location: String,
    /// Price in BRL
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// 0 means no garage
    pub garage_spaces: u32,
    /// Display label such as "1.800 m²"
    pub area: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub address: String,
    #[serde(default)]
    pub map_link: Option<String>,
    #[serde(default)]
    pub panorama: Option<String>,
    pub contact: Contact,
}

impl PropertyRecord {
    pub fn has_garage(&self) -> bool {
        self.garage_spaces > 0
    }
}

/// A fully loaded, read-only catalog of listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub source: String,
    pub records: Vec<PropertyRecord>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(source: impl Into<String>, records: Vec<PropertyRecord>) -> Self {
        Self {
            source: source.into(),
            records,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
