use serde::{Deserialize, Serialize};

/// Constraints currently selected by the user
///
/// Every field is independently optional. An absent field never excludes a
/// listing on that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Keep listings with price >= this value (BRL)
    pub min_price: Option<f64>,
    /// Keep listings with price <= this value (BRL)
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    /// `true` keeps listings with a garage, `false` keeps listings without one
    pub has_garage: Option<bool>,
    /// Case-insensitive substring of the listing location
    pub location_query: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_price(mut self, value: f64) -> Self {
        self.min_price = Some(value);
        self
    }

    pub fn max_price(mut self, value: f64) -> Self {
        self.max_price = Some(value);
        self
    }

    pub fn min_bedrooms(mut self, value: u32) -> Self {
        self.min_bedrooms = Some(value);
        self
    }

    pub fn min_bathrooms(mut self, value: u32) -> Self {
        self.min_bathrooms = Some(value);
        self
    }

    pub fn has_garage(mut self, value: bool) -> Self {
        self.has_garage = Some(value);
        self
    }

    pub fn location(mut self, query: impl Into<String>) -> Self {
        self.location_query = Some(query.into());
        self
    }

    /// Location query with empty strings treated as absent
    pub fn active_location(&self) -> Option<&str> {
        self.location_query.as_deref().filter(|q| !q.is_empty())
    }

    /// True when no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.min_bathrooms.is_none()
            && self.has_garage.is_none()
            && self.active_location().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained() {
        assert!(FilterCriteria::default().is_unconstrained());
    }

    #[test]
    fn empty_location_counts_as_absent() {
        let criteria = FilterCriteria::new().location("");
        assert!(criteria.active_location().is_none());
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn builder_sets_fields() {
        let criteria = FilterCriteria::new()
            .min_price(1_000.0)
            .max_price(2_000.0)
            .min_bedrooms(2)
            .min_bathrooms(1)
            .has_garage(false)
            .location("rio");

        assert_eq!(criteria.min_price, Some(1_000.0));
        assert_eq!(criteria.max_price, Some(2_000.0));
        assert_eq!(criteria.min_bedrooms, Some(2));
        assert_eq!(criteria.min_bathrooms, Some(1));
        assert_eq!(criteria.has_garage, Some(false));
        assert_eq!(criteria.active_location(), Some("rio"));
        assert!(!criteria.is_unconstrained());
    }
}
