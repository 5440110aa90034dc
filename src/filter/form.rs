use crate::filter::criteria::FilterCriteria;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sentinel used by the select fields for "no preference"
pub const ANY: &str = "any";

/// Raw values as typed into the filter panel
///
/// Nothing here is trusted. [`FilterForm::to_criteria`] turns unparseable
/// input into absent criteria so the engine only ever sees typed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterForm {
    pub min_price: String,
    pub max_price: String,
    /// "any" or a minimum count
    pub bedrooms: String,
    /// "any" or a minimum count
    pub bathrooms: String,
    /// "any", "yes" or "no"
    pub garage: String,
    pub location: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            min_price: String::new(),
            max_price: String::new(),
            bedrooms: ANY.to_string(),
            bathrooms: ANY.to_string(),
            garage: ANY.to_string(),
            location: String::new(),
        }
    }
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise the raw fields into criteria
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_price: parse_price("min_price", &self.min_price),
            max_price: parse_price("max_price", &self.max_price),
            min_bedrooms: parse_count("bedrooms", &self.bedrooms),
            min_bathrooms: parse_count("bathrooms", &self.bathrooms),
            has_garage: parse_garage(&self.garage),
            location_query: Some(self.location.trim())
                .filter(|q| !q.is_empty())
                .map(str::to_string),
        }
    }

    /// Reset every field and return the identity criteria
    pub fn clear(&mut self) -> FilterCriteria {
        *self = Self::default();
        self.to_criteria()
    }
}

fn parse_price(field: &str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("Ignoring invalid {} input {:?}", field, raw);
            None
        }
    }
}

fn parse_count(field: &str, raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ANY) {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {} input {:?}", field, raw);
            None
        }
    }
}

fn parse_garage(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "sim" | "true" => Some(true),
        "no" | "não" | "nao" | "false" => Some(false),
        "" | ANY => None,
        other => {
            warn!("Ignoring invalid garage input {:?}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_unconstrained() {
        assert!(FilterForm::default().to_criteria().is_unconstrained());
    }

    #[test]
    fn parses_well_formed_fields() {
        let form = FilterForm {
            min_price: "1800000".to_string(),
            max_price: " 2500000.50 ".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            garage: "yes".to_string(),
            location: "Rio".to_string(),
        };

        assert_eq!(
            form.to_criteria(),
            FilterCriteria::new()
                .min_price(1_800_000.0)
                .max_price(2_500_000.5)
                .min_bedrooms(3)
                .min_bathrooms(2)
                .has_garage(true)
                .location("Rio")
        );
    }

    #[test]
    fn invalid_numbers_become_absent() {
        let form = FilterForm {
            min_price: "abc".to_string(),
            max_price: "NaN".to_string(),
            bedrooms: "three".to_string(),
            bathrooms: "-1".to_string(),
            garage: "maybe".to_string(),
            location: "   ".to_string(),
        };

        assert!(form.to_criteria().is_unconstrained());
    }

    #[test]
    fn infinite_price_is_rejected() {
        let form = FilterForm {
            max_price: "inf".to_string(),
            ..FilterForm::default()
        };
        assert_eq!(form.to_criteria().max_price, None);
    }

    #[test]
    fn garage_no_means_without_garage() {
        let form = FilterForm {
            garage: "no".to_string(),
            ..FilterForm::default()
        };
        assert_eq!(form.to_criteria().has_garage, Some(false));
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = FilterForm {
            min_price: "10".to_string(),
            bedrooms: "2".to_string(),
            garage: "yes".to_string(),
            location: "Leblon".to_string(),
            ..FilterForm::default()
        };

        let criteria = form.clear();
        assert_eq!(form, FilterForm::default());
        assert_eq!(criteria, FilterCriteria::default());
    }
}
