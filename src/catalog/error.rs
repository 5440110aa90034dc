use crate::models::PropertyRecord;
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a loaded catalog is refused
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate property id {0}")]
    DuplicateId(u32),

    #[error("property {id} has invalid price {price}")]
    InvalidPrice { id: u32, price: f64 },
}

/// Reject catalogs the filter engine cannot treat as well-formed
pub fn validate_records(records: &[PropertyRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                id: record.id,
                price: record.price,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::mock_properties;

    #[test]
    fn mock_catalog_is_valid() {
        assert_eq!(validate_records(&mock_properties()), Ok(()));
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert_eq!(validate_records(&[]), Ok(()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = mock_properties();
        records[1].id = records[0].id;
        assert_eq!(validate_records(&records), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut records = mock_properties();
        records[2].price = -1.0;
        assert_eq!(
            validate_records(&records),
            Err(CatalogError::InvalidPrice { id: 3, price: -1.0 })
        );
    }
}
