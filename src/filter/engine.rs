use crate::filter::criteria::FilterCriteria;
use crate::models::PropertyRecord;
use tracing::debug;

/// Check a single listing against every present criterion (AND semantics)
pub fn matches(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    if let Some(min) = criteria.min_price {
        if record.price < min {
            return false;
        }
    }
    if let Some(max) = criteria.max_price {
        if record.price > max {
            return false;
        }
    }
    if let Some(min) = criteria.min_bedrooms {
        if record.bedrooms < min {
            return false;
        }
    }
    if let Some(min) = criteria.min_bathrooms {
        if record.bathrooms < min {
            return false;
        }
    }
    if let Some(wants_garage) = criteria.has_garage {
        if record.has_garage() != wants_garage {
            return false;
        }
    }
    if let Some(query) = criteria.active_location() {
        if !record
            .location
            .to_lowercase()
            .contains(&query.to_lowercase())
        {
            return false;
        }
    }
    true
}

/// Stable filter over the catalog
///
/// Surviving listings keep their catalog order. An empty result is a valid
/// outcome, not an error.
pub fn filter_properties<'a>(
    catalog: &'a [PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyRecord> {
    let filtered: Vec<&PropertyRecord> = catalog
        .iter()
        .filter(|record| matches(record, criteria))
        .collect();

    debug!(
        "Filter {:?} kept {} of {} properties",
        criteria,
        filtered.len(),
        catalog.len()
    );

    filtered
}
