pub mod criteria;
pub mod engine;
pub mod form;
pub mod suggest;

pub use criteria::FilterCriteria;
pub use engine::filter_properties;
pub use form::FilterForm;
pub use suggest::{suggest_locations, LocationInput};
