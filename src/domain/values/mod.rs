pub mod criteria;
pub mod profile;
pub mod sort_spec;
pub mod thresholds;
pub mod tier;
pub mod weights;
