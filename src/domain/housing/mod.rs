pub mod attributes;
pub mod feature_record;
pub mod prediction;

pub use attributes::{FlatType, StoreyRange, Town};
pub use feature_record::{FeatureRecord, LEASE_YEARS_RANGE, YEAR_RANGE};
pub use prediction::PredictionResult;
