use crate::domain::housing::FeatureRecord;

/// Ordered list of model input columns.
/// This order MUST match the column order used when the model was trained.
/// Any change here is a breaking change for published model artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "year",
    "lease_years_left",
    "flat_type",
    "town",
    "storey_mid",
];

/// Encodes a record as the f64 row smartcore models expect.
/// Categorical fields are encoded by their ordinal in the fixed enumerations.
pub fn features_to_f64_vector(record: &FeatureRecord) -> Vec<f64> {
    vec![
        record.year() as f64,
        record.lease_years_left() as f64,
        record.flat_type().ordinal() as f64,
        record.town().ordinal() as f64,
        record.storey_range().midpoint(),
    ]
}

/// Same encoding narrowed to f32 for ONNX inference.
pub fn features_to_vector(record: &FeatureRecord) -> Vec<f32> {
    features_to_f64_vector(record)
        .into_iter()
        .map(|v| v as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_length() {
        let record = FeatureRecord::default();
        assert_eq!(features_to_vector(&record).len(), FEATURE_NAMES.len());
        assert_eq!(features_to_f64_vector(&record).len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_consistency() {
        let record = FeatureRecord::parse(2031, 72, "5 room", "punggol", "10 TO 12").unwrap();

        let vec = features_to_f64_vector(&record);
        // year is index 0
        assert_eq!(vec[0], 2031.0);
        assert_eq!(vec[1], 72.0);
        assert_eq!(vec[2], 3.0);
        assert_eq!(vec[3], 17.0);
        // storey midpoint is last
        assert_eq!(vec[4], 11.0);
    }
}
