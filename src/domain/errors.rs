use thiserror::Error;

/// Errors raised while building a feature record from user-supplied values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unknown {field}: '{value}'")]
    UnknownLabel { field: &'static str, value: String },
}

/// Errors raised while loading the resources a session depends on.
/// Every variant is fatal for the session.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Failed to fetch model artifact {location}: {reason}")]
    ArtifactFetch { location: String, reason: String },

    #[error("Failed to decode model artifact {name}: {reason}")]
    ArtifactDecode { name: String, reason: String },

    #[error("Unsupported model artifact format: {name}")]
    UnsupportedFormat { name: String },

    #[error("Failed to read CPI forecast {path}: {source}")]
    CpiRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CPI forecast at row {row}: {reason}")]
    CpiParse { row: usize, reason: String },

    #[error("Invalid CPI forecast: {reason}")]
    CpiInvalid { reason: String },
}

/// Errors raised by a price model backend during inference
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Feature encoding failed: {0}")]
    Encoding(String),

    #[error("{backend} inference failed: {reason}")]
    Inference { backend: String, reason: String },

    #[error("{backend} returned no prediction")]
    EmptyOutput { backend: String },
}
