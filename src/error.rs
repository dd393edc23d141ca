use thiserror::Error;

pub type SignatureResult<T> = Result<T, SignatureError>;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Signature must have a non-empty full name")]
    MissingFullName,

    #[error("Invalid color value '{value}' for '{property}': must be a hex color like #2563eb")]
    InvalidColor { property: String, value: String },

    #[error("Invalid image scale {value}: must be a finite number greater than 0")]
    InvalidImageScale { value: f64 },

    #[error("Value out of range for '{property}': {value}. Expected range: {range}")]
    ValueOutOfRange {
        property: String,
        value: String,
        range: String,
    },

    #[error("Duplicate field '{field}' in field order")]
    DuplicateField { field: String },

    #[error("Field '{field}' is required and must stay in the field order with required=true")]
    MissingRequiredField { field: String },

    #[error("Field '{field}' cannot be required: only fullName is")]
    UnexpectedRequiredField { field: String },

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
