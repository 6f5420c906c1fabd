use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Display element not found: {element_id}")]
    MissingElementError { element_id: String },

    #[error("No line item with product id {product_id}")]
    ItemNotFoundError { product_id: i64 },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, CartError>;
