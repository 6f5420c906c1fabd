use crate::utils::error::{CartError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

// Store keys become single path components in the file-backed store, so they
// must not be able to escape the base directory.
pub fn validate_store_key(field_name: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Store key cannot be empty".to_string(),
        });
    }

    if key.contains('/') || key.contains('\\') || key == "." || key == ".." {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Store key must be a single path component".to_string(),
        });
    }

    if key.contains('\0') {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Store key contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_element_id(field_name: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Element id cannot be empty".to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Element id cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}
