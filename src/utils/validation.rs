use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Extensions are matched against the end of a file name, without the dot.
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;

    if extension.starts_with('.') || extension.contains(['/', '\\']) {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be given without a leading dot or path separators"
                .to_string(),
        });
    }
    Ok(())
}

/// Returns the delimiter as the single byte the CSV reader expects.
pub fn validate_delimiter(field_name: &str, delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'\n' && *byte != b'"' => Ok(*byte),
        _ => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.to_string(),
            reason: "Delimiter must be a single ASCII character other than newline or quote"
                .to_string(),
        }),
    }
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.iter().all(|v| v.is_empty()) {
        return Err(CatalogError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one non-empty value is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("directory", "price").is_ok());
        assert!(validate_path("directory", "").is_err());
        assert!(validate_path("directory", "pri\0ce").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("extension", "csv").is_ok());
        assert!(validate_extension("extension", ".csv").is_err());
        assert!(validate_extension("extension", "  ").is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("delimiter", ",").unwrap(), b',');
        assert_eq!(validate_delimiter("delimiter", ";").unwrap(), b';');
        assert!(validate_delimiter("delimiter", "").is_err());
        assert!(validate_delimiter("delimiter", ",,").is_err());
        assert!(validate_delimiter("delimiter", "\"").is_err());
        assert!(validate_delimiter("delimiter", "ж").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("columns.price", &["цена".to_string()]).is_ok());
        assert!(validate_non_empty_list("columns.price", &[]).is_err());
        assert!(validate_non_empty_list("columns.price", &[String::new()]).is_err());
    }
}
