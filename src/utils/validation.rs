use crate::utils::error::{LotError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_accepts_normal_path() {
        assert!(validate_path("data_file", "vehicles.txt").is_ok());
        assert!(validate_path("data_file", "/tmp/lot/vehicles.txt").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        let err = validate_path("data_file", "").unwrap_err();
        assert!(matches!(
            err,
            LotError::InvalidConfigValueError { ref field, .. } if field == "data_file"
        ));
    }

    #[test]
    fn test_validate_path_rejects_null_bytes() {
        assert!(validate_path("data_file", "bad\0path").is_err());
    }
}
