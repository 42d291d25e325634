//! Validation utilities for API inputs

/// Validate a free-text location query (non-empty after trimming)
pub fn validate_location(location: &str) -> Result<&str, &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location is required");
    }
    Ok(trimmed)
}

/// Validate a crop name (non-empty after trimming)
pub fn validate_crop_name(crop: &str) -> Result<&str, &'static str> {
    let trimmed = crop.trim();
    if trimmed.is_empty() {
        return Err("Crop name is required");
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_location() {
        assert!(validate_location("   ").is_err());
        assert!(validate_location("").is_err());
    }

    #[test]
    fn trims_valid_location() {
        assert_eq!(validate_location("  Ahmedabad "), Ok("Ahmedabad"));
    }

    #[test]
    fn rejects_blank_crop() {
        assert!(validate_crop_name("\t").is_err());
        assert_eq!(validate_crop_name("cotton"), Ok("cotton"));
    }
}
