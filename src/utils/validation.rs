use crate::utils::error::{Result, TargetError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_dimension(field_name: &str, inches: i32) -> Result<()> {
    if inches < 1 {
        return Err(TargetError::InvalidParameter {
            field: field_name.to_string(),
            value: inches.to_string(),
            reason: "Dimension must be at least 1 inch".to_string(),
        });
    }
    Ok(())
}

pub fn validate_thickness(field_name: &str, thickness_mm: f64) -> Result<()> {
    if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
        return Err(TargetError::InvalidParameter {
            field: field_name.to_string(),
            value: thickness_mm.to_string(),
            reason: "Thickness must be a positive number of millimeters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_material(field_name: &str, material: &str) -> Result<()> {
    if material.trim().is_empty() {
        return Err(TargetError::InvalidParameter {
            field: field_name.to_string(),
            value: material.to_string(),
            reason: "Material cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, start: i32, end: i32) -> Result<()> {
    if start > end {
        return Err(TargetError::InvalidParameter {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: "Range start must not exceed range end".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("height", 3).is_ok());
        assert!(validate_dimension("height", 1).is_ok());
        assert!(validate_dimension("height", 0).is_err());
        assert!(validate_dimension("height", -2).is_err());
    }

    #[test]
    fn test_validate_thickness() {
        assert!(validate_thickness("thickness", 1.5).is_ok());
        assert!(validate_thickness("thickness", 0.0).is_err());
        assert!(validate_thickness("thickness", -0.5).is_err());
        assert!(validate_thickness("thickness", f64::NAN).is_err());
        assert!(validate_thickness("thickness", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_material() {
        assert!(validate_material("material", "soda lime").is_ok());
        assert!(validate_material("material", "").is_err());
        assert!(validate_material("material", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("groups", 1, 7).is_ok());
        assert!(validate_range("groups", 5, 5).is_ok());
        assert!(validate_range("groups", 7, 1).is_err());
    }

    #[test]
    fn test_error_carries_field_and_reason() {
        let err = validate_range("groups", 7, 1).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("groups"));
        assert!(message.contains("7..1"));
    }
}
