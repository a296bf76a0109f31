//! Validation helpers for team records loaded from the dataset.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::dao::teams::TeamColors;

/// Validates that a color is a `#` followed by exactly 6 hex digits.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#0b162a") // Ok
/// validate_hex_color("0b162a")  // Err - missing '#'
/// validate_hex_color("#0b162")  // Err - too short
/// ```
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let Some(digits) = color.strip_prefix('#') else {
        let mut err = ValidationError::new("hex_color_prefix");
        err.message = Some("Color must start with '#'".into());
        return Err(err);
    };

    if digits.len() != 6 {
        let mut err = ValidationError::new("hex_color_length");
        err.message = Some(
            format!(
                "Color must be exactly 6 hex digits (got {})",
                digits.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("hex_color_format");
        err.message = Some("Color must contain only hexadecimal characters".into());
        return Err(err);
    }

    Ok(())
}

impl Validate for TeamColors {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
        ] {
            if let Err(e) = validate_hex_color(value) {
                errors.add(field, e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color_valid() {
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("#E31837").is_ok());
        assert!(validate_hex_color("#ffb81c").is_ok());
    }

    #[test]
    fn test_validate_hex_color_invalid_length() {
        assert!(validate_hex_color("#fff").is_err()); // shorthand
        assert!(validate_hex_color("#0b162").is_err()); // too short
        assert!(validate_hex_color("#0b162a1").is_err()); // too long
        assert!(validate_hex_color("#").is_err()); // empty payload
    }

    #[test]
    fn test_validate_hex_color_invalid_format() {
        assert!(validate_hex_color("0b162a").is_err()); // missing '#'
        assert!(validate_hex_color("#0b162g").is_err()); // invalid hex
        assert!(validate_hex_color("#0b 62a").is_err()); // space
    }

    #[test]
    fn test_team_colors_validate_reports_every_field() {
        let colors = TeamColors {
            primary: "#0b162a".into(),
            secondary: "bad".into(),
            accent: "#nothex".into(),
        };
        let errors = colors.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("secondary"));
        assert!(errors.field_errors().contains_key("accent"));
        assert!(!errors.field_errors().contains_key("primary"));
    }
}
