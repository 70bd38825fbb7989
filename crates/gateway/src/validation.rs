//! Input validation for request bodies and query strings.

use regex::Regex;

use crate::error::GatewayError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_name(name: &str) -> Result<(), GatewayError> {
    if name.trim().is_empty() {
        return Err(GatewayError::Validation("Name is required".to_string()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), GatewayError> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|e| GatewayError::Internal(format!("email pattern: {e}")))?;

    if !email_regex.is_match(email) {
        return Err(GatewayError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), GatewayError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(GatewayError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), GatewayError> {
    if title.trim().is_empty() {
        return Err(GatewayError::Validation("Title is required".to_string()));
    }
    Ok(())
}

pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<(), GatewayError> {
    if !latitude.is_finite() || latitude.abs() > 90.0 {
        return Err(GatewayError::Validation(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }
    if !longitude.is_finite() || longitude.abs() > 180.0 {
        return Err(GatewayError::Validation(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_page(page: u32) -> Result<(), GatewayError> {
    if page < 1 {
        return Err(GatewayError::Validation("Page starts at 1".to_string()));
    }
    Ok(())
}
