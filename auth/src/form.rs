//! Login form data and validation.

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// What the login form collects before an OTP is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub name: String,
    /// Dial code including the leading '+', e.g. "+44".
    pub country_code: String,
    pub phone_number: String,
}

impl LoginForm {
    /// Checks all fields; the first violation wins. Name needs at least two
    /// characters, the country must be selected, and the phone number must be
    /// 10–15 digits with nothing else.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().chars().count() < 2 {
            return Err(AuthError::NameTooShort);
        }
        if self.country_code.is_empty() {
            return Err(AuthError::MissingCountry);
        }
        if !self.phone_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::PhoneNotNumeric);
        }
        if self.phone_number.len() < 10 {
            return Err(AuthError::PhoneTooShort);
        }
        if self.phone_number.len() > 15 {
            return Err(AuthError::PhoneTooLong);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, country: &str, phone: &str) -> LoginForm {
        LoginForm {
            name: name.to_string(),
            country_code: country.to_string(),
            phone_number: phone.to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form("Ada", "+44", "7700900123").validate().is_ok());
    }

    #[test]
    fn test_each_field_is_checked() {
        assert_eq!(
            form("A", "+44", "7700900123").validate(),
            Err(AuthError::NameTooShort)
        );
        assert_eq!(
            form("Ada", "", "7700900123").validate(),
            Err(AuthError::MissingCountry)
        );
        assert_eq!(
            form("Ada", "+44", "770090012").validate(),
            Err(AuthError::PhoneTooShort)
        );
        assert_eq!(
            form("Ada", "+44", "7700900123456789").validate(),
            Err(AuthError::PhoneTooLong)
        );
        assert_eq!(
            form("Ada", "+44", "77009x0123").validate(),
            Err(AuthError::PhoneNotNumeric)
        );
    }
}
