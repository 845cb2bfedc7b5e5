//! One-time code issue and verification.
//!
//! Mock delivery: the challenge hands the code back to the caller, who shows it
//! instead of sending an SMS. Verification mints the verified [`User`] record.

use chrono::{DateTime, Utc};
use nova_core::User;
use rand::Rng;
use tracing::info;

use crate::{AuthError, LoginForm};

/// Digits in a code.
pub const OTP_LENGTH: usize = 6;

/// An issued code bound to a validated login form.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    code: String,
    form: LoginForm,
    pub issued_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// Validates the form and issues a fresh 6-digit code.
    pub fn issue(form: LoginForm) -> Result<Self, AuthError> {
        form.validate()?;
        let code = format!("{}", rand::rng().random_range(100_000..=999_999));
        info!(
            phone = %format!("{} {}", form.country_code, form.phone_number),
            "OTP issued"
        );
        Ok(Self {
            code,
            form,
            issued_at: Utc::now(),
        })
    }

    /// The code itself; mock delivery only.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The user-facing delivery notice, code included.
    pub fn message(&self) -> String {
        format!(
            "OTP sent to {} {}. Use: {}",
            self.form.country_code, self.form.phone_number, self.code
        )
    }

    /// Checks the entered code. Wrong length is a validation error, a mismatch
    /// a distinct one; a match mints the verified user.
    pub fn verify(&self, input: &str) -> Result<User, AuthError> {
        let input = input.trim();
        if input.len() != OTP_LENGTH || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::OtpWrongLength);
        }
        if input != self.code {
            return Err(AuthError::OtpMismatch);
        }
        Ok(User {
            name: self.form.name.trim().to_string(),
            country_code: self.form.country_code.clone(),
            phone_number: self.form.phone_number.clone(),
            verified: true,
            verified_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge() -> OtpChallenge {
        OtpChallenge::issue(LoginForm {
            name: "Ada".to_string(),
            country_code: "+44".to_string(),
            phone_number: "7700900123".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_issue_rejects_invalid_forms() {
        let result = OtpChallenge::issue(LoginForm {
            name: "A".to_string(),
            country_code: "+44".to_string(),
            phone_number: "7700900123".to_string(),
        });
        assert_eq!(result.err(), Some(AuthError::NameTooShort));
    }

    #[test]
    fn test_code_is_six_digits() {
        let c = challenge();
        assert_eq!(c.code().len(), OTP_LENGTH);
        assert!(c.code().chars().all(|ch| ch.is_ascii_digit()));
        assert!(c.message().contains(c.code()));
    }

    #[test]
    fn test_wrong_length_then_mismatch_then_success() {
        let c = challenge();
        assert_eq!(c.verify("123").err(), Some(AuthError::OtpWrongLength));
        assert_eq!(c.verify("12a456").err(), Some(AuthError::OtpWrongLength));

        let wrong = if c.code() == "123456" { "654321" } else { "123456" };
        assert_eq!(c.verify(wrong).err(), Some(AuthError::OtpMismatch));

        let user = c.verify(c.code()).unwrap();
        assert!(user.verified);
        assert_eq!(user.id(), "+447700900123");
    }
}
