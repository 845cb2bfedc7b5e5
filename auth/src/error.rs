use thiserror::Error;

/// Validation failures at the login/OTP boundary. Messages are user-facing and
/// shown inline; none of these propagate further.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Name is required")]
    NameTooShort,

    #[error("Please select a country")]
    MissingCountry,

    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,

    #[error("Phone number must be at most 15 digits")]
    PhoneTooLong,

    #[error("Phone number must contain only digits")]
    PhoneNotNumeric,

    #[error("OTP must be exactly 6 digits")]
    OtpWrongLength,

    #[error("Invalid OTP. Please try again.")]
    OtpMismatch,
}
