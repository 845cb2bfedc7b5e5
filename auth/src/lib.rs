//! # auth
//!
//! Mock phone/OTP authentication: login-form validation, a 6-digit one-time
//! code issued and verified locally (there is no delivery channel, so the caller
//! shows the code), and the country dial-code directory client. Verification
//! produces the [`nova_core::User`] record the rest of the system keys its
//! state on.

pub mod countries;
pub mod error;
pub mod form;
pub mod otp;

pub use countries::{fetch_countries, Country, DIRECTORY_URL};
pub use error::AuthError;
pub use form::LoginForm;
pub use otp::OtpChallenge;
