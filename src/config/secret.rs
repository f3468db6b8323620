//! The CSRF token as a `secrecy` secret
//!
//! The anti-forgery token is a session credential. Wrapping it keeps it out
//! of `Debug` output and zeroes it on drop; reading it takes an explicit
//! `expose_secret()`.
//!
//! ```rust
//! use clinic_adapter::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("d41d8cd98f00".to_string());
//! assert_eq!(token.expose_secret().as_ref(), "d41d8cd98f00");
//! assert!(!format!("{token:?}").contains("d41d8cd98f00"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Token text; only reachable through [`SecretString`]
#[derive(Clone, Debug, Zeroize, Serialize, Deserialize)]
#[serde(transparent)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

pub type SecretString = Secret<SecretValue>;

#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
