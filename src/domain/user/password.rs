//! Account credential.
//!
//! SECURITY: passwords are stored and compared as plaintext, exactly as the
//! desktop client has always done. The wrapper keeps the value out of logs
//! and compares in constant time, but it is not hashing. Salted hashing is
//! required before this store is reachable by anything other than the local
//! desktop client.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use subtle::ConstantTimeEq;

/// Plaintext password held behind `secrecy` so it never reaches `Debug` output.
pub struct Password(SecretString);

impl Password {
    /// Wraps a plaintext password.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::new(raw.into()))
    }

    /// Exact, case-sensitive comparison against a login attempt.
    pub fn matches(&self, candidate: &str) -> bool {
        self.expose()
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }

    /// Returns the plaintext, for persistence only.
    pub fn expose(&self) -> &str {
        self.0.expose_secret().as_str()
    }
}

impl Clone for Password {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_owned())
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.expose())
    }
}

impl Eq for Password {}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl From<&str> for Password {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
