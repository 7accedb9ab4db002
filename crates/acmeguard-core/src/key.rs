//! API key shape checks

use std::fmt;
use std::str::FromStr;

use crate::charset::{KEY_CHARSET, sanitize_string};
use crate::error::{Error, Result};

/// Length of an API key, in characters
pub const KEY_LENGTH: usize = 40;

/// Check that `key` is exactly [`KEY_LENGTH`] characters from the key charset
///
/// Both the raw key and its sanitized copy must be 40 characters long; a
/// single disallowed character shortens the sanitized copy.
pub fn is_valid_key(key: &str) -> bool {
    key.chars().count() == KEY_LENGTH && sanitize_string(key).chars().count() == KEY_LENGTH
}

/// An API key that passed [`is_valid_key`]
///
/// The key is a bearer credential: its `Debug` output is redacted, and it
/// has no `==`. Compare it only through the credential verifier.
///
/// ```compile_fail
/// use acmeguard_core::ApiKey;
///
/// let key: ApiKey = "PUrNTjU24JYNEOCeS2JcjaJGv1sinT80oV9--dpX".parse().unwrap();
/// let _ = key == key.clone();
/// ```
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// The raw key, for handing to the credential verifier
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ApiKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if KEY_CHARSET.conforms(&value, |n| n == KEY_LENGTH) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidKey)
        }
    }
}

impl FromStr for ApiKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<REDACTED>").finish()
    }
}
