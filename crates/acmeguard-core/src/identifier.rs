//! Tenant identifier parsing
//!
//! Tenant identifiers are UUIDs used as case-sensitive storage keys, so the
//! parser rejects anything that is not already in canonical lowercase
//! hyphenated form. It never re-cases its input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use uuid::fmt::Hyphenated;

use crate::error::{Error, FormatError, Result};

/// Parse a tenant identifier
///
/// # Errors
///
/// - [`FormatError::NotLowercase`] if lowercasing would change the input
/// - [`FormatError::Parse`] with the parser's reason if it is not a UUID
/// - [`FormatError::NotHyphenated`] for the simple, braced or URN forms
pub fn parse_identifier(value: &str) -> Result<Uuid> {
    if value.to_lowercase() != value {
        return Err(FormatError::NotLowercase.into());
    }

    let id = Uuid::try_parse(value).map_err(FormatError::from)?;

    if value.len() != Hyphenated::LENGTH {
        return Err(FormatError::NotHyphenated.into());
    }

    Ok(id)
}

/// A validated tenant identifier
///
/// Serializes as its canonical string and deserializes through
/// [`parse_identifier`], so uppercase input is rejected on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(Uuid);

impl TenantId {
    /// The underlying 128-bit value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for TenantId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_identifier(s).map(Self)
    }
}

impl TryFrom<String> for TenantId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TenantId> for String {
    fn from(id: TenantId) -> Self {
        id.to_string()
    }
}

impl From<TenantId> for Uuid {
    fn from(id: TenantId) -> Self {
        id.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}
