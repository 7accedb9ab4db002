// # CIDR Allow Lists
//
// Tenants may restrict updates to a list of source ranges. Lists are stored
// as the strings the tenant supplied and filtered on read: invalid entries
// are dropped, valid ones keep their order. Filtering never fails.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use tracing::debug;

/// Keep the entries that parse as an IPv4 or IPv6 CIDR, in input order
///
/// Host bits are allowed (`10.0.0.1/24` is kept as written).
pub fn filter_valid_cidrs<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| parse_entry(entry).is_some())
        .map(str::to_string)
        .collect()
}

fn parse_entry(entry: &str) -> Option<IpNet> {
    match entry.parse::<IpNet>() {
        Ok(net) => Some(net),
        Err(e) => {
            debug!("Dropping invalid CIDR entry {:?}: {}", entry, e);
            None
        }
    }
}

/// A list of address ranges as supplied, possibly containing invalid entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CidrList(Vec<String>);

impl CidrList {
    /// Create a list from raw entries
    pub fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    /// Raw entries, including invalid ones
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Entries that parse as CIDR, in order
    pub fn valid_entries(&self) -> Vec<String> {
        filter_valid_cidrs(&self.0)
    }

    /// Parsed networks of the valid entries, in order
    pub fn networks(&self) -> Vec<IpNet> {
        self.0.iter().filter_map(|entry| parse_entry(entry)).collect()
    }

    /// Whether the list has no valid entry
    pub fn is_unrestricted(&self) -> bool {
        self.networks().is_empty()
    }

    /// Whether any valid entry contains `ip`
    pub fn contains(&self, ip: IpAddr) -> bool {
        self.networks().iter().any(|net| net.contains(&ip))
    }

    /// JSON array of the valid entries, for storing alongside the tenant
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.valid_entries())?)
    }
}

impl From<Vec<String>> for CidrList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl<'a> FromIterator<&'a str> for CidrList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}
