//! Subdomain shape checks
//!
//! One anchored grammar covers both plain domain parts (`com`, `a-b-c.com`)
//! and UUID-shaped subdomains, so there is no separate UUID case.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dot-separated lowercase labels, no leading or trailing hyphen
    static ref SUBDOMAIN_REGEX: Regex =
        Regex::new(r"^([a-z0-9]([a-z0-9-]*[a-z0-9])?)([.][a-z0-9]([a-z0-9-]*[a-z0-9])?)*$")
            .unwrap();
}

/// Check that `subdomain` is a sequence of lowercase DNS labels
pub fn is_valid_subdomain(subdomain: &str) -> bool {
    SUBDOMAIN_REGEX.is_match(subdomain)
}
