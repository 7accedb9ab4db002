//! TXT record payload shape checks
//!
//! A payload is one or more 43-character groups joined by single dots, so
//! its length is 43, 87, 131, ... Only the charset and the total length are
//! checked. Where the dots sit is not: an 87-character payload without any
//! dot passes. Callers rely on this looser contract, so it stays.

use crate::charset::PAYLOAD_CHARSET;

/// Length of one payload group (an ACME DNS-01 digest in base64url)
pub const PAYLOAD_GROUP_LEN: usize = 43;

/// Check the charset and the group-length law of a TXT payload
pub fn is_valid_record_payload(payload: &str) -> bool {
    PAYLOAD_CHARSET.conforms(payload, |count| (count + 1) % (PAYLOAD_GROUP_LEN + 1) == 0)
}
