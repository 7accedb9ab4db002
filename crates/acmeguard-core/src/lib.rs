// # acmeguard-core
//
// Trust-boundary checks for a multi-tenant ACME DNS-01 update service.
//
// ## Architecture Overview
//
// Independent, side-effect-free checks applied to each request field:
// - **identifier**: parse a tenant UUID, rejecting non-canonical case
// - **key**: API key shape (40 chars from `[A-Za-z0-9_-]`)
// - **subdomain**: lowercase dot-separated DNS labels
// - **payload**: TXT value made of 43-char groups
// - **cidr**: filter a tenant's source ranges down to the valid ones
// - **credential**: verify a secret against a stored bcrypt/Argon2 hash
//
// `UpdateGuard` strings them together for one update request.
//
// ## Design Principles
//
// 1. **Reject, never coerce**: input is accepted as-is or refused
// 2. **No oracles**: validators and the verifier answer `bool`; only the
//    identifier parser explains itself
// 3. **Stateless**: compiled patterns are built once and only read after,
//    so every check is safe to call from any thread

pub mod charset;
pub mod cidr;
pub mod config;
pub mod credential;
pub mod error;
pub mod guard;
pub mod identifier;
pub mod key;
pub mod payload;
pub mod subdomain;

// Re-export core types for convenience
pub use charset::sanitize_string;
pub use cidr::{CidrList, filter_valid_cidrs};
pub use config::GuardConfig;
pub use credential::{verify_password, verify_password_offloaded};
pub use error::{Error, FormatError, Result};
pub use guard::{UpdateGuard, UpdateRequest};
pub use identifier::{TenantId, parse_identifier};
pub use key::{ApiKey, KEY_LENGTH, is_valid_key};
pub use payload::{PAYLOAD_GROUP_LEN, is_valid_record_payload};
pub use subdomain::is_valid_subdomain;
