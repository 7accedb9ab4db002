// # Credential Verification
//
// Checks a presented secret against a stored, self-describing password hash.
//
// ## Supported encodings
//
// - bcrypt (`$2a$`, `$2b$`, `$2x$`, `$2y$`): cost and salt embedded in the hash
// - Argon2 PHC strings (`$argon2id$...`): algorithm, params and salt embedded
//
// ## Failure model
//
// Every failure is `false`: wrong secret, unknown scheme, truncated or empty
// hash, internal errors. Callers cannot tell a corrupted record from a bad
// password. Neither the secret nor the hash is ever logged.
//
// Verification is CPU-bound and deliberately slow. Async callers should use
// `verify_password_offloaded`, and must not time out sooner than the hash
// cost takes.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use tracing::debug;

const ARGON2_PREFIX: &str = "$argon2";

/// Verify `secret` against a stored hash
///
/// Digest comparison is constant-time in both backends.
pub fn verify_password(secret: &str, hash: &str) -> bool {
    if hash.starts_with(ARGON2_PREFIX) {
        verify_argon2(secret, hash)
    } else {
        verify_bcrypt(secret, hash)
    }
}

fn verify_bcrypt(secret: &str, hash: &str) -> bool {
    match bcrypt::verify(secret, hash) {
        Ok(matched) => matched,
        // The error text can echo the stored hash
        Err(_) => {
            debug!("bcrypt hash rejected");
            false
        }
    }
}

fn verify_argon2(secret: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("argon2 hash rejected: {}", e);
            return false;
        }
    };

    match Argon2::default().verify_password(secret.as_bytes(), &parsed) {
        Ok(()) => true,
        Err(argon2::password_hash::Error::Password) => false,
        Err(e) => {
            debug!("argon2 verification failed: {}", e);
            false
        }
    }
}

/// Verify on tokio's blocking pool
///
/// Keeps the expensive hash off the async executor. A panicked or
/// cancelled verification counts as a mismatch.
pub async fn verify_password_offloaded(secret: String, hash: String) -> bool {
    match tokio::task::spawn_blocking(move || verify_password(&secret, &hash)).await {
        Ok(matched) => matched,
        Err(e) => {
            debug!("credential verification task failed: {}", e);
            false
        }
    }
}
