//! Fixtures shared by the boundary contract tests
//!
//! Inputs are built deterministically so that every property is checked
//! against the same corpus on every run.

#![allow(dead_code)]

/// Known-good bcrypt pair (cost 10)
pub const SECRET: &str = "PUrNTjU24JYNEOCeS2JcjaJGv1sinT80oV9--dpX";
pub const SECRET_HASH: &str = "$2a$10$ldVoGU5yrdlbPzuPUbUfleVovGjaRelP9tql0IltVUJk778gf.2tu";

/// Canonical tenant identifier
pub const TENANT: &str = "5ec1d7f2-496d-11e9-8646-d663bd873d93";

/// API key charset, in the order keys are generated from
pub const KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Characters outside both the key and the payload charsets
pub const FOREIGN_CHARS: &[char] = &['#', ' ', '/', '+', '=', '!', '\n', 'é', 'ß', '\u{0}', '😀'];

/// Cheap deterministic generator (xorshift64)
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// A string of `len` characters drawn from the key charset
pub fn key_charset_string(rng: &mut Rng, len: usize) -> String {
    (0..len)
        .map(|_| KEY_CHARS[rng.below(KEY_CHARS.len())] as char)
        .collect()
}

/// Replace the character at `pos` with `c`
pub fn with_char_at(s: &str, pos: usize, c: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, orig)| if i == pos { c } else { orig })
        .collect()
}

/// Random canonical identifiers, rendered by the uuid crate itself
pub fn canonical_identifiers(rng: &mut Rng, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            let bits = (u128::from(rng.next_u64()) << 64) | u128::from(rng.next_u64());
            uuid::Uuid::from_u128(bits).hyphenated().to_string()
        })
        .collect()
}
