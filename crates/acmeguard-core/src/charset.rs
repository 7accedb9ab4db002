// # Allow-list Charsets
//
// Shared "strip and compare" helper behind the key and TXT validators.
//
// An input conforms to an allow-list when stripping every character outside
// the list leaves it unchanged, and its length (in Unicode scalar values)
// satisfies a predicate. Both checks happen in one pass over the counts:
// any stripped character makes the sanitized copy shorter than the input.
//
// The compiled patterns are built once on first use and never mutated.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Characters outside the API key charset
    static ref NOT_KEY_CHARS: Regex = Regex::new(r"[^A-Za-z\-_0-9]+").unwrap();

    /// Characters outside the TXT payload charset
    static ref NOT_PAYLOAD_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.-]+").unwrap();

    /// Charset of API keys: ASCII letters, digits, hyphen, underscore
    pub static ref KEY_CHARSET: AllowList = AllowList::new(&NOT_KEY_CHARS);

    /// Charset of TXT payloads: the key charset plus the dot separator
    pub static ref PAYLOAD_CHARSET: AllowList = AllowList::new(&NOT_PAYLOAD_CHARS);
}

/// An allow-list of characters, expressed as the regex of everything else
#[derive(Debug, Clone, Copy)]
pub struct AllowList {
    disallowed: &'static Regex,
}

impl AllowList {
    fn new(disallowed: &'static Regex) -> Self {
        Self { disallowed }
    }

    /// Remove every character outside the allow-list
    ///
    /// Borrows the input when nothing had to be removed.
    pub fn strip<'a>(&self, value: &'a str) -> Cow<'a, str> {
        self.disallowed.replace_all(value, "")
    }

    /// Check that nothing would be stripped and that the length predicate holds
    pub fn conforms(&self, value: &str, len_ok: impl Fn(usize) -> bool) -> bool {
        let count = value.chars().count();
        let stripped = self.strip(value).chars().count();
        count == stripped && len_ok(count)
    }
}

/// Strip characters outside `[A-Za-z0-9_-]`
///
/// This is the sanitizer API keys are checked against; the key validator
/// relies on this exact charset.
pub fn sanitize_string(value: &str) -> String {
    KEY_CHARSET.strip(value).into_owned()
}
