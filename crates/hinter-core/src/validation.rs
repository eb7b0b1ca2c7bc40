//! Validation for aliases and public keys

use std::sync::LazyLock;

use regex::Regex;

static SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Invalid slug regex")
});

static PUBLIC_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]{64}$").expect("Invalid public key regex"));

/// Lowercase letters and digits, separated by single hyphens.
///
/// Peer aliases and group names share this format.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}

/// 64 lowercase hexadecimal characters.
pub fn is_valid_public_key(key: &str) -> bool {
    PUBLIC_KEY.is_match(key)
}
