//! Registries of well-known ENS profile text-record keys.
//!
//! Pure static data: ordered, deduplicated lists consumers treat as read-only
//! membership sets for recognizing and display-ordering known profile fields.

use once_cell::sync::Lazy;

/// Standard text record keys used in ENS profiles.
///
/// Includes both legacy short keys and the newer namespaced convention
/// (ENSIP-5).
pub const STANDARD_TEXT_KEYS: &[&str] = &[
    // Identity & profile
    "url",
    "email",
    "description",
    "name",
    "notice",
    "keywords",
    "location",
    // Legacy social keys (still widely used)
    "avatar",
    "twitter",
    "github",
    // Namespaced social keys (ENSIP-5 / newer convention)
    "com.twitter",
    "com.github",
    "com.discord",
    "org.telegram",
    "io.keybase",
];

// Additional commonly used records for deep profile enrichment
const EXTRA_TEXT_KEYS: &[&str] = &[
    "eth.ens.delegate",
    "header",
    "display",
    "mail",
    "snapshot",
    "contenthash",
    "vnd.twitter",
    "vnd.github",
];

/// Comprehensive text record keys: [`STANDARD_TEXT_KEYS`] first, in order,
/// followed by the additional enrichment keys.
pub static EXTENDED_TEXT_KEYS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    STANDARD_TEXT_KEYS
        .iter()
        .chain(EXTRA_TEXT_KEYS)
        .copied()
        .collect()
});

/// Whether `key` appears in [`EXTENDED_TEXT_KEYS`].
pub fn is_known_text_key(key: &str) -> bool {
    EXTENDED_TEXT_KEYS.contains(&key)
}
