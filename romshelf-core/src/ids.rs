//! Stable identifiers derived from display names and file names.
//!
//! Identifiers are the lowercase hex MD5 digest of the input string. The
//! hash is only used for addressing, never for integrity, and collisions
//! are not detected.

/// Prefix shared by every generated category name.
pub const CATEGORY_PREFIX: &str = "roms_root_category";

/// Number of hash characters appended to a category name.
pub const CATEGORY_HASH_LEN: usize = 6;

/// Characters replaced by `_` when building a category name.
const UNSAFE_CHARS: &[char] = &[' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Hash a string into a 32-character lowercase hex identifier.
pub fn hash_id(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Replace whitespace and filesystem-reserved characters with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Build the filesystem-safe category name for a platform.
///
/// `id` is normally `hash_id(name)`; only its first
/// [`CATEGORY_HASH_LEN`] characters are used.
pub fn category_name(name: &str, id: &str) -> String {
    let prefix: String = id.chars().take(CATEGORY_HASH_LEN).collect();
    format!("{}_{}_{}", CATEGORY_PREFIX, sanitize_name(name), prefix)
}

#[cfg(test)]
#[path = "tests/ids_tests.rs"]
mod tests;
