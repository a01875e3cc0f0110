//! Centralized input limits and normalization helpers.

/// Maximum number of fragments accepted from input files.
///
/// Greedy assembly is cubic in the number of fragments, so inputs beyond
/// this size are rejected instead of assembled.
pub const MAX_FRAGMENTS: usize = 10_000;

/// Check if adding another fragment would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new fragment.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```
/// use frag_assembler::utils::validation::{check_fragment_limit, MAX_FRAGMENTS};
///
/// assert!(check_fragment_limit(0).is_none());
/// assert!(check_fragment_limit(MAX_FRAGMENTS).is_some());
/// ```
#[must_use]
pub fn check_fragment_limit(count: usize) -> Option<String> {
    if count >= MAX_FRAGMENTS {
        Some(format!(
            "Too many fragments: adding another would exceed maximum of {MAX_FRAGMENTS}"
        ))
    } else {
        None
    }
}

/// Normalize raw fragment text before validation.
///
/// Trims surrounding whitespace and uppercases ASCII letters so soft-masked
/// (lower-case) input is accepted. Anything else is left for
/// [`Sequence::new`](crate::core::sequence::Sequence::new) to reject.
#[must_use]
pub fn normalize_symbols(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
