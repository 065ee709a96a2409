//! Shared constants for the text transformations
//!
//! Note: Each domain module reads its parameters from here so that the
//! CLI and the benches agree on them.

// =============================================================================
// Vigenere cipher parameters
// =============================================================================

/// Number of letters in the Latin alphabet (shift is taken modulo this)
pub const ALPHABET_LEN: u8 = 26;

/// Case base for uppercase letters
pub const UPPER_BASE: u8 = b'A';

/// Case base for lowercase letters
pub const LOWER_BASE: u8 = b'a';

/// Error text reported for an empty message or key
pub const INCORRECT_ARGUMENTS: &str = "Incorrect arguments!";

// =============================================================================
// Digit removal parameters
// =============================================================================

/// Numeric base used when splitting an integer into digits
pub const RADIX: u32 = 10;

// =============================================================================
// DNS statistics parameters
// =============================================================================

/// Label separator inside a domain name
pub const DOMAIN_SEPARATOR: char = '.';

// =============================================================================
// File renaming parameters
// =============================================================================

/// Opening delimiter of a collision suffix: `name(k)`
pub const SUFFIX_OPEN: char = '(';

/// Closing delimiter of a collision suffix: `name(k)`
pub const SUFFIX_CLOSE: char = ')';

/// First suffix probed for a colliding name
pub const FIRST_SUFFIX: usize = 1;

// =============================================================================
// Batch processing
// =============================================================================

/// Minimum number of items handed to one rayon task in batch operations
#[cfg(not(test))]
pub const PARALLEL_CHUNK_SIZE: usize = 1 << 10; // 1,024

/// Minimum number of items per rayon task - reduced so unit tests split work
#[cfg(test)]
pub const PARALLEL_CHUNK_SIZE: usize = 4;
