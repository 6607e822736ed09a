//! Stream seed derivation.
//!
//! Every generation call owns one `ChaCha8Rng` seeded from its inputs. Book
//! pages seed from `base_seed + page`; reviews seed from a stable hash of the
//! ISBN so they do not depend on which page the book appeared on.
//!
//! The ISBN hash is 64-bit FNV-1a over the UTF-8 bytes of the ISBN. It is
//! fixed here rather than taken from `std::hash`, whose output is not
//! guaranteed to be stable between releases or processes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Returns the stream seed for a page of books.
///
/// Negative base seeds are reinterpreted as their two's-complement bits and
/// the addition wraps, so every `(base_seed, page)` pair maps to a seed.
///
/// # Example
///
/// ```
/// use book_data::book_stream_seed;
///
/// assert_eq!(book_stream_seed(42, 3), 45);
/// assert_eq!(book_stream_seed(-1, 1), 0);
/// assert_eq!(book_stream_seed(-5, 0), u64::MAX - 4);
/// ```
#[must_use]
pub const fn book_stream_seed(base_seed: i64, page: u32) -> u64 {
    base_seed.cast_unsigned().wrapping_add(page as u64)
}

/// Returns the stream seed for the reviews of a book.
///
/// # Example
///
/// ```
/// use book_data::review_stream_seed;
///
/// let seed = review_stream_seed("9781234567897");
/// assert_eq!(seed, review_stream_seed("9781234567897"));
/// assert_ne!(seed, review_stream_seed("9781234567880"));
/// ```
#[must_use]
pub const fn review_stream_seed(isbn: &str) -> u64 {
    stable_hash(isbn.as_bytes())
}

/// Hashes bytes with 64-bit FNV-1a.
///
/// # Example
///
/// ```
/// use book_data::stable_hash;
///
/// assert_eq!(stable_hash(b""), 0xcbf2_9ce4_8422_2325);
/// assert_eq!(stable_hash(b"a"), 0xaf63_dc4c_8601_ec8c);
/// ```
#[must_use]
pub const fn stable_hash(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut remaining = bytes;
    while let [byte, rest @ ..] = remaining {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        remaining = rest;
    }
    hash
}

/// Creates the call-scoped random stream for a seed.
pub(crate) fn stream_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
