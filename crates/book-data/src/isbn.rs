//! Synthetic EAN-13 style ISBNs.

use rand::Rng;

/// Bookland prefix shared by every generated ISBN.
const BOOKLAND_PREFIX: [u8; 3] = [9, 7, 8];

/// Number of digits drawn from the stream for each ISBN.
const RANDOM_DIGITS: usize = 9;

/// Length of a generated ISBN.
pub const ISBN_LENGTH: usize = 13;

/// Draws a 13-digit ISBN: the `978` prefix, nine random digits and a valid
/// EAN-13 check digit.
pub(crate) fn draw_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = Vec::with_capacity(ISBN_LENGTH);
    digits.extend_from_slice(&BOOKLAND_PREFIX);
    for _ in 0..RANDOM_DIGITS {
        digits.push(rng.random_range(0..10_u8));
    }
    digits.push(check_digit(&digits));
    digits.into_iter().map(|digit| char::from(b'0' + digit)).collect()
}

/// Computes the EAN-13 check digit for the first twelve digits.
fn check_digit(digits: &[u8]) -> u8 {
    let weighted: u32 = digits
        .iter()
        .zip([1_u32, 3].into_iter().cycle())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    let remainder = weighted.rem_euclid(10);
    // `remainder` is below 10, so the subtraction and narrowing are exact.
    u8::try_from(10_u32.saturating_sub(remainder).rem_euclid(10)).unwrap_or_default()
}

/// Returns `true` when `isbn` is thirteen ASCII digits with a valid EAN-13
/// check digit.
///
/// # Example
///
/// ```
/// use book_data::is_valid_isbn13;
///
/// assert!(is_valid_isbn13("9780306406157"));
/// assert!(!is_valid_isbn13("9780306406158"));
/// assert!(!is_valid_isbn13("978-0306406157"));
/// ```
#[must_use]
pub fn is_valid_isbn13(isbn: &str) -> bool {
    if isbn.len() != ISBN_LENGTH || !isbn.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = isbn.bytes().map(|byte| byte - b'0').collect();
    match digits.split_last() {
        Some((last, body)) => check_digit(body) == *last,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5], 7)]
    #[case(&[9, 7, 8, 1, 8, 6, 1, 9, 7, 2, 7, 1], 2)]
    #[case(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3], 1)]
    fn check_digit_matches_known_codes(#[case] body: &[u8], #[case] expected: u8) {
        assert_eq!(check_digit(body), expected);
    }

    #[test]
    fn drawn_isbns_are_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let isbn = draw_isbn(&mut rng);
            assert!(isbn.starts_with("978"), "{isbn}");
            assert!(is_valid_isbn13(&isbn), "{isbn}");
        }
    }

    #[rstest]
    #[case("")]
    #[case("978030640615")]
    #[case("97803064061577")]
    #[case("97803064O6157")]
    fn rejects_malformed_isbns(#[case] isbn: &str) {
        assert!(!is_valid_isbn13(isbn));
    }
}
