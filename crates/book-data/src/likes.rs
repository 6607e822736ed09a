//! Stochastic rounding of fractional like counts.
//!
//! A page request carries the *expected* number of likes per book, which may
//! be fractional. Each record realises an integer sample: `floor(avg) + 1`
//! with probability equal to the fractional part, else `floor(avg)`. Over
//! many records the sample mean converges to `avg`.

use rand::Rng;

use crate::error::GenerationError;

/// Largest accepted expected-likes value.
pub const MAX_EXPECTED_LIKES: f64 = 10_000.0;

/// A validated expected-likes value split into whole and fractional parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedLikes {
    whole: u32,
    fraction: f64,
}

impl ExpectedLikes {
    /// Validates `value` and splits it for sampling.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidExpectedLikes`] when `value` is not
    /// finite, is negative or exceeds [`MAX_EXPECTED_LIKES`].
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::ExpectedLikes;
    ///
    /// let likes = ExpectedLikes::new(2.5).expect("valid");
    /// assert_eq!(likes.whole(), 2);
    /// assert!(ExpectedLikes::new(f64::NAN).is_err());
    /// ```
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is range-checked before the floor is narrowed to u32"
    )]
    pub fn new(value: f64) -> Result<Self, GenerationError> {
        if !value.is_finite() || !(0.0..=MAX_EXPECTED_LIKES).contains(&value) {
            return Err(GenerationError::InvalidExpectedLikes {
                value,
                max: MAX_EXPECTED_LIKES,
            });
        }
        let floor = value.floor();
        Ok(Self {
            whole: floor as u32,
            fraction: value - floor,
        })
    }

    /// Returns the whole part of the expectation.
    #[must_use]
    pub const fn whole(self) -> u32 {
        self.whole
    }

    /// Draws one realised like count.
    ///
    /// Always consumes exactly one `f64` from the stream, even when the
    /// fractional part is zero, so later draws do not depend on `avg`.
    pub(crate) fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        let draw: f64 = rng.random();
        if draw < self.fraction {
            self.whole.saturating_add(1)
        } else {
            self.whole
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(-0.1)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(MAX_EXPECTED_LIKES + 1.0)]
    fn rejects_out_of_range_values(#[case] value: f64) {
        assert!(matches!(
            ExpectedLikes::new(value),
            Err(GenerationError::InvalidExpectedLikes { .. })
        ));
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(3.0, 3)]
    #[case(3.9, 3)]
    #[case(MAX_EXPECTED_LIKES, 10_000)]
    fn splits_whole_part(#[case] value: f64, #[case] whole: u32) {
        assert_eq!(ExpectedLikes::new(value).expect("valid").whole(), whole);
    }

    #[test]
    fn integral_expectations_never_round_up() {
        let likes = ExpectedLikes::new(4.0).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..1_000).all(|_| likes.sample(&mut rng) == 4));
    }

    #[test]
    fn fractional_expectations_round_to_neighbours() {
        let likes = ExpectedLikes::new(1.3).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let samples: Vec<u32> = (0..1_000).map(|_| likes.sample(&mut rng)).collect();
        assert!(samples.iter().all(|sample| *sample == 1 || *sample == 2));
        assert!(samples.contains(&1));
        assert!(samples.contains(&2));
    }

    #[test]
    fn sampling_consumes_one_draw_regardless_of_fraction() {
        let mut zero_stream = ChaCha8Rng::seed_from_u64(3);
        let mut half_stream = ChaCha8Rng::seed_from_u64(3);
        ExpectedLikes::new(0.0).expect("valid").sample(&mut zero_stream);
        ExpectedLikes::new(0.5).expect("valid").sample(&mut half_stream);
        let next_zero: u64 = zero_stream.random();
        let next_half: u64 = half_stream.random();
        assert_eq!(next_zero, next_half);
    }
}
