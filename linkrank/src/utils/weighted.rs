/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::RankError;
use rand::Rng;
use rand::distr::Distribution as _;
use rand::distr::weighted::WeightedIndex;

/// Draws an index with probability proportional to its weight.
///
/// The weights need not be normalized, but they must be finite and
/// nonnegative, and at least one must be positive. Otherwise,
/// [`RankError::InvalidWeights`] is returned.
///
/// The draw inverts the cumulative distribution of the weights, so it costs
/// linear time to set up and logarithmic time to draw.
///
/// # Examples
///
/// ```
/// use linkrank::utils::draw_weighted;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(0);
/// // Index 1 has zero weight and is never drawn
/// let index = draw_weighted(&[0.5, 0.0, 0.5], &mut rng)?;
/// assert_ne!(index, 1);
/// # Ok::<(), linkrank::RankError>(())
/// ```
pub fn draw_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize, RankError> {
    if let Some(&w) = weights.iter().find(|w| !w.is_finite()) {
        return Err(RankError::InvalidWeights(format!("non-finite weight {w}")));
    }
    let index =
        WeightedIndex::new(weights).map_err(|e| RankError::InvalidWeights(e.to_string()))?;
    Ok(index.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_single_weight() -> Result<(), RankError> {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(draw_weighted(&[0.0, 0.0, 3.0, 0.0], &mut rng)?, 2);
        }
        Ok(())
    }

    #[test]
    fn test_frequencies() -> Result<(), RankError> {
        let mut rng = SmallRng::seed_from_u64(42);
        let weights = [0.1, 0.2, 0.3, 0.4];
        let mut counts = [0usize; 4];
        let draws = 100_000;
        for _ in 0..draws {
            counts[draw_weighted(&weights, &mut rng)?] += 1;
        }
        for (count, weight) in counts.iter().zip(weights) {
            let freq = *count as f64 / draws as f64;
            assert!((freq - weight).abs() < 0.01, "{freq} vs {weight}");
        }
        Ok(())
    }

    #[test]
    fn test_invalid_weights() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            draw_weighted(&[], &mut rng),
            Err(RankError::InvalidWeights(_))
        ));
        assert!(matches!(
            draw_weighted(&[0.0, 0.0], &mut rng),
            Err(RankError::InvalidWeights(_))
        ));
        assert!(matches!(
            draw_weighted(&[0.5, -0.5, 1.0], &mut rng),
            Err(RankError::InvalidWeights(_))
        ));
        assert!(matches!(
            draw_weighted(&[0.5, f64::NAN], &mut rng),
            Err(RankError::InvalidWeights(_))
        ));
    }
}
