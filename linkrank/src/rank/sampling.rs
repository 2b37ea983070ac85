/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Monte Carlo PageRank.
//!
//! The estimator follows a single long walk of the random surfer. It keeps a
//! running estimate **r** of the rank vector, initially zero, and a current
//! page, initially chosen uniformly at random. At step *t* = 1, 2, …, it
//! computes the [transition distribution](super::transition) **p** of the
//! current page, folds it into the estimate with the incremental mean
//!
//! > **r** ← ((*t* − 1) **r** + **p**) / *t*,
//!
//! and then draws the next current page using **r** itself as weights.
//!
//! Since every **p** is stochastic, so is **r** after the first step. In
//! expectation the next **p** is **r** *P*, where *P* is the transition
//! matrix, so the update is a stochastic approximation of the fixed point
//! **r** = **r** *P*: the estimate approaches PageRank as the number of steps
//! grows, with decreasing variance.
//!
//! A walk made of *s* samples performs *s* − 1 steps, as the starting page
//! is not a step. If *s* = 1, the only step from the starting page is
//! performed anyway, so that the result is a distribution.
//!
//! The random source is passed by the caller: using a seeded generator such
//! as [`SmallRng`](rand::rngs::SmallRng) makes the result reproducible.

use super::DEFAULT_DAMPING;
use super::transition::next_step;
use crate::dist::RankTable;
use crate::error::{RankError, check_damping};
use crate::graph::Corpus;
use crate::utils::draw_weighted;
use dsi_progress_logger::{ProgressLog, no_logging};
use rand::Rng;

/// Estimates PageRank by sampling a random-surfer walk.
///
/// The struct is configured via setters and then executed via
/// [`run`](Self::run), which can be called any number of times.
///
/// # Examples
///
/// ```
/// use linkrank::graph::Corpus;
/// use linkrank::rank::Sampler;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])])?;
/// let mut rng = SmallRng::seed_from_u64(0);
///
/// let mut sampler = Sampler::new(&corpus);
/// sampler.damping(0.85).samples(1000);
/// let ranks = sampler.run(&mut rng)?;
///
/// assert_eq!(ranks.iterations(), 999);
/// assert!((ranks.sum() - 1.0).abs() < 1E-9);
/// # Ok::<(), linkrank::RankError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<'a> {
    corpus: &'a Corpus,
    damping: f64,
    samples: usize,
}

impl<'a> Sampler<'a> {
    pub const DEFAULT_SAMPLES: usize = 10_000;

    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            damping: DEFAULT_DAMPING,
            samples: Self::DEFAULT_SAMPLES,
        }
    }

    /// Sets the damping factor.
    ///
    /// The value is checked by [`run`](Self::run), which fails if it is not
    /// in [0 . . 1].
    pub fn damping(&mut self, damping: f64) -> &mut Self {
        self.damping = damping;
        self
    }

    /// Sets the number of samples, which must be positive.
    pub fn samples(&mut self, samples: usize) -> &mut Self {
        self.samples = samples;
        self
    }

    /// Runs the estimator using the given source of randomness.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RankTable<'a>, RankError> {
        self.run_with_logging(rng, no_logging![])
    }

    /// Runs the estimator using the given source of randomness, logging
    /// progress on `pl`.
    pub fn run_with_logging<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pl: &mut impl ProgressLog,
    ) -> Result<RankTable<'a>, RankError> {
        self.corpus.check_not_empty()?;
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }

        let n = self.corpus.num_nodes();
        let steps = (self.samples - 1).max(1);
        log::info!("Damping: {}", self.damping);
        log::info!("Samples: {}", self.samples);

        let mut rank = vec![0.0; n].into_boxed_slice();
        let mut node = rng.random_range(0..n);
        log::debug!("Starting from {}", self.corpus.label(node));

        pl.item_name("step");
        pl.expected_updates(Some(steps));
        pl.start(format!("Sampling PageRank (damping={})...", self.damping));

        for step in 1..=steps {
            let dist = next_step(self.corpus, node, self.damping);
            let prev_weight = (step - 1) as f64;
            let inv_step = 1.0 / step as f64;
            for (r, &p) in rank.iter_mut().zip(dist.iter()) {
                *r = (prev_weight * *r + p) * inv_step;
            }
            node = draw_weighted(&rank, rng)?;
            pl.light_update();
        }

        pl.done();

        Ok(RankTable::new(self.corpus, rank, steps))
    }
}

/// Estimates PageRank by a random-surfer walk of `sample_count` samples.
///
/// This is a shorthand for configuring and running a [`Sampler`].
pub fn sample<'a, R: Rng + ?Sized>(
    corpus: &'a Corpus,
    damping: f64,
    sample_count: usize,
    rng: &mut R,
) -> Result<RankTable<'a>, RankError> {
    Sampler::new(corpus)
        .damping(damping)
        .samples(sample_count)
        .run(rng)
}
