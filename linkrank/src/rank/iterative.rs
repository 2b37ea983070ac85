/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! PageRank by fixed-point iteration.
//!
//! If we denote with *n* the number of pages, with α the damping factor, with
//! *d*(*q*) the outdegree of page *q*, and with *S* the set of sinks, the
//! rank vector is the fixed point of the recurrence
//!
//! > *x*′*ₚ* = (1 − α) / *n* + α ( ∑_(*q* → *p*) *x_q* / *d*(*q*) + ∑_(*q* ∈ *S*) *x_q* / *n* ),
//!
//! that is, a sink is treated as if it linked to every page, the sink itself
//! included. This is the same convention used by the
//! [transition model](super::transition), so the sampling estimator and this
//! one estimate the same vector.
//!
//! The iteration starts from the uniform vector and computes each new
//! approximation from an immutable snapshot of the previous one (a Jacobi
//! iteration). It stops as soon as no rank changed by more than
//! [`MaxDelta::TOLERANCE`](preds::MaxDelta::TOLERANCE) in absolute value.
//!
//! # Parallelism
//!
//! Each pass is computed in parallel over nodes by Rayon. As every new rank
//! depends on the previous snapshot only, and the contributions to a node are
//! accumulated sequentially, the result does not depend on the number of
//! threads.
//!
//! # Stopping criteria
//!
//! The convergence test is fixed. Since the original recurrence has no bound
//! on the number of passes, an optional [`MaxIter`](preds::MaxIter) bound can
//! be set with [`IterativeRank::max_iter`]: when it is hit before convergence,
//! [`run`](IterativeRank::run) fails with [`RankError::NotConverged`].

pub mod preds {
    //! Predicates implementing stopping conditions.
    //!
    //! Predicates are evaluated after each pass, and they evaluate to true if
    //! the computation should be stopped.

    use predicates::{Predicate, reflection::PredicateReflection};
    use std::fmt::Display;

    #[doc(hidden)]
    /// This structure is passed to stopping predicates to provide the
    /// information that is needed to evaluate them.
    #[derive(Debug)]
    pub struct PredParams {
        pub iteration: usize,
        pub max_delta: f64,
    }

    /// Stops after at most the provided number of iterations.
    #[derive(Debug, Clone)]
    pub struct MaxIter {
        max_iter: usize,
    }

    impl MaxIter {
        pub const DEFAULT_MAX_ITER: usize = usize::MAX;
    }

    impl From<usize> for MaxIter {
        fn from(max_iter: usize) -> Self {
            MaxIter { max_iter }
        }
    }

    impl From<Option<usize>> for MaxIter {
        fn from(max_iter: Option<usize>) -> Self {
            Self::from(max_iter.unwrap_or(Self::DEFAULT_MAX_ITER))
        }
    }

    impl Default for MaxIter {
        fn default() -> Self {
            Self::from(Self::DEFAULT_MAX_ITER)
        }
    }

    impl Display for MaxIter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_fmt(format_args!("(max iter: {})", self.max_iter))
        }
    }

    impl PredicateReflection for MaxIter {}

    impl Predicate<PredParams> for MaxIter {
        fn eval(&self, pred_params: &PredParams) -> bool {
            pred_params.iteration >= self.max_iter
        }
    }

    /// Stops when no rank changed by more than
    /// [`TOLERANCE`](Self::TOLERANCE) in the last pass.
    ///
    /// The tolerance is absolute, and it is part of the definition of the
    /// algorithm, so it cannot be changed.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MaxDelta;

    impl MaxDelta {
        pub const TOLERANCE: f64 = 1E-3;
    }

    impl Display for MaxDelta {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_fmt(format_args!("(max delta: {})", Self::TOLERANCE))
        }
    }

    impl PredicateReflection for MaxDelta {}
    impl Predicate<PredParams> for MaxDelta {
        fn eval(&self, pred_params: &PredParams) -> bool {
            pred_params.max_delta <= Self::TOLERANCE
        }
    }
}

use super::DEFAULT_DAMPING;
use crate::dist::RankTable;
use crate::error::{RankError, check_damping};
use crate::graph::Corpus;
use dsi_progress_logger::{ProgressLog, no_logging};
use kahan::KahanSum;
use predicates::Predicate;
use preds::{MaxDelta, MaxIter, PredParams};
use rayon::prelude::*;

/// Minimum number of nodes handed to a Rayon task.
const RAYON_MIN_LEN: usize = 1024;

/// Computes PageRank by iterating the PageRank recurrence until convergence.
///
/// The struct is configured via setters and then executed via
/// [`run`](Self::run).
///
/// # Examples
///
/// ```
/// use linkrank::graph::Corpus;
/// use linkrank::rank::IterativeRank;
///
/// let corpus = Corpus::from_links([
///     ("a", vec!["b", "c"]),
///     ("b", vec!["a"]),
///     ("c", vec!["a"]),
/// ])?;
///
/// let ranks = IterativeRank::new(&corpus).damping(0.85).run()?;
///
/// assert!(ranks.get("a").unwrap() > ranks.get("b").unwrap());
/// assert!((ranks.sum() - 1.0).abs() < 1E-3);
/// # Ok::<(), linkrank::RankError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IterativeRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    max_iter: MaxIter,
}

impl<'a> IterativeRank<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            damping: DEFAULT_DAMPING,
            max_iter: MaxIter::default(),
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

    /// Sets an upper bound to the number of passes.
    ///
    /// Pass `None` to iterate until convergence, however long it takes
    /// (the default).
    pub fn max_iter(&mut self, max_iter: Option<usize>) -> &mut Self {
        self.max_iter = max_iter.into();
        self
    }

    /// Runs the computation until convergence.
    pub fn run(&self) -> Result<RankTable<'a>, RankError> {
        self.run_with_logging(no_logging![])
    }

    /// Runs the computation until convergence, logging passes on `pl`.
    pub fn run_with_logging(&self, pl: &mut impl ProgressLog) -> Result<RankTable<'a>, RankError> {
        self.corpus.check_not_empty()?;
        check_damping(self.damping)?;

        let corpus = self.corpus;
        let n = corpus.num_nodes();
        let converged = MaxDelta;

        log::info!("Damping: {}", self.damping);
        log::info!("Stopping criterion: {} or {}", converged, self.max_iter);
        log::info!("{} sink(s) out of {} page(s)", corpus.num_sinks(), n);
        if corpus.num_arcs() == 0 {
            log::warn!("The corpus contains no links: ranks will be uniform");
        }

        let inv_outdegrees: Box<[f64]> = (0..n)
            .map(|node| match corpus.outdegree(node) {
                0 => 0.0,
                d => 1.0 / d as f64,
            })
            .collect();

        let mut rank = vec![1.0 / n as f64; n].into_boxed_slice();
        let mut iteration = 0;

        pl.item_name("iteration");
        pl.expected_updates(None);
        pl.start(format!("Computing PageRank (damping={})...", self.damping));

        loop {
            let next = self.next_approximation(&rank, &inv_outdegrees);
            let max_delta = rank
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (new - old).abs())
                .fold(0.0, f64::max);
            rank = next;
            iteration += 1;

            log::debug!("Iteration {}: max delta = {}", iteration, max_delta);
            pl.update();

            let params = PredParams {
                iteration,
                max_delta,
            };
            if converged.eval(&params) {
                break;
            }
            if self.max_iter.eval(&params) {
                pl.done();
                return Err(RankError::NotConverged {
                    iterations: iteration,
                    max_delta,
                });
            }
        }

        pl.done();
        log::info!("Converged after {} iteration(s)", iteration);

        Ok(RankTable::new(corpus, rank, iteration))
    }

    /// Applies the recurrence once to `rank`, returning a fresh vector.
    fn next_approximation(&self, rank: &[f64], inv_outdegrees: &[f64]) -> Box<[f64]> {
        let corpus = self.corpus;
        let n = corpus.num_nodes();
        let inv_n = 1.0 / n as f64;

        let sink_rank = inv_outdegrees
            .iter()
            .zip(rank)
            .filter(|&(&inv_d, _)| inv_d == 0.0)
            .fold(KahanSum::<f64>::new(), |sum, (_, &r)| sum + r)
            .sum();
        let sink_share = sink_rank * inv_n;
        let teleport = (1.0 - self.damping) * inv_n;

        (0..n)
            .into_par_iter()
            .with_min_len(RAYON_MIN_LEN)
            .map(|node| {
                let mut sigma = KahanSum::<f64>::new();
                for &pred in corpus.predecessors(node) {
                    sigma += rank[pred] * inv_outdegrees[pred];
                }
                sigma += sink_share;
                teleport + self.damping * sigma.sum()
            })
            .collect::<Vec<_>>()
            .into_boxed_slice()
    }
}

/// Computes PageRank by fixed-point iteration with damping factor `damping`.
///
/// This is a shorthand for configuring and running an [`IterativeRank`]
/// without an iteration bound.
pub fn iterate(corpus: &Corpus, damping: f64) -> Result<RankTable<'_>, RankError> {
    IterativeRank::new(corpus).damping(damping).run()
}
