/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The random-surfer transition model.
//!
//! From a page with links, the surfer follows one of the links chosen
//! uniformly with probability α (the damping factor), and jumps to a page
//! chosen uniformly in the whole corpus with probability 1 − α. Thus, if *n*
//! is the number of pages and *d* the outdegree of the current page, every
//! page gets (1 − α) / *n*, and every successor gets α / *d* on top of that.
//!
//! A sink has no link to follow, so the surfer jumps: the distribution is
//! uniform over all pages, the sink included.

use crate::dist::Distribution;
use crate::error::{RankError, check_damping};
use crate::graph::Corpus;

/// Returns the distribution of the next page visited by the surfer when on
/// `node`, using damping factor `damping`.
///
/// # Examples
///
/// ```
/// use linkrank::graph::Corpus;
/// use linkrank::rank::transition;
///
/// let corpus = Corpus::from_links([
///     ("a", vec!["b", "c"]),
///     ("b", vec!["c"]),
///     ("c", vec!["a"]),
/// ])?;
/// let dist = transition(&corpus, 0, 0.85)?;
/// assert!((dist[0] - 0.05).abs() < 1E-12);
/// assert!((dist[1] - 0.475).abs() < 1E-12);
/// assert!((dist[2] - 0.475).abs() < 1E-12);
/// # Ok::<(), linkrank::RankError>(())
/// ```
pub fn transition(corpus: &Corpus, node: usize, damping: f64) -> Result<Distribution, RankError> {
    corpus.check_not_empty()?;
    corpus.check_node(node)?;
    check_damping(damping)?;
    Ok(next_step(corpus, node, damping))
}

/// Like [`transition`], but identifies the current page by its label.
pub fn transition_from(
    corpus: &Corpus,
    label: &str,
    damping: f64,
) -> Result<Distribution, RankError> {
    let node = corpus
        .node_id(label)
        .ok_or_else(|| RankError::UnknownLabel(label.to_owned()))?;
    transition(corpus, node, damping)
}

/// Computes the transition distribution without validating the arguments.
///
/// The corpus must be nonempty, `node` must be in range, and `damping` must
/// be in [0 . . 1].
pub(crate) fn next_step(corpus: &Corpus, node: usize, damping: f64) -> Distribution {
    let n = corpus.num_nodes();
    let succ = corpus.successors(node);
    if succ.is_empty() {
        return Distribution::uniform(n);
    }

    let mut dist = vec![(1.0 - damping) / n as f64; n].into_boxed_slice();
    let share = damping / succ.len() as f64;
    for &s in succ {
        dist[s] += share;
    }
    dist.into()
}
