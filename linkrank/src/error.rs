/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Errors returned by the estimators and by [`Corpus`](crate::graph::Corpus)
/// construction.
///
/// All of these are input errors: the computations have no transient failure
/// mode, so nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("The corpus is empty")]
    EmptyCorpus,
    #[error("The damping factor must be in [0 . . 1], got {0}")]
    InvalidDamping(f64),
    #[error("The number of samples must be at least 1, got {0}")]
    InvalidSampleCount(usize),
    #[error("Node {node} is out of range (the corpus has {num_nodes} nodes)")]
    UnknownNode { node: usize, num_nodes: usize },
    #[error("Page {0:?} is not in the corpus")]
    UnknownLabel(String),
    #[error("Page {page:?} links to {link:?}, which is not in the corpus")]
    DanglingLink { page: String, link: String },
    #[error("Cannot draw from the given weights: {0}")]
    InvalidWeights(String),
    #[error("No convergence after {iterations} iteration(s) (max delta = {max_delta})")]
    NotConverged { iterations: usize, max_delta: f64 },
}

/// Checks that a damping factor lies in [0 . . 1].
pub(crate) fn check_damping(damping: f64) -> Result<(), RankError> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}
