/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! PageRank estimators.
//!
//! Two independent estimators are available, both returning a
//! [`RankTable`](crate::dist::RankTable):
//!
//! - [`sample`] (or [`Sampler`]) follows a long random-surfer walk driven by
//!   the [transition model](transition());
//! - [`iterate`] (or [`IterativeRank`]) applies the PageRank recurrence until
//!   the ranks stabilize.

pub mod iterative;
pub mod sampling;
pub mod transition;

pub use iterative::{IterativeRank, iterate};
pub use sampling::{Sampler, sample};
pub use transition::{transition, transition_from};

/// The damping factor used when none is specified.
pub const DEFAULT_DAMPING: f64 = 0.85;
