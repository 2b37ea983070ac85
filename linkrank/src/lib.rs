/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod dist;
pub mod error;
pub mod graph;
pub mod rank;
pub mod utils;

pub use error::RankError;

pub mod prelude {
    pub use crate::RankError;
    pub use crate::dist::{Distribution, RankTable};
    pub use crate::graph::Corpus;
    pub use crate::rank::{IterativeRank, Sampler, iterate, sample, transition};
}
