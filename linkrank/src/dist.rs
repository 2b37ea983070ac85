/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Probability vectors over the nodes of a [`Corpus`].

use crate::graph::Corpus;
use kahan::KahanSum;
use std::collections::BTreeMap;
use std::ops::Deref;

/// Returns the compensated sum of a slice of values.
pub(crate) fn kahan_sum(values: &[f64]) -> f64 {
    values
        .iter()
        .fold(KahanSum::<f64>::new(), |sum, &x| sum + x)
        .sum()
}

/// A discrete probability distribution over the nodes of a corpus, indexed by
/// node identifier.
///
/// Distributions are built fresh by each call to
/// [`transition`](crate::rank::transition) and are never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution(Box<[f64]>);

impl Distribution {
    /// Returns the uniform distribution on `n` nodes.
    pub fn uniform(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n].into_boxed_slice())
    }

    /// Returns the sum of the probabilities, which should be one up to
    /// rounding errors.
    pub fn sum(&self) -> f64 {
        kahan_sum(&self.0)
    }

    pub fn into_inner(self) -> Box<[f64]> {
        self.0
    }
}

impl From<Box<[f64]>> for Distribution {
    fn from(values: Box<[f64]>) -> Self {
        Self(values)
    }
}

impl Deref for Distribution {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Distribution {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// The result of an estimator: a rank for each node of a corpus.
///
/// The table borrows the corpus it describes, so ranks can be looked up by
/// label. Node order is lexicographical label order, which is also the order
/// used by [`iter`](Self::iter).
#[derive(Debug, Clone)]
pub struct RankTable<'a> {
    corpus: &'a Corpus,
    ranks: Box<[f64]>,
    iterations: usize,
}

impl<'a> RankTable<'a> {
    pub(crate) fn new(corpus: &'a Corpus, ranks: Box<[f64]>, iterations: usize) -> Self {
        debug_assert_eq!(corpus.num_nodes(), ranks.len());
        Self {
            corpus,
            ranks,
            iterations,
        }
    }

    /// Returns the corpus the ranks refer to.
    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Returns the rank vector, indexed by node identifier.
    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    /// Returns the rank of the page with the given label, if any.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.corpus.node_id(label).map(|node| self.ranks[node])
    }

    /// Returns the number of iterations (for the iterative estimator) or of
    /// transitions (for the sampling estimator) that produced this table.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the sum of the ranks.
    pub fn sum(&self) -> f64 {
        kahan_sum(&self.ranks)
    }

    /// Iterates over pairs made of a label and its rank, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.corpus
            .labels()
            .iter()
            .map(String::as_str)
            .zip(self.ranks.iter().copied())
    }

    /// Turns the table into a map from labels to ranks.
    pub fn into_map(self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(label, rank)| (label.to_owned(), rank))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankError;

    #[test]
    fn test_uniform() {
        let d = Distribution::uniform(7);
        assert_eq!(d.len(), 7);
        assert!((d.sum() - 1.0).abs() < 1E-12);
    }

    #[test]
    fn test_rank_table_lookup() -> Result<(), RankError> {
        let corpus = Corpus::from_links([("b", vec!["a"]), ("a", vec![])])?;
        let table = RankTable::new(&corpus, vec![0.25, 0.75].into_boxed_slice(), 3);
        assert_eq!(table.get("a"), Some(0.25));
        assert_eq!(table.get("b"), Some(0.75));
        assert_eq!(table.get("c"), None);
        assert_eq!(table.iterations(), 3);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("a", 0.25), ("b", 0.75)]
        );
        let map = table.into_map();
        assert_eq!(map["b"], 0.75);
        Ok(())
    }
}
