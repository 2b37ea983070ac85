/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The link graph the estimators work on.
//!
//! A [`Corpus`] is a static directed graph whose nodes are identified by
//! string labels (page names). Labels are interned: node identifiers are
//! indices in the sorted list of labels, so iterating over node identifiers
//! enumerates pages in lexicographical order.
//!
//! Both the successor and the predecessor lists are stored, sorted. The
//! predecessor lists (that is, the transpose) are needed by the
//! [iterative estimator](crate::rank::iterative), which must enumerate the
//! pages linking to a given page.

use crate::error::RankError;
use std::collections::{BTreeMap, BTreeSet};

/// An immutable directed graph with labelled nodes.
///
/// # Examples
///
/// ```
/// use linkrank::graph::Corpus;
///
/// let corpus = Corpus::from_links([
///     ("1.html", vec!["2.html"]),
///     ("2.html", vec!["1.html", "3.html"]),
///     ("3.html", vec![]),
/// ])?;
///
/// assert_eq!(corpus.num_nodes(), 3);
/// assert_eq!(corpus.num_arcs(), 3);
/// assert!(corpus.is_sink(corpus.node_id("3.html").unwrap()));
/// # Ok::<(), linkrank::RankError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    labels: Box<[String]>,
    successors: Box<[Box<[usize]>]>,
    predecessors: Box<[Box<[usize]>]>,
    num_arcs: usize,
    num_sinks: usize,
}

impl Corpus {
    /// Builds a corpus from pairs made of a page label and the labels of the
    /// pages it links to.
    ///
    /// Repeated sources are merged, and repeated links are counted once. Every
    /// link target must appear as a source, possibly with no links: otherwise,
    /// a [`RankError::DanglingLink`] is returned.
    ///
    /// An empty input yields an empty corpus; the estimators reject it.
    pub fn from_links<I, S, L, T>(links: I) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (source, targets) in links {
            pages
                .entry(source.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let labels: Box<[String]> = pages.keys().cloned().collect();
        let n = labels.len();
        let mut successors = Vec::with_capacity(n);
        let mut predecessors = vec![Vec::new(); n];
        let mut num_arcs = 0;
        let mut num_sinks = 0;

        for (node, (source, targets)) in pages.iter().enumerate() {
            let mut succ = Vec::with_capacity(targets.len());
            // targets are sorted, and so are labels: succ comes out sorted
            for target in targets {
                let Ok(target_id) = labels.binary_search(target) else {
                    return Err(RankError::DanglingLink {
                        page: source.clone(),
                        link: target.clone(),
                    });
                };
                succ.push(target_id);
                predecessors[target_id].push(node);
            }
            num_arcs += succ.len();
            if succ.is_empty() {
                num_sinks += 1;
            }
            successors.push(succ.into_boxed_slice());
        }

        Ok(Self {
            labels,
            successors: successors.into_boxed_slice(),
            predecessors: predecessors
                .into_iter()
                .map(Vec::into_boxed_slice)
                .collect(),
            num_arcs,
            num_sinks,
        })
    }

    /// Returns the number of nodes (pages).
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of arcs (links).
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    /// Returns the number of sinks, that is, nodes without successors.
    #[inline(always)]
    pub fn num_sinks(&self) -> usize {
        self.num_sinks
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    /// Returns the labels of all nodes, in node order (which is
    /// lexicographical).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the node with the given label, if any.
    pub fn node_id(&self, label: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|probe| probe.as_str().cmp(label))
            .ok()
    }

    /// Returns the sorted successors of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }

    /// Returns the sorted predecessors of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline(always)]
    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.predecessors[node]
    }

    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.successors[node].len()
    }

    #[inline(always)]
    pub fn is_sink(&self, node: usize) -> bool {
        self.successors[node].is_empty()
    }

    /// Returns an error if `node` is not a node of this corpus.
    pub(crate) fn check_node(&self, node: usize) -> Result<(), RankError> {
        if node < self.num_nodes() {
            Ok(())
        } else {
            Err(RankError::UnknownNode {
                node,
                num_nodes: self.num_nodes(),
            })
        }
    }

    /// Returns an error if the corpus is empty.
    pub(crate) fn check_not_empty(&self) -> Result<(), RankError> {
        if self.is_empty() {
            Err(RankError::EmptyCorpus)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() -> Result<(), RankError> {
        let corpus = Corpus::from_links([
            ("c", vec!["a", "b"]),
            ("a", vec!["b", "c"]),
            ("b", vec![]),
        ])?;
        assert_eq!(corpus.labels(), &["a", "b", "c"]);
        assert_eq!(corpus.successors(0), &[1, 2]);
        assert_eq!(corpus.successors(2), &[0, 1]);
        assert_eq!(corpus.predecessors(0), &[2]);
        assert_eq!(corpus.predecessors(1), &[0, 2]);
        assert_eq!(corpus.predecessors(2), &[0]);
        assert_eq!(corpus.num_sinks(), 1);
        Ok(())
    }

    #[test]
    fn test_merge_sources() -> Result<(), RankError> {
        let corpus = Corpus::from_links([
            ("a", vec!["b"]),
            ("b", vec![]),
            ("a", vec!["b", "c"]),
            ("c", vec![]),
        ])?;
        assert_eq!(corpus.num_nodes(), 3);
        assert_eq!(corpus.num_arcs(), 2);
        assert_eq!(corpus.successors(0), &[1, 2]);
        Ok(())
    }
}
