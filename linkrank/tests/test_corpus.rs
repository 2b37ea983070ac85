/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use linkrank::RankError;
use linkrank::graph::Corpus;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[test]
fn test_from_map() -> Result<(), RankError> {
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    pages.insert("b.html".into(), BTreeSet::from(["a.html".to_owned()]));
    pages.insert(
        "a.html".into(),
        BTreeSet::from(["b.html".to_owned(), "c.html".to_owned()]),
    );
    pages.insert("c.html".into(), BTreeSet::new());

    let corpus = Corpus::from_links(pages)?;
    assert_eq!(corpus.num_nodes(), 3);
    assert_eq!(corpus.num_arcs(), 3);
    assert_eq!(corpus.num_sinks(), 1);
    assert_eq!(corpus.label(0), "a.html");
    assert_eq!(corpus.node_id("c.html"), Some(2));
    assert_eq!(corpus.node_id("d.html"), None);
    assert_eq!(corpus.outdegree(0), 2);
    assert_eq!(corpus.predecessors(0), &[1]);
    Ok(())
}

#[test]
fn test_from_hash_map() -> Result<(), RankError> {
    let pages = HashMap::from([("x", vec!["y", "y"]), ("y", vec!["x"])]);
    let corpus = Corpus::from_links(pages)?;
    assert_eq!(corpus.labels(), &["x", "y"]);
    // Duplicate links are counted once
    assert_eq!(corpus.num_arcs(), 2);
    Ok(())
}

#[test]
fn test_dangling_link() {
    let result = Corpus::from_links([("a", vec!["b"]), ("b", vec!["c"])]);
    assert_eq!(
        result,
        Err(RankError::DanglingLink {
            page: "b".into(),
            link: "c".into()
        })
    );
}

#[test]
fn test_empty() -> Result<(), RankError> {
    let corpus = Corpus::from_links(Vec::<(String, Vec<String>)>::new())?;
    assert!(corpus.is_empty());
    assert_eq!(corpus.num_arcs(), 0);
    Ok(())
}
