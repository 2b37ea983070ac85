/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use linkrank::RankError;
use linkrank::graph::Corpus;
use linkrank::rank::transition;

/// Builds a corpus in which page *i* links to the pages *i* + 1, …, *i* + *i*
/// modulo `n`, so that page 0 is a sink and outdegrees vary.
fn build_corpus(n: usize) -> Corpus {
    Corpus::from_links((0..n).map(|i| {
        let links: Vec<String> = (1..=i.min(n - 1))
            .map(|d| format!("{}.html", (i + d) % n))
            .collect();
        (format!("{i}.html"), links)
    }))
    .unwrap()
}

#[test]
fn test_stochastic() -> Result<(), RankError> {
    for n in [1, 2, 3, 10, 37] {
        let corpus = build_corpus(n);
        for damping in [0.0, 0.25, 0.5, 0.85, 1.0] {
            for node in 0..n {
                let dist = transition(&corpus, node, damping)?;
                assert_eq!(dist.len(), n);
                assert!(dist.iter().all(|&p| p >= 0.0));
                assert!(
                    (dist.sum() - 1.0).abs() < 1E-9,
                    "n={n} damping={damping} node={node}: sum={}",
                    dist.sum()
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_sink_is_uniform() -> Result<(), RankError> {
    let corpus = build_corpus(10);
    let sink = corpus.node_id("0.html").unwrap();
    assert!(corpus.is_sink(sink));
    for damping in [0.0, 0.5, 0.85, 1.0] {
        let dist = transition(&corpus, sink, damping)?;
        assert!(dist.iter().all(|&p| (p - 0.1).abs() < 1E-12));
    }
    Ok(())
}

#[test]
fn test_link_shares() -> Result<(), RankError> {
    let corpus = Corpus::from_links([
        ("1.html", vec!["2.html", "3.html"]),
        ("2.html", vec!["3.html"]),
        ("3.html", vec!["2.html"]),
        ("4.html", vec!["2.html"]),
    ])?;
    let dist = transition(&corpus, 0, 0.85)?;
    let base = 0.15 / 4.0;
    let expected = [base, base + 0.425, base + 0.425, base];
    for (p, e) in dist.iter().zip(expected) {
        assert!((p - e).abs() < 1E-12, "{p} != {e}");
    }
    Ok(())
}

#[test]
fn test_single_node() -> Result<(), RankError> {
    let corpus = Corpus::from_links([("a", Vec::<&str>::new())])?;
    for damping in [0.0, 0.85, 1.0] {
        assert_eq!(&*transition(&corpus, 0, damping)?, &[1.0]);
    }
    Ok(())
}
