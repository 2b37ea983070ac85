/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use linkrank_cli::crawl::{crawl, load_corpus};
use std::collections::BTreeSet;
use std::path::Path;

fn write_page(dir: &Path, name: &str, links: &[&str]) -> Result<()> {
    let body: String = links
        .iter()
        .map(|link| format!("<li><a href=\"{link}\">{link}</a></li>\n"))
        .collect();
    std::fs::write(
        dir.join(name),
        format!("<!DOCTYPE html>\n<html><body><ul>\n{body}</ul></body></html>\n"),
    )?;
    Ok(())
}

fn set(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|&s| s.to_owned()).collect()
}

#[test]
fn test_crawl() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_page(dir.path(), "1.html", &["2.html", "1.html", "https://example.com/"])?;
    write_page(dir.path(), "2.html", &["1.html", "3.html", "3.html"])?;
    write_page(dir.path(), "3.html", &["missing.html"])?;
    std::fs::write(dir.path().join("notes.txt"), "<a href=\"1.html\">x</a>")?;
    std::fs::create_dir(dir.path().join("sub.html"))?;

    let pages = crawl(dir.path())?;
    assert_eq!(
        pages.keys().cloned().collect::<Vec<_>>(),
        vec!["1.html", "2.html", "3.html"]
    );
    // Self-links and links outside the corpus are dropped
    assert_eq!(pages["1.html"], set(&["2.html"]));
    assert_eq!(pages["2.html"], set(&["1.html", "3.html"]));
    assert_eq!(pages["3.html"], set(&[]));
    Ok(())
}

#[test]
fn test_load_corpus() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_page(dir.path(), "a.html", &["b.html", "c.html"])?;
    write_page(dir.path(), "b.html", &["a.html"])?;
    write_page(dir.path(), "c.html", &[])?;

    let corpus = load_corpus(dir.path())?;
    assert_eq!(corpus.num_nodes(), 3);
    assert_eq!(corpus.num_arcs(), 3);
    assert_eq!(corpus.num_sinks(), 1);
    assert!(corpus.is_sink(corpus.node_id("c.html").unwrap()));
    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(crawl(dir.path())?.is_empty());
    assert!(load_corpus(dir.path()).is_err());
    Ok(())
}

#[test]
fn test_missing_directory() {
    assert!(crawl("/this/directory/does/not/exist").is_err());
}
