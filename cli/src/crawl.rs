/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Building a [`Corpus`] from a directory of HTML pages.

use anyhow::{Context, Result, ensure};
use linkrank::graph::Corpus;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Matches anchors, capturing the value of their `href` attribute.
const ANCHOR_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Scans a directory for HTML pages and extracts their links.
///
/// Every regular file whose name ends with `.html` is a page, labelled by its
/// file name; subdirectories are not scanned. The links of a page are the
/// `href` values of its anchors that name another page of the directory:
/// links of a page to itself, and links to anything else, are discarded.
pub fn crawl(dir: impl AsRef<Path>) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let dir = dir.as_ref();
    let anchor = Regex::new(ANCHOR_PATTERN)?;
    let mut pages = BTreeMap::new();

    for entry in
        std::fs::read_dir(dir).with_context(|| format!("Could not read {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Could not read {}", dir.display()))?;
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::warn!("Skipping {}: the file name is not UTF-8", path.display());
            continue;
        };
        if !file_name.ends_with(".html") || !path.is_file() {
            continue;
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let links: BTreeSet<String> = anchor
            .captures_iter(&contents)
            .map(|c| c[1].to_owned())
            .filter(|link| link != file_name)
            .collect();
        log::debug!("{}: {} link(s)", file_name, links.len());
        pages.insert(file_name.to_owned(), links);
    }

    // Only keep links to pages of the corpus
    let labels: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|link| labels.contains(link));
    }

    Ok(pages)
}

/// Crawls a directory of HTML pages and returns the resulting [`Corpus`].
///
/// Fails if the directory contains no page.
pub fn load_corpus(dir: impl AsRef<Path>) -> Result<Corpus> {
    let dir = dir.as_ref();
    log::info!("Crawling {}", dir.display());
    let corpus = Corpus::from_links(crawl(dir)?)
        .with_context(|| format!("Could not build the corpus of {}", dir.display()))?;
    ensure!(
        !corpus.is_empty(),
        "The directory {} contains no HTML page",
        dir.display()
    );
    log::info!(
        "Found {} page(s), {} link(s), {} sink(s)",
        corpus.num_nodes(),
        corpus.num_arcs(),
        corpus.num_sinks()
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_pattern() {
        let anchor = Regex::new(ANCHOR_PATTERN).unwrap();
        let html = r#"<p><a href="1.html">one</a> <a class="x" href="2.html">two</a>
            <A HREF="3.html">ignored</A> <a
            href="4.html">four</a> <link href="5.html"></p>"#;
        let links: Vec<&str> = anchor
            .captures_iter(html)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(links, vec!["1.html", "2.html", "4.html"]);
    }
}
