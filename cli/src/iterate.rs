/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::crawl::load_corpus;
use crate::present::{RankReport, write_reports};
use crate::{
    CorpusArgs, GlobalArgs, IterationArgs, OutputArgs, check_damping, get_progress_logger,
    get_thread_pool,
};
use anyhow::{Context, Result};
use clap::Parser;
use linkrank::graph::Corpus;
use linkrank::rank::IterativeRank;

#[derive(Parser, Debug)]
#[command(
    name = "iterate",
    about = "Compute PageRank by iterating the PageRank recurrence until convergence.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub corpus: CorpusArgs,

    #[clap(flatten)]
    pub iteration: IterationArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    check_damping(args.corpus.damping)?;

    let corpus = load_corpus(&args.corpus.corpus)?;
    let report = iterate(&global_args, &corpus, args.corpus.damping, &args.iteration)?;
    write_reports(
        args.output.writer()?,
        &[report],
        args.output.fmt,
        args.output.precision,
    )
}

/// Runs the iterative estimator on a corpus.
pub fn iterate(
    global_args: &GlobalArgs,
    corpus: &Corpus,
    damping: f64,
    args: &IterationArgs,
) -> Result<RankReport> {
    let mut pl = get_progress_logger(global_args);
    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;

    let mut pr = IterativeRank::new(corpus);
    pr.damping(damping).max_iter(args.max_iter);
    let table = thread_pool
        .install(|| pr.run_with_logging(&mut pl))
        .context("Iteration failed")?;

    Ok(RankReport::iteration(table, damping))
}
