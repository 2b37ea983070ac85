/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::crawl::load_corpus;
use crate::present::{RankReport, write_reports};
use crate::{CorpusArgs, GlobalArgs, OutputArgs, SamplingArgs, check_damping, get_progress_logger};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use linkrank::graph::Corpus;
use linkrank::rank::Sampler;

#[derive(Parser, Debug)]
#[command(
    name = "sample",
    about = "Estimate PageRank by sampling a random-surfer walk.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub corpus: CorpusArgs,

    #[clap(flatten)]
    pub sampling: SamplingArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    check_damping(args.corpus.damping)?;
    ensure!(
        args.sampling.samples > 0,
        "The number of samples must be at least 1"
    );

    let corpus = load_corpus(&args.corpus.corpus)?;
    let report = sample(&global_args, &corpus, args.corpus.damping, &args.sampling)?;
    write_reports(
        args.output.writer()?,
        &[report],
        args.output.fmt,
        args.output.precision,
    )
}

/// Runs the sampling estimator on a corpus.
pub fn sample(
    global_args: &GlobalArgs,
    corpus: &Corpus,
    damping: f64,
    args: &SamplingArgs,
) -> Result<RankReport> {
    let mut pl = get_progress_logger(global_args);
    let mut rng = args.rng();
    if let Some(seed) = args.seed {
        log::info!("Seed: {}", seed);
    }

    let table = Sampler::new(corpus)
        .damping(damping)
        .samples(args.samples)
        .run_with_logging(&mut rng, &mut pl)
        .context("Sampling failed")?;

    Ok(RankReport::sampling(table, damping, args.samples))
}
