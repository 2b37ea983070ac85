/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::crawl::load_corpus;
use crate::iterate::iterate;
use crate::present::write_reports;
use crate::sample::sample;
use crate::{CorpusArgs, GlobalArgs, IterationArgs, OutputArgs, SamplingArgs, check_damping};
use anyhow::{Result, ensure};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "run",
    about = "Rank a corpus with both estimators, sampling first.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub corpus: CorpusArgs,

    #[clap(flatten)]
    pub sampling: SamplingArgs,

    #[clap(flatten)]
    pub iteration: IterationArgs,

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
    let damping = args.corpus.damping;
    let reports = [
        sample(&global_args, &corpus, damping, &args.sampling)?,
        iterate(&global_args, &corpus, damping, &args.iteration)?,
    ];
    write_reports(
        args.output.writer()?,
        &reports,
        args.output.fmt,
        args.output.precision,
    )
}
