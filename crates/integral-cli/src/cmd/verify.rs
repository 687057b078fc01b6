// crates/integral-cli/src/cmd/verify.rs

use clap::Args;
use integral_core::verify::{check_random_rects, check_table, cross_validate};
use integral_core::{
    build_naive, build_parallel_with, build_sequential, BuildConfig, ParallelStrategy,
};

use crate::cmd::args::GridArgs;

/// Above this many cells the naive oracle is skipped.
const NAIVE_MAX_CELLS: usize = 64 * 64;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Check every worker count from 1 up to this value
    #[arg(long, default_value_t = 8)]
    pub max_threads: usize,

    /// Random rectangle queries to check against direct summation
    #[arg(long, default_value_t = 100)]
    pub rects: usize,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let grid = args.grid.grid();
    let (w, h) = (grid.width(), grid.height());

    eprintln!("--- verify ---");
    eprintln!("image           = {} x {}", w, h);
    eprintln!("seed            = {}", args.grid.seed);

    let reference = build_sequential(&grid);

    if w * h <= NAIVE_MAX_CELLS {
        cross_validate(&reference, &build_naive(&grid), "naive")?;
        eprintln!("naive_oracle    = ok");
    } else {
        eprintln!("naive_oracle    = skipped ({} cells > {})", w * h, NAIVE_MAX_CELLS);
    }

    let max_threads = args.max_threads.max(1);
    for strategy in ParallelStrategy::ALL {
        for t in 1..=max_threads {
            let got = build_parallel_with(&grid, &BuildConfig::new(t, strategy))?;
            cross_validate(&reference, &got, &format!("{}(t={})", strategy, t))?;
        }
        eprintln!("{:<15} = ok (t=1..={})", strategy.name(), max_threads);
    }

    check_table(&grid, &reference)?;
    eprintln!("monotone_total  = ok");

    let checked = check_random_rects(&grid, &reference, args.rects, args.grid.seed)?;
    eprintln!("rect_queries    = ok ({} checked)", checked);

    eprintln!("verify ok");
    Ok(())
}
