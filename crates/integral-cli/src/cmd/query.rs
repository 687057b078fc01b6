// crates/integral-cli/src/cmd/query.rs

use clap::Args;
use integral_core::{build_parallel_with, BuildConfig, Rect};

use crate::cmd::args::{resolve_threads, GridArgs, Strategy};

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Worker threads (default: hardware concurrency; values < 1 mean 1)
    #[arg(long, allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Parallel backend used to build the table
    #[arg(long, value_enum, default_value_t = Strategy::Threads)]
    pub strategy: Strategy,

    /// Left column (inclusive)
    #[arg(long)]
    pub x0: usize,

    /// Top row (inclusive)
    #[arg(long)]
    pub y0: usize,

    /// Right column (inclusive)
    #[arg(long)]
    pub x1: usize,

    /// Bottom row (inclusive)
    #[arg(long)]
    pub y1: usize,
}

pub fn run(args: QueryArgs) -> anyhow::Result<()> {
    let grid = args.grid.grid();
    let cfg = BuildConfig::new(resolve_threads(args.threads), args.strategy.into());
    let table = build_parallel_with(&grid, &cfg)?;

    let rect = Rect::new(args.x0, args.y0, args.x1, args.y1);
    let sum = table.rect_sum(rect)?;

    eprintln!(
        "query ok: rect=({},{})-({},{}) area={} strategy={} workers={}",
        rect.x0,
        rect.y0,
        rect.x1,
        rect.y1,
        rect.area(),
        cfg.strategy,
        cfg.workers
    );
    println!("{}", sum);
    Ok(())
}
