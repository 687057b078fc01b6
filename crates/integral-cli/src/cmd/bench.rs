// crates/integral-cli/src/cmd/bench.rs

use clap::{Args, ValueEnum};
use integral_core::digest::table_digest;
use integral_core::verify::cross_validate;
use integral_core::{
    build_parallel, build_parallel_with, build_sequential, BuildConfig, ParallelStrategy,
};
use log::info;

use crate::cmd::args::{resolve_threads, GridArgs};
use crate::stats::{time_runs, TimingStats};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Sequential builder only
    Single,
    /// Threaded parallel builder only
    Multi,
    /// Sequential and threaded, with speedup
    Both,
    /// Rayon backend (also cross-validated before timing)
    Rayon,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Worker threads (default: hardware concurrency; values < 1 mean 1)
    #[arg(long, allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Timed runs per method (values < 1 mean 1)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub runs: i64,

    /// Which builders to time
    #[arg(long, value_enum, default_value_t = Method::Both)]
    pub method: Method,
}

pub fn run(args: BenchArgs) -> anyhow::Result<()> {
    let threads = resolve_threads(args.threads);
    let runs = args.runs.max(1) as usize;
    let (w, h) = (args.grid.width, args.grid.height);

    eprintln!("--- bench ---");
    eprintln!("image           = {} x {}", w, h);
    eprintln!("threads         = {}", threads);
    eprintln!("runs            = {}", runs);
    eprintln!("seed            = {}", args.grid.seed);

    let grid = args.grid.grid();

    // Warm-up doubles as the correctness gate: nothing is timed unless the
    // parallel result is identical to the sequential one.
    let single = build_sequential(&grid);
    let multi = build_parallel(&grid, threads);
    cross_validate(&single, &multi, "multi")?;

    let rayon_cfg = BuildConfig::new(threads, ParallelStrategy::Rayon);
    if args.method == Method::Rayon {
        let r = build_parallel_with(&grid, &rayon_cfg)?;
        cross_validate(&single, &r, "rayon")?;
    }
    info!("cross-validation passed for {}x{} with {} threads", w, h, threads);
    eprintln!("table_total     = {}", single.total());
    eprintln!("table_digest    = {}", table_digest(&single));

    eprintln!("--- timings ---");
    let mut t_single = None;
    let mut t_multi = None;
    if matches!(args.method, Method::Both | Method::Single) {
        let s = time_runs(runs, || build_sequential(&grid));
        report("single", &s);
        t_single = Some(s);
    }
    if matches!(args.method, Method::Both | Method::Multi) {
        let s = time_runs(runs, || build_parallel(&grid, threads));
        report("multi", &s);
        t_multi = Some(s);
    }
    if args.method == Method::Rayon {
        let mut failed = None;
        let s = time_runs(runs, || {
            if let Err(e) = build_parallel_with(&grid, &rayon_cfg) {
                failed = Some(e);
            }
        });
        if let Some(e) = failed {
            return Err(e.into());
        }
        report("rayon", &s);
    }

    if let (Some(s), Some(m)) = (t_single, t_multi) {
        if s.mean > 0.0 && m.mean > 0.0 {
            eprintln!("speedup         = {:.3}x (single / multi)", s.mean / m.mean);
        }
    }

    Ok(())
}

fn report(name: &str, s: &TimingStats) {
    eprintln!(
        "{:<15} = mean={:.6} s  stddev={:.6} s  runs={}",
        name, s.mean, s.stddev, s.runs
    );
}
