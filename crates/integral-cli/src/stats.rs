// crates/integral-cli/src/stats.rs

use std::time::Instant;

/// Wall-clock seconds over repeated runs. `stddev` is the population form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimingStats {
    pub mean: f64,
    pub stddev: f64,
    pub runs: usize,
}

impl TimingStats {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        Self {
            mean,
            stddev: var.sqrt(),
            runs: samples.len(),
        }
    }
}

/// Time `runs` calls of `f`. The output of each call is passed through
/// `black_box` so the build is not optimized away.
pub fn time_runs<T>(runs: usize, mut f: impl FnMut() -> T) -> TimingStats {
    let mut samples = Vec::with_capacity(runs);
    for _ in 0..runs {
        let t0 = Instant::now();
        std::hint::black_box(f());
        samples.push(t0.elapsed().as_secs_f64());
    }
    TimingStats::from_samples(&samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_population_stddev() {
        let s = TimingStats::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.stddev - 2.0).abs() < 1e-12);
        assert_eq!(s.runs, 8);
    }

    #[test]
    fn empty_samples_are_zero() {
        assert_eq!(TimingStats::from_samples(&[]), TimingStats::default());
    }

    #[test]
    fn time_runs_counts_runs() {
        let mut calls = 0;
        let s = time_runs(3, || calls += 1);
        assert_eq!(calls, 3);
        assert_eq!(s.runs, 3);
    }
}
