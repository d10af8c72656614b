use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PercolationError;
use crate::grid::PercolationGrid;
use crate::stats;

/// Monte Carlo estimate of the percolation threshold: the fraction of sites
/// that must be opened, uniformly at random, before an N-by-N grid percolates.
#[derive(Debug, Clone)]
pub struct PercolationExperiment {
    size: usize,
    thresholds: Vec<f64>,
}

/// The four summary statistics of a finished experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

impl PercolationExperiment {
    /// Runs `trials` independent trials on `size`-by-`size` grids, drawing
    /// coordinates from `rng`.
    pub fn new<R: Rng + ?Sized>(size: usize, trials: usize, rng: &mut R) -> Result<PercolationExperiment, PercolationError> {
        if size == 0 {
            return Err(PercolationError::InvalidArgument { name: "grid size", value: size });
        }
        if trials == 0 {
            return Err(PercolationError::InvalidArgument { name: "trial count", value: trials });
        }

        let mut thresholds = Vec::with_capacity(trials);
        for t in 0..trials {
            let threshold = run_trial(size, rng)?;
            debug!("trial {}/{}: threshold {:.6}", t + 1, trials, threshold);
            thresholds.push(threshold);
        }

        let experiment = PercolationExperiment { size, thresholds };
        info!("{}x{} grid, {} trials: mean {:.6}, stddev {:.6}",
            size, size, trials, experiment.mean(), experiment.stddev());
        Ok(experiment)
    }

    /// Same as [`PercolationExperiment::new`] with a `StdRng` seeded from `seed`.
    pub fn with_seed(size: usize, trials: usize, seed: u64) -> Result<PercolationExperiment, PercolationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        PercolationExperiment::new(size, trials, &mut rng)
    }

    pub fn grid_size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial open fractions, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds)
    }

    /// Sample standard deviation; NaN when there was a single trial.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.thresholds)
    }

    pub fn confidence_low(&self) -> f64 {
        self.interval().0
    }

    pub fn confidence_high(&self) -> f64 {
        self.interval().1
    }

    pub fn summary(&self) -> Summary {
        let (confidence_low, confidence_high) = self.interval();
        Summary {
            size: self.size,
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_low,
            confidence_high,
        }
    }

    fn interval(&self) -> (f64, f64) {
        stats::confidence_interval(self.mean(), self.stddev(), self.trials())
    }
}

/// Opens random blocked sites of a fresh grid until it percolates and returns
/// the fraction of sites opened. Draws are with replacement; an already open
/// site is simply drawn again.
fn run_trial<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<f64, PercolationError> {
    let mut grid = PercolationGrid::new(size)?;
    let mut opened = 0usize;
    while !grid.percolates() {
        let row = rng.gen_range(1..=size);
        let col = rng.gen_range(1..=size);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
            opened += 1;
        }
    }
    Ok(opened as f64 / (size * size) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_arguments() {
        assert_eq!(
            PercolationExperiment::with_seed(0, 10, 1).unwrap_err(),
            PercolationError::InvalidArgument { name: "grid size", value: 0 }
        );
        assert_eq!(
            PercolationExperiment::with_seed(5, 0, 1).unwrap_err(),
            PercolationError::InvalidArgument { name: "trial count", value: 0 }
        );
    }

    #[test]
    fn single_site_always_needs_one_open() {
        let exp = PercolationExperiment::with_seed(1, 25, 3).unwrap();
        assert_eq!(exp.mean(), 1.0);
        assert_eq!(exp.stddev(), 0.0);
        assert_eq!(exp.confidence_low(), 1.0);
        assert_eq!(exp.confidence_high(), 1.0);
    }

    #[test]
    fn single_trial_has_undefined_spread() {
        let exp = PercolationExperiment::with_seed(4, 1, 9).unwrap();
        assert_eq!(exp.trials(), 1);
        assert!(exp.mean() > 0.0 && exp.mean() <= 1.0);
        assert!(exp.stddev().is_nan());
        assert!(exp.confidence_low().is_nan());
        assert!(exp.confidence_high().is_nan());
    }

    #[test]
    fn estimate_is_bracketed_by_its_interval() {
        let exp = PercolationExperiment::with_seed(20, 100, 42).unwrap();
        let mean = exp.mean();
        assert!(mean > 0.0 && mean < 1.0);
        assert!(exp.confidence_low() <= mean);
        assert!(mean <= exp.confidence_high());
        assert_eq!(exp.thresholds().len(), 100);
        assert_eq!(exp.grid_size(), 20);
    }

    #[test]
    fn interval_narrows_with_more_trials() {
        let short = PercolationExperiment::with_seed(20, 100, 42).unwrap().summary();
        let long = PercolationExperiment::with_seed(20, 1000, 42).unwrap().summary();
        let short_width = short.confidence_high - short.confidence_low;
        let long_width = long.confidence_high - long.confidence_low;
        assert!(long_width < short_width);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let a = PercolationExperiment::with_seed(8, 20, 7).unwrap();
        let b = PercolationExperiment::with_seed(8, 20, 7).unwrap();
        assert_eq!(a.thresholds(), b.thresholds());
    }

    #[test]
    fn thresholds_are_multiples_of_one_site() {
        let exp = PercolationExperiment::with_seed(5, 30, 11).unwrap();
        for &t in exp.thresholds() {
            let sites = t * 25.0;
            assert!((sites - sites.round()).abs() < 1e-9);
            // a 5x5 grid needs at least one site per row
            assert!(sites >= 5.0 - 1e-9);
        }
    }
}
