//! Performance metrics over a run's wealth history.
//!
//! Converts a wealth series into step-over-step percentage returns and
//! summarizes them as total PnL and an annualized Sharpe ratio. Degenerate
//! series (fewer than two usable returns, or zero return variance) yield a
//! `(0.0, 0.0)` sentinel rather than an error.

use crate::types::primitives::Price;

/// Annualization factor applied to the Sharpe ratio.
///
/// Matches the default step count of a run rather than a calendar
/// convention.
pub const DEFAULT_ANNUALIZATION_FACTOR: f64 = 200.0;

/// Total PnL and annualized Sharpe ratio for one run.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(
        serde::Serialize,
        serde::Deserialize,
        pretty_simple_display::DebugPretty,
        pretty_simple_display::DisplaySimple
    )
)]
pub struct PerformanceSummary {
    /// Final wealth minus initial wealth.
    pub pnl: f64,
    /// Mean return over return standard deviation, annualized.
    pub sharpe: f64,
}

/// Step-over-step percentage returns of a wealth series.
///
/// The first entry has no predecessor and is dropped, as is any entry whose
/// predecessor is exactly zero (the percentage change is undefined there).
#[must_use]
pub fn pct_change(series: &[f64]) -> Vec<f64> {
    series
        .windows(2)
        .filter(|pair| pair[0] != 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Arithmetic mean of a sample. Returns zero for an empty sample.
#[must_use]
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns zero for samples with fewer than two observations.
#[must_use]
pub fn sample_std(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return 0.0;
    }
    let m = mean(sample);
    let variance = sample.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (sample.len() - 1) as f64;
    variance.sqrt()
}

/// Summarizes a wealth history as (PnL, annualized Sharpe).
///
/// Returns the `(0.0, 0.0)` sentinel when the return series is too short
/// or has zero variance, so a flat wealth curve never divides by zero.
#[must_use]
pub fn performance_summary(wealth_history: &[Price], annualization_factor: f64) -> PerformanceSummary {
    let returns = pct_change(wealth_history);
    if returns.len() < 2 {
        return PerformanceSummary {
            pnl: 0.0,
            sharpe: 0.0,
        };
    }
    let std = sample_std(&returns);
    if std == 0.0 {
        return PerformanceSummary {
            pnl: 0.0,
            sharpe: 0.0,
        };
    }
    let first = wealth_history[0];
    let last = wealth_history[wealth_history.len() - 1];
    PerformanceSummary {
        pnl: last - first,
        sharpe: mean(&returns) / std * annualization_factor.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_change_drops_first_entry() {
        let returns = pct_change(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 1e-12);
        assert!((returns[1] - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_pct_change_skips_zero_denominator() {
        let returns = pct_change(&[0.0, 5.0, 10.0]);
        assert_eq!(returns, vec![1.0]);
    }

    #[test]
    fn test_mean_and_sample_std() {
        let sample = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&sample) - 2.5).abs() < 1e-12);
        // Sample variance of 1..4 is 5/3.
        assert!((sample_std(&sample) - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_of_short_sample_is_zero() {
        assert_eq!(sample_std(&[]), 0.0);
        assert_eq!(sample_std(&[1.0]), 0.0);
    }

    #[test]
    fn test_constant_wealth_yields_sentinel() {
        let summary = performance_summary(&[5.0, 5.0, 5.0, 5.0], DEFAULT_ANNUALIZATION_FACTOR);
        assert_eq!(summary.pnl, 0.0);
        assert_eq!(summary.sharpe, 0.0);
    }

    #[test]
    fn test_short_history_yields_sentinel() {
        let summary = performance_summary(&[100.0, 101.0], DEFAULT_ANNUALIZATION_FACTOR);
        assert_eq!(summary.pnl, 0.0);
        assert_eq!(summary.sharpe, 0.0);
    }

    #[test]
    fn test_summary_of_varying_wealth() {
        let wealth = [100.0, 110.0, 99.0, 105.0];
        let summary = performance_summary(&wealth, DEFAULT_ANNUALIZATION_FACTOR);
        assert!((summary.pnl - 5.0).abs() < 1e-12);
        let returns = pct_change(&wealth);
        let expected = mean(&returns) / sample_std(&returns) * 200.0_f64.sqrt();
        assert!((summary.sharpe - expected).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_wealth_yields_sentinel() {
        let summary = performance_summary(&[0.0, 0.0, 0.0], DEFAULT_ANNUALIZATION_FACTOR);
        assert_eq!(summary.pnl, 0.0);
        assert_eq!(summary.sharpe, 0.0);
    }
}
