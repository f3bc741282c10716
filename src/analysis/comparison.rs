//! Cross-scenario comparison
//!
//! Compares an optimized batch against a baseline (typically vehicular)
//! batch over the same OD pairs.

use serde::Serialize;

use crate::routing::batch::OptimizationResult;
use crate::Error;

/// Summary comparison of two optimization batches.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub mean_impedance_optimized: f64,
    pub mean_impedance_baseline: f64,
    /// Negative when the optimized scenario costs more under its own
    /// metric than the baseline does under the baseline's.
    pub impedance_reduction_pct: f64,
    pub mean_distance_optimized_m: f64,
    pub mean_distance_baseline_m: f64,
    pub distance_deviation_pct: f64,
}

/// Compares two scenario batches.
///
/// # Errors
///
/// Returns [`Error::EmptyBatch`] when either batch is empty; the mean of
/// nothing is undefined and the comparison must fail rather than divide
/// by zero.
pub fn compare_scenarios(
    optimized: &[OptimizationResult],
    baseline: &[OptimizationResult],
) -> Result<ComparisonReport, Error> {
    if optimized.is_empty() {
        return Err(Error::EmptyBatch("optimized"));
    }
    if baseline.is_empty() {
        return Err(Error::EmptyBatch("baseline"));
    }

    let mean_impedance_optimized = mean(optimized.iter().map(|r| r.total_impedance));
    let mean_impedance_baseline = mean(baseline.iter().map(|r| r.total_impedance));
    let mean_distance_optimized_m = mean(optimized.iter().map(|r| r.metrics.total_distance_m));
    let mean_distance_baseline_m = mean(baseline.iter().map(|r| r.metrics.total_distance_m));

    Ok(ComparisonReport {
        mean_impedance_optimized,
        mean_impedance_baseline,
        impedance_reduction_pct: (mean_impedance_baseline - mean_impedance_optimized)
            / mean_impedance_baseline
            * 100.0,
        mean_distance_optimized_m,
        mean_distance_baseline_m,
        distance_deviation_pct: (mean_distance_optimized_m - mean_distance_baseline_m)
            / mean_distance_baseline_m
            * 100.0,
    })
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    values.sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::dijkstra::Route;
    use crate::routing::metrics::RouteMetricsRecord;

    fn result(impedance: f64, distance_m: f64) -> OptimizationResult {
        let mut metrics = RouteMetricsRecord::empty();
        metrics.total_distance_m = distance_m;
        OptimizationResult {
            origin: "o".into(),
            destination: "d".into(),
            route: Route::new(vec!["o".into(), "d".into()]),
            total_impedance: impedance,
            metrics,
        }
    }

    #[test]
    fn identical_batches_compare_to_zero() {
        let batch = vec![result(10.0, 2000.0), result(20.0, 4000.0)];
        let report = compare_scenarios(&batch, &batch).unwrap();
        assert!(report.impedance_reduction_pct.abs() < 1e-9);
        assert!(report.distance_deviation_pct.abs() < 1e-9);
    }

    #[test]
    fn reduction_and_deviation_formulas() {
        let optimized = vec![result(8.0, 2200.0)];
        let baseline = vec![result(10.0, 2000.0)];
        let report = compare_scenarios(&optimized, &baseline).unwrap();
        assert!((report.impedance_reduction_pct - 20.0).abs() < 1e-9);
        assert!((report.distance_deviation_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn reduction_may_be_negative() {
        let optimized = vec![result(12.0, 2000.0)];
        let baseline = vec![result(10.0, 2000.0)];
        let report = compare_scenarios(&optimized, &baseline).unwrap();
        assert!(report.impedance_reduction_pct < 0.0);
    }

    #[test]
    fn empty_batch_is_a_hard_failure() {
        let batch = vec![result(10.0, 2000.0)];
        assert!(matches!(
            compare_scenarios(&[], &batch),
            Err(Error::EmptyBatch("optimized"))
        ));
        assert!(matches!(
            compare_scenarios(&batch, &[]),
            Err(Error::EmptyBatch("baseline"))
        ));
    }
}
