//! Tabular export of analysis outputs
//!
//! Geospatial formats (GPKG, Shapefile, GeoJSON geometry reconstruction)
//! belong to external collaborators; this module only serializes the
//! identifier/scalar outputs of the core.

use std::io::Write;

use crate::analysis::comparison::ComparisonReport;
use crate::analysis::corridors::CorridorEntry;
use crate::routing::batch::OptimizationResult;
use crate::Error;

/// Writes a batch of optimization results as a JSON array.
///
/// # Errors
///
/// Returns an error when serialization or the underlying writer fails.
pub fn write_results_json<W: Write>(writer: W, results: &[OptimizationResult]) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

/// Writes a comparison report as a one-row CSV table.
///
/// # Errors
///
/// Returns an error when serialization or the underlying writer fails.
pub fn write_comparison_csv<W: Write>(writer: W, report: &ComparisonReport) -> Result<(), Error> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.serialize(report)?;
    csv.flush()?;
    Ok(())
}

/// Writes a corridor ranking as CSV, one row per corridor in ranking
/// order.
///
/// # Errors
///
/// Returns an error when serialization or the underlying writer fails.
pub fn write_corridors_csv<W: Write>(writer: W, corridors: &[CorridorEntry]) -> Result<(), Error> {
    let mut csv = csv::Writer::from_writer(writer);
    for entry in corridors {
        csv.serialize(entry)?;
    }
    csv.flush()?;
    Ok(())
}
