//! Segment-table ingestion
//!
//! The segment table is the flattened attribute table of the network
//! layer; producing it from a geospatial source is an external
//! collaborator's concern. Missing attribute columns take the documented
//! defaults: infrastructure code 3 (the minimum-risk shared-street
//! band), flat slope, no traffic, 30 km/h vehicle speed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::model::{InfraType, Segment};
use crate::Error;

#[derive(Debug, Deserialize)]
struct RawSegment {
    a_id: String,
    b_id: String,
    length_m: f64,
    #[serde(default = "default_infra_code")]
    infra_type: i64,
    #[serde(default)]
    slope_pct: f64,
    #[serde(default)]
    traffic_volume: f64,
    #[serde(default = "default_vehicle_speed")]
    vehicle_speed_kph: f64,
}

fn default_infra_code() -> i64 {
    3
}

fn default_vehicle_speed() -> f64 {
    30.0
}

impl RawSegment {
    fn validate(&self, row: usize) -> Result<(), Error> {
        if self.length_m < 0.0 {
            return Err(Error::InvalidData(format!(
                "segment row {row}: negative length {}",
                self.length_m
            )));
        }
        if self.traffic_volume < 0.0 {
            return Err(Error::InvalidData(format!(
                "segment row {row}: negative traffic volume {}",
                self.traffic_volume
            )));
        }
        if self.vehicle_speed_kph < 0.0 {
            return Err(Error::InvalidData(format!(
                "segment row {row}: negative vehicle speed {}",
                self.vehicle_speed_kph
            )));
        }
        Ok(())
    }
}

impl From<RawSegment> for Segment {
    fn from(raw: RawSegment) -> Self {
        Self {
            a_id: raw.a_id,
            b_id: raw.b_id,
            length_m: raw.length_m,
            infra: InfraType::from_code(raw.infra_type),
            slope_pct: raw.slope_pct,
            traffic_volume: raw.traffic_volume,
            vehicle_speed_kph: raw.vehicle_speed_kph,
        }
    }
}

/// Reads a CSV segment table from any reader.
///
/// # Errors
///
/// Returns an error on malformed CSV or rows with negative length,
/// traffic volume or vehicle speed.
pub fn read_segments<R: Read>(reader: R) -> Result<Vec<Segment>, Error> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut segments = Vec::new();
    for (row, record) in csv.deserialize::<RawSegment>().enumerate() {
        let raw = record?;
        raw.validate(row)?;
        segments.push(raw.into());
    }
    Ok(segments)
}

/// Loads a CSV segment table from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid rows.
pub fn load_segments(path: &Path) -> Result<Vec<Segment>, Error> {
    let file = File::open(path)?;
    let segments = read_segments(file)?;
    info!(
        "Loaded {} segments from {}",
        segments.len(),
        path.display()
    );
    Ok(segments)
}
