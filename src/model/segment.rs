//! Raw network segment records and infrastructure categories

use serde::{Deserialize, Serialize};

/// Category of cycling infrastructure present on a segment.
///
/// Codes follow the segment-table convention (1–4). Any code outside
/// that range is treated as [`InfraType::SharedStreet`], the minimum-risk
/// weighting band; unknown infrastructure is an explicit default, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfraType {
    Segregated,
    BikeLane,
    SharedStreet,
    None,
}

impl InfraType {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Segregated,
            2 => Self::BikeLane,
            3 => Self::SharedStreet,
            4 => Self::None,
            _ => Self::SharedStreet,
        }
    }

    /// Whether this category counts as safe infrastructure
    /// (segregated paths and bike lanes).
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Segregated | Self::BikeLane)
    }
}

/// One undirected segment of the bicycle network, as loaded from the
/// segment table. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Node identifier of one endpoint
    pub a_id: String,
    /// Node identifier of the other endpoint
    pub b_id: String,
    /// Segment length in meters
    pub length_m: f64,
    /// Infrastructure category
    pub infra: InfraType,
    /// Signed slope, percent
    pub slope_pct: f64,
    /// Motor traffic volume, vehicles per analysis period
    pub traffic_volume: f64,
    /// Posted or observed motor vehicle speed, km/h
    pub vehicle_speed_kph: f64,
}
