//! Per-route metric aggregation
//!
//! Metrics are derived by re-walking a computed route against the
//! network, matching every consecutive node pair back onto its
//! originating segment in either direction.

use itertools::Itertools;
use log::warn;
use serde::Serialize;

use crate::impedance::riding_time_min;
use crate::model::{BicycleNetwork, InfraType, RoutingConfig};
use crate::routing::dijkstra::Route;

/// One traversed segment of a route.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentDetail {
    pub from_id: String,
    pub to_id: String,
    pub distance_m: f64,
    /// Unadjusted riding time, minutes
    pub time_min: f64,
    /// Impedance of the segment under the network's weighting, minutes
    pub impedance_min: f64,
    pub infra: InfraType,
    pub slope_pct: f64,
}

/// Aggregated metrics of a single route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMetricsRecord {
    pub total_distance_m: f64,
    pub total_time_min: f64,
    pub segments: Vec<SegmentDetail>,
    /// Share of traversed segments on safe infrastructure, in [0, 100].
    /// Zero when the route has no matched segments.
    pub safe_infra_pct: f64,
    /// Route hops with no matching network segment. Such hops contribute
    /// nothing to the totals but must stay visible for debugging.
    pub gaps: usize,
}

impl RouteMetricsRecord {
    pub fn empty() -> Self {
        Self {
            total_distance_m: 0.0,
            total_time_min: 0.0,
            segments: Vec::new(),
            safe_infra_pct: 0.0,
            gaps: 0,
        }
    }
}

/// Computes metrics for a route by re-walking it against the network.
/// Routes shorter than two nodes carry no metrics.
pub fn route_metrics(
    network: &BicycleNetwork,
    route: &Route,
    config: &RoutingConfig,
) -> RouteMetricsRecord {
    if route.is_empty() {
        return RouteMetricsRecord::empty();
    }

    let mut record = RouteMetricsRecord::empty();

    for (from, to) in route.nodes().iter().tuple_windows() {
        let Some(edge) = network.edge_between(from, to) else {
            warn!("no segment found for route hop {from} -> {to}");
            record.gaps += 1;
            continue;
        };

        let time_min = riding_time_min(edge.length_m, config.bike_speed_kph);
        record.total_distance_m += edge.length_m;
        record.total_time_min += time_min;
        record.segments.push(SegmentDetail {
            from_id: from.clone(),
            to_id: to.clone(),
            distance_m: edge.length_m,
            time_min,
            impedance_min: edge.weight,
            infra: edge.infra,
            slope_pct: edge.slope_pct,
        });
    }

    if !record.segments.is_empty() {
        let safe = record
            .segments
            .iter()
            .filter(|detail| detail.infra.is_safe())
            .count();
        record.safe_infra_pct = safe as f64 / record.segments.len() as f64 * 100.0;
    }

    record
}
