//! Multicriteria impedance model
//!
//! Impedance is the riding time of a segment in minutes, inflated (or
//! discounted) by safety, slope, motor traffic and speed-differential
//! terms: `base_time * (1 + F)`. Two weighting policies exist in the
//! methodology and are deliberately kept separate: the all-positive
//! variant used when weighting the network at load time, and the signed
//! variant used by the route-level candidate search. They must not be
//! unified.

use serde::{Deserialize, Serialize};

use crate::model::network::NetworkEdge;
use crate::model::{InfraType, RoutingConfig, Segment};

/// Base riding time of a segment in minutes, before any adjustment.
pub(crate) fn riding_time_min(length_m: f64, bike_speed_kph: f64) -> f64 {
    (length_m / 1000.0 / bike_speed_kph) * 60.0
}

/// Named edge-weighting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// All-positive adjustment factors, applied when building the
    /// weighted network.
    NetworkLoading,
    /// Signed adjustment factors (safe infrastructure discounts the base
    /// time), applied by the multi-criterion route search.
    RouteSearch,
}

impl WeightPolicy {
    /// Impedance of a raw segment in minutes. Strictly positive for any
    /// segment with `length_m > 0`; exactly zero for a zero-length
    /// connector, which is a valid snapped access link.
    pub fn impedance(self, segment: &Segment, config: &RoutingConfig) -> f64 {
        self.impedance_raw(
            segment.length_m,
            segment.infra,
            segment.slope_pct,
            segment.traffic_volume,
            segment.vehicle_speed_kph,
            config,
        )
    }

    pub(crate) fn edge_impedance(self, edge: &NetworkEdge, config: &RoutingConfig) -> f64 {
        self.impedance_raw(
            edge.length_m,
            edge.infra,
            edge.slope_pct,
            edge.traffic_volume,
            edge.vehicle_speed_kph,
            config,
        )
    }

    fn impedance_raw(
        self,
        length_m: f64,
        infra: InfraType,
        slope_pct: f64,
        traffic_volume: f64,
        vehicle_speed_kph: f64,
        config: &RoutingConfig,
    ) -> f64 {
        let base_time = riding_time_min(length_m, config.bike_speed_kph);
        let factors = self.infra_adjustment(infra)
            + config.slope_coef * slope_pct.abs()
            + config.traffic_coef * traffic_volume
            + config.speed_coef * (vehicle_speed_kph - 30.0).max(0.0);
        base_time * (1.0 + factors)
    }

    fn infra_adjustment(self, infra: InfraType) -> f64 {
        match self {
            Self::NetworkLoading => match infra {
                InfraType::Segregated => 0.1,
                InfraType::BikeLane => 0.3,
                InfraType::SharedStreet => 0.6,
                InfraType::None => 0.9,
            },
            Self::RouteSearch => match infra {
                InfraType::Segregated => -0.3,
                InfraType::BikeLane => -0.1,
                InfraType::SharedStreet => 0.3,
                InfraType::None => 0.6,
            },
        }
    }
}

/// Single search criterion of the candidate route search. Each criterion
/// reweights every edge of the network independently; combining them
/// into one objective would change the methodology's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Distance,
    Safety,
    Time,
    Comfort,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Distance,
        Criterion::Safety,
        Criterion::Time,
        Criterion::Comfort,
    ];

    /// Scalar edge cost under this criterion.
    pub(crate) fn edge_cost(self, edge: &NetworkEdge, config: &RoutingConfig) -> f64 {
        match self {
            Self::Distance => edge.length_m / 1000.0,
            Self::Time => riding_time_min(edge.length_m, config.bike_speed_kph),
            Self::Safety => {
                let hazard = match edge.infra {
                    InfraType::Segregated => 1.0,
                    InfraType::BikeLane => 1.5,
                    InfraType::SharedStreet => 2.5,
                    InfraType::None => 4.0,
                };
                let traffic = 1.0 + (edge.traffic_volume / 1000.0) * 0.1;
                let speed = 1.0 + (edge.vehicle_speed_kph - 30.0).max(0.0) / 50.0;
                hazard * traffic * speed
            }
            Self::Comfort => 1.0 + 0.1 * edge.slope_pct.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(length_m: f64, infra: InfraType) -> Segment {
        Segment {
            a_id: "a".into(),
            b_id: "b".into(),
            length_m,
            infra,
            slope_pct: 0.0,
            traffic_volume: 0.0,
            vehicle_speed_kph: 30.0,
        }
    }

    #[test]
    fn reference_segment_costs_4_4_minutes() {
        // 1 km segregated, flat, no traffic, at 15 km/h:
        // base = 4.0 min, factor 0.1 -> 4.4 min
        let config = RoutingConfig::default();
        let seg = segment(1000.0, InfraType::Segregated);
        let imp = WeightPolicy::NetworkLoading.impedance(&seg, &config);
        assert!((imp - 4.4).abs() < 1e-9);
    }

    #[test]
    fn zero_length_segment_has_zero_impedance() {
        let config = RoutingConfig::default();
        let seg = segment(0.0, InfraType::None);
        for policy in [WeightPolicy::NetworkLoading, WeightPolicy::RouteSearch] {
            assert_eq!(policy.impedance(&seg, &config), 0.0);
        }
    }

    #[test]
    fn network_loading_is_monotone_in_infra_risk() {
        let config = RoutingConfig::default();
        let bands = [
            InfraType::Segregated,
            InfraType::BikeLane,
            InfraType::SharedStreet,
            InfraType::None,
        ];
        let costs: Vec<f64> = bands
            .iter()
            .map(|&infra| WeightPolicy::NetworkLoading.impedance(&segment(500.0, infra), &config))
            .collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn route_search_discounts_safe_infrastructure() {
        let config = RoutingConfig::default();
        let seg = segment(1000.0, InfraType::Segregated);
        let base = riding_time_min(seg.length_m, config.bike_speed_kph);
        let imp = WeightPolicy::RouteSearch.impedance(&seg, &config);
        assert!(imp < base);
    }

    #[test]
    fn slope_traffic_and_speed_terms_accumulate() {
        let config = RoutingConfig::default();
        let seg = Segment {
            slope_pct: -4.0,
            traffic_volume: 2000.0,
            vehicle_speed_kph: 50.0,
            ..segment(1000.0, InfraType::BikeLane)
        };
        // F = 0.3 + 0.05*4 + 0.0001*2000 + 0.01*20 = 0.9
        let imp = WeightPolicy::NetworkLoading.impedance(&seg, &config);
        assert!((imp - 4.0 * 1.9).abs() < 1e-9);
    }
}
