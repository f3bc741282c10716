//! Multi-criterion candidate route search
//!
//! The single best-weighted graph is not guaranteed to contain the
//! comfort-optimal or safety-optimal alternative, so the search runs one
//! complete Dijkstra per criterion, deduplicates the resulting paths and
//! evaluates every candidate under the signed route-search weighting.

use itertools::Itertools;

use crate::impedance::{Criterion, WeightPolicy};
use crate::model::{BicycleNetwork, RoutingConfig};
use crate::routing::dijkstra::{reconstruct_route, run_dijkstra, PathResult, Route};
use crate::Error;

/// Candidate routes between two nodes, one shortest path per criterion
/// with duplicates removed. Criteria whose search cannot reach the
/// destination contribute nothing.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] when either endpoint is absent from
/// the network.
pub fn candidate_routes(
    network: &BicycleNetwork,
    origin: &str,
    destination: &str,
    config: &RoutingConfig,
) -> Result<Vec<Route>, Error> {
    let start = network.node_index(origin).ok_or_else(|| Error::NodeNotFound {
        role: "origin",
        id: origin.to_string(),
    })?;
    let target = network
        .node_index(destination)
        .ok_or_else(|| Error::NodeNotFound {
            role: "destination",
            id: destination.to_string(),
        })?;

    let candidates = Criterion::ALL
        .iter()
        .filter_map(|criterion| {
            let (distances, predecessors) =
                run_dijkstra(network, start, Some(target), |edge| {
                    criterion.edge_cost(edge, config)
                });
            distances
                .get(&target)
                .map(|_| reconstruct_route(network, &predecessors, start, target))
        })
        .unique()
        .collect();

    Ok(candidates)
}

/// Selects the candidate with least total impedance under the
/// route-search weighting. `None` when the destination is unreachable
/// under every criterion.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] when either endpoint is absent from
/// the network.
pub fn best_candidate(
    network: &BicycleNetwork,
    origin: &str,
    destination: &str,
    config: &RoutingConfig,
) -> Result<Option<PathResult>, Error> {
    let candidates = candidate_routes(network, origin, destination, config)?;

    let best = candidates
        .into_iter()
        .map(|route| {
            let total = route_search_impedance(network, &route, config);
            PathResult {
                route,
                total_impedance: total,
            }
        })
        .min_by(|a, b| a.total_impedance.total_cmp(&b.total_impedance));

    Ok(best)
}

/// Total impedance of a route under [`WeightPolicy::RouteSearch`],
/// summing per-segment impedances looked up in either direction.
fn route_search_impedance(network: &BicycleNetwork, route: &Route, config: &RoutingConfig) -> f64 {
    route
        .nodes()
        .windows(2)
        .filter_map(|pair| network.edge_between(&pair[0], &pair[1]))
        .map(|edge| WeightPolicy::RouteSearch.edge_impedance(edge, config))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InfraType, Segment};

    fn segment(a: &str, b: &str, length_m: f64, infra: InfraType, slope_pct: f64) -> Segment {
        Segment {
            a_id: a.to_string(),
            b_id: b.to_string(),
            length_m,
            infra,
            slope_pct,
            traffic_volume: 0.0,
            vehicle_speed_kph: 30.0,
        }
    }

    /// Two parallel corridors between A and D: a short, steep, unprotected
    /// one and a longer, flat, segregated one.
    fn two_corridor_network() -> BicycleNetwork {
        let segments = vec![
            segment("A", "B", 400.0, InfraType::None, 8.0),
            segment("B", "D", 400.0, InfraType::None, 8.0),
            segment("A", "C", 700.0, InfraType::Segregated, 0.0),
            segment("C", "D", 700.0, InfraType::Segregated, 0.0),
        ];
        BicycleNetwork::build(
            &segments,
            &RoutingConfig::default(),
            WeightPolicy::NetworkLoading,
        )
    }

    #[test]
    fn divergent_criteria_produce_distinct_candidates() {
        let network = two_corridor_network();
        let config = RoutingConfig::default();
        let candidates = candidate_routes(&network, "A", "D", &config).unwrap();

        // Distance favors A-B-D, safety and comfort favor A-C-D.
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().any(|r| r.nodes() == ["A", "B", "D"]));
        assert!(candidates.iter().any(|r| r.nodes() == ["A", "C", "D"]));
    }

    #[test]
    fn identical_paths_are_deduplicated() {
        let segments = vec![segment("A", "B", 500.0, InfraType::BikeLane, 0.0)];
        let network = BicycleNetwork::build(
            &segments,
            &RoutingConfig::default(),
            WeightPolicy::NetworkLoading,
        );
        let candidates =
            candidate_routes(&network, "A", "B", &RoutingConfig::default()).unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn best_candidate_minimizes_route_search_impedance() {
        let network = two_corridor_network();
        let config = RoutingConfig::default();
        let best = best_candidate(&network, "A", "D", &config).unwrap().unwrap();

        // Segregated corridor: 1400 m at 15 km/h discounted by -0.3
        // beats 800 m at +0.6 with 8% slope.
        assert_eq!(best.route.nodes(), ["A", "C", "D"]);
        let expected = 2.0 * (700.0 / 1000.0 / 15.0) * 60.0 * 0.7;
        assert!((best.total_impedance - expected).abs() < 1e-9);
    }

    #[test]
    fn unreachable_destination_yields_no_candidates() {
        let segments = vec![
            segment("A", "B", 500.0, InfraType::BikeLane, 0.0),
            segment("C", "D", 500.0, InfraType::BikeLane, 0.0),
        ];
        let network = BicycleNetwork::build(
            &segments,
            &RoutingConfig::default(),
            WeightPolicy::NetworkLoading,
        );
        let best = best_candidate(&network, "A", "D", &RoutingConfig::default()).unwrap();
        assert!(best.is_none());
    }
}
