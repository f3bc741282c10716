//! Batch optimization over origin-destination pairs
//!
//! Pairs are independent pure functions of the read-only network, so the
//! batch runs on a rayon worker pool with no extra synchronization.
//! Per-pair failures never abort the batch: unresolved or missing
//! endpoints are skipped with a diagnostic and the rest completes.

use hashbrown::HashMap;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::{BicycleNetwork, RoutingConfig};
use crate::routing::candidates::best_candidate;
use crate::routing::dijkstra::{shortest_path, PathResult, Route};
use crate::routing::metrics::{route_metrics, RouteMetricsRecord};
use crate::Error;

/// Origin-destination pair, in external point identifiers (zone or stop
/// ids) resolved to network nodes through a snapping map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdPair {
    pub origin: String,
    pub destination: String,
}

impl OdPair {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// How each pair is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Single Dijkstra over the network's primary weights.
    Primary,
    /// One Dijkstra per criterion, best candidate under the route-search
    /// weighting.
    MultiCriterion,
}

/// Optimized route for one OD pair. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub origin: String,
    pub destination: String,
    pub route: Route,
    pub total_impedance: f64,
    pub metrics: RouteMetricsRecord,
}

/// Everything a batch run produced, successes and diagnostics alike.
/// Result order follows input pair order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<OptimizationResult>,
    /// Pairs whose destination cannot be reached; reportable, not errors.
    pub unreachable: Vec<OdPair>,
    /// Pairs skipped with the error that excluded them.
    pub skipped: Vec<(OdPair, Error)>,
}

enum PairOutcome {
    Done(OptimizationResult),
    Unreachable(OdPair),
    Skipped(OdPair, Error),
}

/// Optimizes every OD pair against the network, in parallel.
///
/// Point identifiers absent from the snapping map, or snapped to nodes
/// missing from the network, skip that pair with a warning. The batch
/// always completes and returns whatever succeeded.
pub fn optimize_od_pairs(
    network: &BicycleNetwork,
    config: &RoutingConfig,
    pairs: &[OdPair],
    snapped: &HashMap<String, String>,
    mode: SearchMode,
) -> BatchOutcome {
    let outcomes: Vec<PairOutcome> = pairs
        .par_iter()
        .map(|pair| match optimize_pair(network, config, pair, snapped, mode) {
            Ok(Some(result)) => PairOutcome::Done(result),
            Ok(None) => {
                warn!(
                    "no path between {} and {}",
                    pair.origin, pair.destination
                );
                PairOutcome::Unreachable(pair.clone())
            }
            Err(error) => {
                warn!(
                    "skipping OD pair ({}, {}): {error}",
                    pair.origin, pair.destination
                );
                PairOutcome::Skipped(pair.clone(), error)
            }
        })
        .collect();

    let mut batch = BatchOutcome {
        results: Vec::with_capacity(outcomes.len()),
        unreachable: Vec::new(),
        skipped: Vec::new(),
    };
    for outcome in outcomes {
        match outcome {
            PairOutcome::Done(result) => batch.results.push(result),
            PairOutcome::Unreachable(pair) => batch.unreachable.push(pair),
            PairOutcome::Skipped(pair, error) => batch.skipped.push((pair, error)),
        }
    }

    info!(
        "OD batch finished: {} routed, {} unreachable, {} skipped",
        batch.results.len(),
        batch.unreachable.len(),
        batch.skipped.len()
    );

    batch
}

fn optimize_pair(
    network: &BicycleNetwork,
    config: &RoutingConfig,
    pair: &OdPair,
    snapped: &HashMap<String, String>,
    mode: SearchMode,
) -> Result<Option<OptimizationResult>, Error> {
    let origin_node = snapped.get(&pair.origin).ok_or_else(|| Error::NodeNotFound {
        role: "origin",
        id: pair.origin.clone(),
    })?;
    let destination_node = snapped
        .get(&pair.destination)
        .ok_or_else(|| Error::NodeNotFound {
            role: "destination",
            id: pair.destination.clone(),
        })?;

    let path: Option<PathResult> = match mode {
        SearchMode::Primary => {
            let result = shortest_path(network, origin_node, destination_node)?;
            (!result.is_unreachable()).then_some(result)
        }
        SearchMode::MultiCriterion => {
            best_candidate(network, origin_node, destination_node, config)?
        }
    };

    Ok(path.map(|path| OptimizationResult {
        origin: pair.origin.clone(),
        destination: pair.destination.clone(),
        metrics: route_metrics(network, &path.route, config),
        route: path.route,
        total_impedance: path.total_impedance,
    }))
}
