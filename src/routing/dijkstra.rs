//! Single-pair Dijkstra over the weighted bicycle network

use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};
use serde::Serialize;

use crate::model::network::NetworkEdge;
use crate::model::BicycleNetwork;
use crate::Error;

#[derive(Copy, Clone)]
struct State {
    cost: f64,
    node: NodeIndex,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for State {}

/// Ordered node sequence of a computed route, origin first. A sequence
/// shorter than two nodes is empty/invalid and carries no metrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    nodes: Vec<String>,
}

impl Route {
    pub(crate) fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    pub(crate) fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() < 2
    }
}

/// Outcome of a single shortest-path search.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub route: Route,
    /// Total impedance in minutes; `f64::INFINITY` when the destination
    /// is unreachable.
    pub total_impedance: f64,
}

impl PathResult {
    pub(crate) fn unreachable() -> Self {
        Self {
            route: Route::empty(),
            total_impedance: f64::INFINITY,
        }
    }

    /// Whether the destination could not be reached. Not an error: a
    /// disconnected OD pair is a reportable outcome.
    pub fn is_unreachable(&self) -> bool {
        self.total_impedance.is_infinite()
    }
}

/// Dijkstra over the network with an arbitrary edge cost. Returns the
/// tentative distance and predecessor maps for all settled nodes.
pub(crate) fn run_dijkstra<F>(
    network: &BicycleNetwork,
    start: NodeIndex,
    target: Option<NodeIndex>,
    edge_cost: F,
) -> (HashMap<NodeIndex, f64>, HashMap<NodeIndex, NodeIndex>)
where
    F: Fn(&NetworkEdge) -> f64,
{
    let estimated_nodes = network.graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if Some(node) == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in network.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge_cost(edge.weight());

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    (distances, predecessors)
}

/// Rebuilds the node sequence from the predecessor map, origin first.
///
/// Every settled non-origin node has a predecessor; a broken chain
/// violates the algorithm's invariants and panics rather than returning
/// a malformed route.
pub(crate) fn reconstruct_route(
    network: &BicycleNetwork,
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Route {
    let mut indices = Vec::new();
    let mut current = target;
    while current != start {
        indices.push(current);
        match predecessors.get(&current) {
            Some(&prev) => current = prev,
            None => unreachable!("predecessor chain broken before reaching the origin"),
        }
    }
    indices.push(start);
    indices.reverse();

    Route::new(
        indices
            .into_iter()
            .map(|idx| network.node_id(idx).to_string())
            .collect(),
    )
}

/// Least-impedance path between two network nodes under the weights the
/// network was built with.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] when either endpoint is absent from
/// the network; callers processing batches are expected to skip the pair
/// and continue.
pub fn shortest_path(
    network: &BicycleNetwork,
    origin: &str,
    destination: &str,
) -> Result<PathResult, Error> {
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

    if start == target {
        return Ok(PathResult {
            route: Route::new(vec![origin.to_string()]),
            total_impedance: 0.0,
        });
    }

    let (distances, predecessors) = run_dijkstra(network, start, Some(target), |edge| edge.weight);

    match distances.get(&target) {
        None => Ok(PathResult::unreachable()),
        Some(&cost) => Ok(PathResult {
            route: reconstruct_route(network, &predecessors, start, target),
            total_impedance: cost,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> BicycleNetwork {
        BicycleNetwork::from_weighted_edges(&[("A", "B", 5.0), ("B", "C", 3.0), ("A", "C", 10.0)])
    }

    #[test]
    fn takes_two_hop_path_over_heavier_direct_edge() {
        let network = triangle();
        let result = shortest_path(&network, "A", "C").unwrap();
        assert_eq!(result.route.nodes(), ["A", "B", "C"]);
        assert!((result.total_impedance - 8.0).abs() < 1e-9);
    }

    #[test]
    fn consecutive_route_pairs_are_edges_and_weights_sum_to_cost() {
        let network = triangle();
        let result = shortest_path(&network, "A", "C").unwrap();

        let mut sum = 0.0;
        for pair in result.route.nodes().windows(2) {
            let edge = network.edge_between(&pair[0], &pair[1]);
            assert!(edge.is_some());
            sum += edge.unwrap().weight;
        }
        assert!((sum - result.total_impedance).abs() < 1e-9);
    }

    #[test]
    fn origin_equals_destination_is_trivial_route() {
        let network = triangle();
        let result = shortest_path(&network, "B", "B").unwrap();
        assert_eq!(result.route.nodes(), ["B"]);
        assert_eq!(result.total_impedance, 0.0);
        assert!(result.route.is_empty());
    }

    #[test]
    fn unreachable_destination_is_reported_not_failed() {
        let network =
            BicycleNetwork::from_weighted_edges(&[("A", "B", 1.0), ("C", "D", 1.0)]);
        let result = shortest_path(&network, "A", "D").unwrap();
        assert!(result.is_unreachable());
        assert!(result.route.is_empty());
    }

    #[test]
    fn missing_endpoint_identifies_which_one() {
        let network = triangle();
        match shortest_path(&network, "Z", "C") {
            Err(Error::NodeNotFound { role, id }) => {
                assert_eq!(role, "origin");
                assert_eq!(id, "Z");
            }
            other => panic!("expected NodeNotFound, got {other:?}"),
        }
        match shortest_path(&network, "A", "Z") {
            Err(Error::NodeNotFound { role, .. }) => assert_eq!(role, "destination"),
            other => panic!("expected NodeNotFound, got {other:?}"),
        }
    }
}
