//! Directed weighted bicycle network
//!
//! The network is built once from a segment table and a configuration,
//! then treated as immutable: in-flight searches share it read-only, and
//! a new configuration requires building a new instance. String node
//! identifiers are interned into dense `petgraph` indices at build time
//! so the search loop never hashes strings.

use hashbrown::HashMap;
use log::info;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::impedance::WeightPolicy;
use crate::model::{InfraType, RoutingConfig, Segment};

/// Graph node: the external identifier of a network junction.
#[derive(Debug, Clone)]
pub struct NetworkNode {
    pub id: String,
}

/// Directed edge of the weighted network.
///
/// Carries the precomputed impedance plus the originating segment
/// attributes needed for metric extraction and per-criterion reweighting.
#[derive(Debug, Clone)]
pub struct NetworkEdge {
    /// Impedance in minutes under the policy the network was built with
    pub weight: f64,
    pub length_m: f64,
    pub infra: InfraType,
    pub slope_pct: f64,
    pub traffic_volume: f64,
    pub vehicle_speed_kph: f64,
}

/// Weighted directed graph over the bicycle network.
#[derive(Debug, Clone)]
pub struct BicycleNetwork {
    pub(crate) graph: DiGraph<NetworkNode, NetworkEdge>,
    index: HashMap<String, NodeIndex>,
}

impl BicycleNetwork {
    /// Builds the weighted network from a segment table.
    ///
    /// Every segment is treated as bidirectional and yields two directed
    /// edges carrying the same weight. The input is not mutated; calling
    /// `build` twice with identical inputs produces identical weights.
    pub fn build(segments: &[Segment], config: &RoutingConfig, policy: WeightPolicy) -> Self {
        let mut graph = DiGraph::with_capacity(segments.len(), segments.len() * 2);
        let mut index: HashMap<String, NodeIndex> = HashMap::with_capacity(segments.len());

        let mut intern = |graph: &mut DiGraph<NetworkNode, NetworkEdge>, id: &str| {
            *index
                .entry_ref(id)
                .or_insert_with(|| graph.add_node(NetworkNode { id: id.to_string() }))
        };

        for segment in segments {
            let a = intern(&mut graph, &segment.a_id);
            let b = intern(&mut graph, &segment.b_id);
            let edge = NetworkEdge {
                weight: policy.impedance(segment, config),
                length_m: segment.length_m,
                infra: segment.infra,
                slope_pct: segment.slope_pct,
                traffic_volume: segment.traffic_volume,
                vehicle_speed_kph: segment.vehicle_speed_kph,
            };
            graph.add_edge(a, b, edge.clone());
            graph.add_edge(b, a, edge);
        }

        info!(
            "Bicycle network built: {} nodes, {} directed edges",
            graph.node_count(),
            graph.edge_count()
        );

        Self { graph, index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Dense index of a node identifier, if present in the network.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// External identifier of an interned node.
    pub fn node_id(&self, index: NodeIndex) -> &str {
        &self.graph[index].id
    }

    /// Edge between two nodes, matching either direction. Used when
    /// re-walking routes against the originating segments.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&NetworkEdge> {
        let a = self.node_index(a)?;
        let b = self.node_index(b)?;
        self.graph
            .find_edge(a, b)
            .or_else(|| self.graph.find_edge(b, a))
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    /// Test-only constructor from explicit directed edges with fixed
    /// weights.
    #[cfg(test)]
    pub(crate) fn from_weighted_edges(edges: &[(&str, &str, f64)]) -> Self {
        let mut graph = DiGraph::new();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();
        for &(a, b, weight) in edges {
            let a = *index
                .entry_ref(a)
                .or_insert_with(|| graph.add_node(NetworkNode { id: a.to_string() }));
            let b = *index
                .entry_ref(b)
                .or_insert_with(|| graph.add_node(NetworkNode { id: b.to_string() }));
            graph.add_edge(
                a,
                b,
                NetworkEdge {
                    weight,
                    length_m: weight * 1000.0,
                    infra: InfraType::None,
                    slope_pct: 0.0,
                    traffic_volume: 0.0,
                    vehicle_speed_kph: 30.0,
                },
            );
        }
        Self { graph, index }
    }
}
