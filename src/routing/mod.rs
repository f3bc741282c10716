//! Route search and per-route metrics

pub mod batch;
pub mod candidates;
pub mod dijkstra;
pub mod metrics;

pub use batch::{optimize_od_pairs, BatchOutcome, OdPair, OptimizationResult, SearchMode};
pub use candidates::{best_candidate, candidate_routes};
pub use dijkstra::{shortest_path, PathResult, Route};
pub use metrics::{route_metrics, RouteMetricsRecord, SegmentDetail};
