// Re-export key components
pub use crate::analysis::{
    aggregate_corridors, compare_scenarios, write_comparison_csv, write_corridors_csv,
    write_results_json, ComparisonReport, CorridorEntry,
};
pub use crate::impedance::{Criterion, WeightPolicy};
pub use crate::loading::{load_segments, read_segments};
pub use crate::model::{BicycleNetwork, InfraType, RoutingConfig, Segment};
pub use crate::routing::{
    best_candidate, candidate_routes, optimize_od_pairs, shortest_path, BatchOutcome, OdPair,
    OptimizationResult, PathResult, Route, RouteMetricsRecord, SearchMode, SegmentDetail,
};
pub use crate::Error;
