//! Scenario evaluation: batch comparison, corridor ranking and export

pub mod comparison;
pub mod corridors;
pub mod export;

pub use comparison::{compare_scenarios, ComparisonReport};
pub use corridors::{aggregate_corridors, CorridorEntry};
pub use export::{write_comparison_csv, write_corridors_csv, write_results_json};
