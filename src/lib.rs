//! Least-impedance routing over bicycle networks
//!
//! `biciruta` computes optimized bicycle routes where the cost of a
//! segment is a multicriteria impedance: riding time adjusted by
//! infrastructure safety, slope, motor traffic volume and vehicle speed
//! differential. It compares optimized batches against baseline
//! scenarios and ranks network corridors by investment priority.
//!
//! The core is batch-oriented and synchronous: the network is built once
//! per configuration and shared read-only; independent OD pairs are
//! routed in parallel. Geospatial I/O, point snapping and rendering are
//! external collaborators that exchange plain records with this crate.

pub mod analysis;
pub mod error;
pub mod impedance;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use impedance::WeightPolicy;
pub use model::{BicycleNetwork, InfraType, RoutingConfig, Segment};
pub use routing::metrics::route_metrics;
