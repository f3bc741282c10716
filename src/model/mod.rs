//! Data model for bicycle-network routing
//!
//! Typed records for segments, configuration and the weighted network.

pub mod config;
pub mod network;
pub mod segment;

pub use config::RoutingConfig;
pub use network::{BicycleNetwork, NetworkEdge, NetworkNode};
pub use segment::{InfraType, Segment};
