//! This module is responsible for loading the segment table that the
//! network is built from.

mod segments;

pub use segments::{load_segments, read_segments};
