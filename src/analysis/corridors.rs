//! Corridor usage aggregation
//!
//! Tallies how often each network segment is traversed across a batch of
//! routes and ranks corridors by investment priority. A segment
//! traversed in either direction accumulates into the same entry.

use hashbrown::HashMap;
use serde::Serialize;

use crate::model::InfraType;
use crate::routing::metrics::RouteMetricsRecord;

/// Usage statistics for one corridor (unordered node pair).
#[derive(Debug, Clone, Serialize)]
pub struct CorridorEntry {
    pub node_a: String,
    pub node_b: String,
    /// Number of routes traversing this corridor
    pub frequency: usize,
    pub accumulated_impedance: f64,
    pub mean_impedance: f64,
    /// Investment priority: frequency x accumulated impedance
    pub priority: f64,
    pub infra: InfraType,
}

/// Folds segment details from many routes into a corridor ranking,
/// sorted by priority descending. Ties keep the order in which the
/// corridor was first traversed.
pub fn aggregate_corridors(routes: &[RouteMetricsRecord]) -> Vec<CorridorEntry> {
    let mut entries: Vec<CorridorEntry> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();

    for record in routes {
        for detail in &record.segments {
            let key = corridor_key(&detail.from_id, &detail.to_id);
            match positions.get(&key) {
                Some(&pos) => {
                    let entry = &mut entries[pos];
                    entry.frequency += 1;
                    entry.accumulated_impedance += detail.impedance_min;
                }
                None => {
                    positions.insert(key.clone(), entries.len());
                    entries.push(CorridorEntry {
                        node_a: key.0,
                        node_b: key.1,
                        frequency: 1,
                        accumulated_impedance: detail.impedance_min,
                        mean_impedance: 0.0,
                        priority: 0.0,
                        infra: detail.infra,
                    });
                }
            }
        }
    }

    for entry in &mut entries {
        entry.mean_impedance = entry.accumulated_impedance / entry.frequency as f64;
        entry.priority = entry.frequency as f64 * entry.accumulated_impedance;
    }

    entries.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    entries
}

/// Direction-independent corridor key.
fn corridor_key(from: &str, to: &str) -> (String, String) {
    if from <= to {
        (from.to_string(), to.to_string())
    } else {
        (to.to_string(), from.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::metrics::SegmentDetail;

    fn detail(from: &str, to: &str, impedance: f64) -> SegmentDetail {
        SegmentDetail {
            from_id: from.to_string(),
            to_id: to.to_string(),
            distance_m: 100.0,
            time_min: 0.4,
            impedance_min: impedance,
            infra: InfraType::SharedStreet,
            slope_pct: 0.0,
        }
    }

    fn record(details: Vec<SegmentDetail>) -> RouteMetricsRecord {
        let mut record = RouteMetricsRecord::empty();
        record.segments = details;
        record
    }

    #[test]
    fn opposite_directions_accumulate_into_one_corridor() {
        let routes = vec![
            record(vec![detail("A", "B", 2.0)]),
            record(vec![detail("B", "A", 4.0)]),
        ];
        let corridors = aggregate_corridors(&routes);
        assert_eq!(corridors.len(), 1);
        assert_eq!(corridors[0].frequency, 2);
        assert!((corridors[0].accumulated_impedance - 6.0).abs() < 1e-9);
        assert!((corridors[0].mean_impedance - 3.0).abs() < 1e-9);
        assert!((corridors[0].priority - 12.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_priority_descending_and_conserves_traversals() {
        let routes = vec![
            record(vec![detail("A", "B", 1.0), detail("B", "C", 5.0)]),
            record(vec![detail("B", "C", 5.0)]),
            record(vec![detail("C", "D", 2.0)]),
        ];
        let corridors = aggregate_corridors(&routes);

        assert!(corridors
            .windows(2)
            .all(|w| w[0].priority >= w[1].priority));
        assert_eq!(corridors[0].node_a, "B");
        assert_eq!(corridors[0].node_b, "C");

        let traversals: usize = corridors.iter().map(|c| c.frequency).sum();
        assert_eq!(traversals, 4);
    }

    #[test]
    fn ties_keep_first_traversal_order() {
        let routes = vec![record(vec![detail("X", "Y", 3.0), detail("P", "Q", 3.0)])];
        let corridors = aggregate_corridors(&routes);
        assert_eq!(corridors[0].node_a, "X");
        assert_eq!(corridors[1].node_a, "P");
    }
}
