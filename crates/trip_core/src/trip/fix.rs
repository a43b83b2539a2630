//! Repairs out of range coordinates using other connections that share the location.
use log::{debug, info, warn};

use super::model::{Connection, LatLong};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Invalid coordinates encountered
    pub invalid: usize,
    /// Invalid coordinates replaced by a valid one
    pub replaced: usize,
}

impl FixReport {
    pub fn unresolved(&self) -> usize {
        self.invalid - self.replaced
    }
}

/// First valid coordinate recorded for `label` at either end of any connection,
/// `fallback` if there is none.
pub fn find_substitute(connections: &[Connection], label: &str, fallback: LatLong) -> LatLong {
    for c in connections {
        if c.from == label && c.coordinates.from.is_valid() {
            return c.coordinates.from;
        }
        if c.to == label && c.coordinates.to.is_valid() {
            return c.coordinates.to;
        }
    }
    fallback
}

/// Replaces invalid coordinates in place, front to back. A fixed coordinate can serve as
/// substitute for later ones.
pub fn validate_and_fix(connections: &mut [Connection]) -> FixReport {
    let mut report = FixReport::default();

    for i in 0..connections.len() {
        let current = connections[i].coordinates.from;
        if !current.is_valid() {
            let substitute = find_substitute(connections, &connections[i].from, current);
            record(&mut report, &connections[i].from, current, substitute);
            connections[i].coordinates.from = substitute;
        }

        let current = connections[i].coordinates.to;
        if !current.is_valid() {
            let substitute = find_substitute(connections, &connections[i].to, current);
            record(&mut report, &connections[i].to, current, substitute);
            connections[i].coordinates.to = substitute;
        }
    }

    if report.invalid > 0 {
        info!(
            "Invalid coordinate data has been changed: {} invalid, {} replaced",
            report.invalid, report.replaced
        );
    }

    report
}

fn record(report: &mut FixReport, label: &str, invalid: LatLong, substitute: LatLong) {
    report.invalid += 1;
    if substitute.is_valid() {
        report.replaced += 1;
        debug!("{}: {:?} -> {:?}", label, invalid, substitute);
    } else {
        warn!("{}: no valid coordinate to replace {:?}", label, invalid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISBON: LatLong = LatLong {
        lat: 38.7222524,
        long: -9.1393366,
    };
    const MADRID: LatLong = LatLong {
        lat: 40.4167754,
        long: -3.7037902,
    };
    const BROKEN: LatLong = LatLong {
        lat: 999.0,
        long: 0.0,
    };

    #[test]
    fn replace_from_matching_to_end() {
        let mut connections = vec![
            Connection::new("Lisbon", "Madrid", 40.0, BROKEN, MADRID),
            Connection::new("Madrid", "Lisbon", 45.0, MADRID, LISBON),
        ];

        let report = validate_and_fix(&mut connections);

        assert_eq!(connections[0].coordinates.from, LISBON);
        assert_eq!(
            report,
            FixReport {
                invalid: 1,
                replaced: 1
            }
        );
    }

    #[test]
    fn replace_from_matching_from_end() {
        let mut connections = vec![
            Connection::new("Porto", "Lisbon", 20.0, LatLong::new(41.1, -8.6), BROKEN),
            Connection::new("Lisbon", "Madrid", 40.0, LISBON, MADRID),
        ];

        validate_and_fix(&mut connections);

        assert_eq!(connections[1].coordinates.from, LISBON);
        assert_eq!(connections[0].coordinates.to, LISBON);
    }

    #[test]
    fn no_substitute_leaves_coordinate() {
        let mut connections = vec![
            Connection::new("Atlantis", "Madrid", 999.0, BROKEN, MADRID),
            Connection::new("Madrid", "Lisbon", 45.0, MADRID, LISBON),
        ];

        let report = validate_and_fix(&mut connections);

        assert_eq!(connections[0].coordinates.from, BROKEN);
        assert_eq!(report.unresolved(), 1);
    }

    #[test]
    fn repeated_label_fixed_everywhere() {
        let mut connections = vec![
            Connection::new("Lisbon", "Madrid", 40.0, BROKEN, MADRID),
            Connection::new("Lisbon", "Porto", 20.0, BROKEN, LatLong::new(41.1, -8.6)),
            Connection::new("Madrid", "Lisbon", 45.0, MADRID, LISBON),
        ];

        let report = validate_and_fix(&mut connections);

        assert_eq!(connections[0].coordinates.from, LISBON);
        assert_eq!(connections[1].coordinates.from, LISBON);
        assert_eq!(report.replaced, 2);
    }

    #[test]
    fn fix_is_idempotent() {
        let mut connections = vec![
            Connection::new("Lisbon", "Madrid", 40.0, BROKEN, MADRID),
            Connection::new("Madrid", "Lisbon", 45.0, MADRID, LISBON),
        ];

        validate_and_fix(&mut connections);
        let fixed = connections.clone();
        let report = validate_and_fix(&mut connections);

        assert_eq!(report, FixReport::default());
        assert_eq!(connections, fixed);
    }
}
