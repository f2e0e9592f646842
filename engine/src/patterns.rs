// patterns.rs - Fixed catalog of stampable shapes.
//
// Offsets are (row, col) relative to the stamp anchor. The glider
// rotations are literal lists rather than computed rotations so their
// output is stable for fixtures; each is named by its direction of travel.

use thiserror::Error;

/// Catalog lookup miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnknownPattern {
    #[error("no pattern at index {0}")]
    Index(usize),
    #[error("no pattern named {0:?}")]
    Name(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider NW",
        cells: &[(-1, -1), (-1, 0), (-1, 1), (0, -1), (1, 0)],
    },
    Pattern {
        name: "Glider SW",
        cells: &[(-1, 0), (0, -1), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Glider NE",
        cells: &[(-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 0)],
    },
    Pattern {
        name: "Glider SE",
        cells: &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Upper-left arms
            (-1, -2), (-1, -3), (-1, -4),
            (-2, -1), (-3, -1), (-4, -1),
            (-2, -6), (-3, -6), (-4, -6),
            (-6, -2), (-6, -3), (-6, -4),
            // Upper-right arms
            (-1, 2), (-1, 3), (-1, 4),
            (-2, 1), (-3, 1), (-4, 1),
            (-2, 6), (-3, 6), (-4, 6),
            (-6, 2), (-6, 3), (-6, 4),
            // Lower-left arms
            (1, -2), (1, -3), (1, -4),
            (2, -1), (3, -1), (4, -1),
            (2, -6), (3, -6), (4, -6),
            (6, -2), (6, -3), (6, -4),
            // Lower-right arms
            (1, 2), (1, 3), (1, 4),
            (2, 1), (3, 1), (4, 1),
            (2, 6), (3, 6), (4, 6),
            (6, 2), (6, 3), (6, 4),
        ],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 0), (0, 1), (0, 2), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (0, 0), (0, 1), (1, 0), (1, 1),
            (2, 2), (2, 3), (3, 2), (3, 3),
        ],
    },
];

/// Look a pattern up by catalog index.
pub fn lookup(id: usize) -> Result<&'static Pattern, UnknownPattern> {
    PATTERNS.get(id).ok_or(UnknownPattern::Index(id))
}

/// Look a pattern up by its display name.
pub fn lookup_name(name: &str) -> Result<&'static Pattern, UnknownPattern> {
    PATTERNS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| UnknownPattern::Name(name.to_owned()))
}

/// Catalog names in index order, for populating a selector.
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_a_nonempty_pattern() {
        for id in 0..PATTERNS.len() {
            let pattern = lookup(id).unwrap();
            assert!(!pattern.cells.is_empty());
            assert!(!pattern.name.is_empty());
            // Lookup is stable across calls.
            assert_eq!(lookup(id).unwrap().cells, pattern.cells);
        }
    }

    #[test]
    fn out_of_range_id_is_unknown() {
        let id = PATTERNS.len();
        assert_eq!(lookup(id), Err(UnknownPattern::Index(id)));
    }

    #[test]
    fn name_lookup() {
        assert_eq!(lookup_name("Pulsar").unwrap().cells.len(), 48);
        assert_eq!(
            lookup_name("Spaceship"),
            Err(UnknownPattern::Name("Spaceship".to_owned()))
        );
    }

    #[test]
    fn gliders_are_five_cells_in_four_rotations() {
        let rotations: Vec<_> = names().filter(|n| n.starts_with("Glider")).collect();
        assert_eq!(rotations.len(), 4);
        for name in rotations {
            assert_eq!(lookup_name(name).unwrap().cells.len(), 5);
        }
    }

    #[test]
    fn glider_rotations_are_distinct() {
        for a in 0..4 {
            for b in (a + 1)..4 {
                let mut left: Vec<_> = lookup(a).unwrap().cells.to_vec();
                let mut right: Vec<_> = lookup(b).unwrap().cells.to_vec();
                left.sort_unstable();
                right.sort_unstable();
                assert_ne!(left, right, "rotations {a} and {b} coincide");
            }
        }
    }

    #[test]
    fn pulsar_is_fourfold_symmetric() {
        let pulsar = lookup_name("Pulsar").unwrap();
        for &(row, col) in pulsar.cells {
            assert!(pulsar.cells.contains(&(-row, col)));
            assert!(pulsar.cells.contains(&(row, -col)));
        }
    }

    #[test]
    fn selector_names_are_unique() {
        let all: Vec<_> = names().collect();
        for (i, name) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(name), "duplicate name {name}");
        }
    }
}
