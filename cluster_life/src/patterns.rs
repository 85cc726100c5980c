// patterns.rs - Named seed patterns and random scattering

use rand::Rng;

use crate::grid::Cell;
use crate::index::ClusterIndex;
use crate::world::World;

pub struct Pattern {
    pub name: &'static str,
    /// Live cells as `(dx, dy)` offsets from the top-left corner.
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(width, height)`.
    pub fn bounds(&self) -> (i64, i64) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(dx, dy)| (w.max(dx + 1), h.max(dy + 1)))
    }

    /// Write the pattern's live cells with its top-left corner at `(x, y)`.
    /// Cells already alive around it are left untouched.
    pub fn stamp<I: ClusterIndex>(&self, world: &mut World<I>, x: i64, y: i64) {
        for &(dx, dy) in self.cells {
            world.write(x + dx, y + dy, Cell::Alive);
        }
    }

    /// Stamp centred on `(x, y)`.
    pub fn stamp_centered<I: ClusterIndex>(&self, world: &mut World<I>, x: i64, y: i64) {
        let (w, h) = self.bounds();
        self.stamp(world, x - w / 2, y - h / 2);
    }
}

/// Write `count` live cells at uniform positions in `[-radius, radius]`
/// on both axes. Repeated positions simply overwrite.
pub fn scatter<I: ClusterIndex, R: Rng>(
    world: &mut World<I>,
    rng: &mut R,
    count: usize,
    radius: i64,
) {
    let radius = radius.abs();
    for _ in 0..count {
        let x = rng.gen_range(-radius..=radius);
        let y = rng.gen_range(-radius..=radius);
        world.write(x, y, Cell::Alive);
    }
}
