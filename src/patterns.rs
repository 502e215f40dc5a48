// patterns.rs - Classic seed patterns and the boards built from them

use crate::life::Life;

/// A fixed shape given as `(dx, dy)` offsets from its top-left anchor,
/// x to the right and y downwards.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Marks the pattern alive with its anchor at `(start_x, start_y)`.
    /// The grid is not cleared, and cells past the edge are dropped.
    pub fn place(&self, life: &mut Life, start_x: i32, start_y: i32) {
        for (x, y) in self.cells_at(start_x, start_y) {
            life.set_alive(x, y);
        }
    }

    /// Width and height of the bounding box.
    pub fn size(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(dx, dy)| (w.max(dx + 1), h.max(dy + 1)))
    }

    /// Places the pattern in the middle of the board.
    pub fn place_centered(&self, life: &mut Life) {
        let (w, h) = self.size();
        let x = (i32::try_from(life.width()).unwrap_or(i32::MAX) - w) / 2;
        let y = (i32::try_from(life.height()).unwrap_or(i32::MAX) - h) / 2;
        self.place(life, x, y);
    }

    /// Absolute cells the pattern covers from the given anchor. Cells
    /// that would fall outside the `i32` range are skipped.
    pub fn cells_at(&self, start_x: i32, start_y: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .filter_map(move |&(dx, dy)| Some((start_x.checked_add(dx)?, start_y.checked_add(dy)?)))
    }
}

// Still lifes

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
};

pub const LOAF: Pattern = Pattern {
    name: "Loaf",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (3, 2), (2, 3)],
};

// Oscillators

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Horizontal bars
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        // Vertical bars
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

/// The 12-cell phase, 10 wide and 3 high, that repeats every 15 generations.
pub const PENTADECATHLON: Pattern = Pattern {
    name: "Pentadecathlon",
    cells: &[
        (2, 0), (7, 0),
        (0, 1), (1, 1), (3, 1), (4, 1), (5, 1), (6, 1), (8, 1), (9, 1),
        (2, 2), (7, 2),
    ],
};

// Spaceships

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "Lightweight spaceship",
    cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
};

// Methuselahs

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const DIEHARD: Pattern = Pattern {
    name: "Diehard",
    cells: &[(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)],
};

pub const ACORN: Pattern = Pattern {
    name: "Acorn",
    cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
};

// Guns

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper glider gun",
    cells: &[
        // Left block
        (0, 4), (1, 4), (0, 5), (1, 5),
        // Left half
        (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
        (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
        (16, 6), (17, 5),
        // Right half
        (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4),
        (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
        // Right block
        (34, 2), (34, 3), (35, 2), (35, 3),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BEEHIVE,
    LOAF,
    BLINKER,
    TOAD,
    BEACON,
    PULSAR,
    PENTADECATHLON,
    GLIDER,
    LIGHTWEIGHT_SPACESHIP,
    R_PENTOMINO,
    DIEHARD,
    ACORN,
    GOSPER_GLIDER_GUN,
];

/// Looks a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub type Placements = &'static [(&'static Pattern, i32, i32)];

const SHOWCASE: Placements = &[
    (&GLIDER, 5, 5),
    (&BLINKER, 40, 10),
    (&BLOCK, 60, 15),
    (&TOAD, 20, 25),
    (&BEACON, 70, 25),
    (&LIGHTWEIGHT_SPACESHIP, 10, 40),
    (&PENTADECATHLON, 30, 50),
    (&PULSAR, 50, 35),
    (&R_PENTOMINO, 15, 15),
    (&ACORN, 80, 5),
    (&BEEHIVE, 25, 35),
    (&LOAF, 35, 40),
    (&GLIDER, 90, 70),
    (&DIEHARD, 60, 60),
];

const GOSPER_GUN: Placements = &[(&GOSPER_GLIDER_GUN, 5, 5)];

const CHAOTIC: Placements = &[
    (&R_PENTOMINO, 20, 20),
    (&ACORN, 40, 30),
    (&DIEHARD, 60, 10),
    (&GLIDER, 80, 70),
    (&GLIDER, 10, 70),
];

/// A prepared starting board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scene {
    /// A mix of still lifes, oscillators, spaceships and methuselahs.
    #[default]
    Showcase,
    /// A single Gosper glider gun.
    GosperGun,
    /// Methuselahs with a couple of gliders.
    Chaotic,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Showcase, Scene::GosperGun, Scene::Chaotic];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Showcase => "showcase",
            Scene::GosperGun => "gosper-gun",
            Scene::Chaotic => "chaotic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// The patterns this scene places and where.
    pub fn placements(self) -> Placements {
        match self {
            Scene::Showcase => SHOWCASE,
            Scene::GosperGun => GOSPER_GUN,
            Scene::Chaotic => CHAOTIC,
        }
    }

    /// Clears the board and lays the scene out from generation 0.
    pub fn seed(self, life: &mut Life) {
        life.clear();
        for &(pattern, x, y) in self.placements() {
            pattern.place(life, x, y);
        }
    }
}
