//! Grid geometry: positions, compass directions, and ranking distances.

use std::fmt;

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell in the given direction (`Center` returns self).
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    pub fn offset_to(self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Squared Euclidean distance.
    pub fn distance_squared(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx * dx + dy * dy
    }

    pub fn chebyshev(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    pub fn manhattan(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx + dy
    }

    /// Sign-wise compass direction toward `other`; `Center` when equal.
    pub fn direction_to(self, other: Position) -> Direction {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        match (dx.signum(), dy.signum()) {
            (0, 0) => Direction::Center,
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            _ => Direction::NorthWest,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coarse distance estimate used for ranking candidate moves:
/// `10 * chebyshev + manhattan`. Not cost-exact; cheap and stable.
pub fn travel_distance(a: Position, b: Position) -> u32 {
    10 * a.chebyshev(b) + a.manhattan(b)
}

/// Eight compass directions plus the no-movement sentinel.
///
/// North is +y. Rotation steps are 45 degrees; `Center` is a fixed point of
/// every rotation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

impl Direction {
    /// The eight compass directions, clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// All nine options, compass order then `Center`.
    pub const ALL: [Direction; 9] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::Center,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
            Direction::Center => (0, 0),
        }
    }

    const fn compass_index(self) -> Option<usize> {
        match self {
            Direction::North => Some(0),
            Direction::NorthEast => Some(1),
            Direction::East => Some(2),
            Direction::SouthEast => Some(3),
            Direction::South => Some(4),
            Direction::SouthWest => Some(5),
            Direction::West => Some(6),
            Direction::NorthWest => Some(7),
            Direction::Center => None,
        }
    }

    /// 45 degrees counterclockwise (north -> northwest).
    pub fn rotate_left(self) -> Direction {
        match self.compass_index() {
            Some(i) => Direction::COMPASS[(i + 7) % 8],
            None => Direction::Center,
        }
    }

    /// 45 degrees clockwise (north -> northeast).
    pub fn rotate_right(self) -> Direction {
        match self.compass_index() {
            Some(i) => Direction::COMPASS[(i + 1) % 8],
            None => Direction::Center,
        }
    }

    pub fn opposite(self) -> Direction {
        match self.compass_index() {
            Some(i) => Direction::COMPASS[(i + 4) % 8],
            None => Direction::Center,
        }
    }
}
