//! Compass directions placed on the board.
//!
//! Directions form a ring of eight values. Scoring only ever asks three
//! questions of them: are two equal, are two opposite, and is one the
//! clockwise successor of the other.
//!
//! ```
//! use compass_board::core::Direction;
//!
//! assert_eq!(Direction::N.next(), Direction::NE);
//! assert_eq!(Direction::NW.next(), Direction::N);
//! assert_eq!(Direction::E.opposite(), Direction::W);
//! ```

use serde::{Deserialize, Serialize};

/// One of the eight compass directions, stored as 0-7 clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

/// Rotation sense used when walking sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Number of distinct directions.
    pub const COUNT: usize = 8;

    /// All directions in clockwise order starting at north.
    pub const ALL: [Direction; Self::COUNT] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Build a direction from any integer, wrapping modulo 8.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Raw 0-7 index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Clockwise neighbour: `(d + 1) mod 8`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Counter-clockwise neighbour: `(d + 7) mod 8`.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Diametrically opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + Self::COUNT / 2)
    }

    /// Step once in the given rotation.
    #[must_use]
    pub const fn step(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => self.next(),
            Rotation::CounterClockwise => self.prev(),
        }
    }

    /// Clockwise distance from `self` to `other`, in 0..8.
    #[must_use]
    pub const fn distance_to(self, other: Direction) -> usize {
        (other.index() + Self::COUNT - self.index()) % Self::COUNT
    }

    #[must_use]
    pub const fn is_opposite(self, other: Direction) -> bool {
        self.distance_to(other) == Self::COUNT / 2
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(Direction::NW.next(), Direction::N);
        for d in Direction::ALL {
            assert_eq!(d.next().index(), (d.index() + 1) % 8);
        }
    }

    #[test]
    fn test_prev_inverts_next() {
        for d in Direction::ALL {
            assert_eq!(d.next().prev(), d);
            assert_eq!(d.step(Rotation::Clockwise).step(Rotation::CounterClockwise), d);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::N.opposite(), Direction::S);
        assert_eq!(Direction::SW.opposite(), Direction::NE);
        for d in Direction::ALL {
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Direction::N.distance_to(Direction::E), 2);
        assert_eq!(Direction::E.distance_to(Direction::N), 6);
        assert_eq!(Direction::W.distance_to(Direction::W), 0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Direction::SE).unwrap();
        assert_eq!(json, "\"SE\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::SE);
    }
}
