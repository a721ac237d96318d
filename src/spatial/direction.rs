//! Unit step vectors along which words are laid out

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;

/// One of the eight compass steps between neighbouring cells
///
/// `dx` grows to the right and `dy` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Direction {
    /// Column step
    pub dx: i32,
    /// Row step
    pub dy: i32,
}

impl Direction {
    /// Left to right along a row
    pub const RIGHT: Self = Self::new(1, 0);
    /// Top to bottom along a column
    pub const DOWN: Self = Self::new(0, 1);
    /// Right to left along a row
    pub const LEFT: Self = Self::new(-1, 0);
    /// Bottom to top along a column
    pub const UP: Self = Self::new(0, -1);
    /// Diagonal towards the bottom right
    pub const DOWN_RIGHT: Self = Self::new(1, 1);
    /// Diagonal towards the bottom left
    pub const DOWN_LEFT: Self = Self::new(-1, 1);
    /// Diagonal towards the top right
    pub const UP_RIGHT: Self = Self::new(1, -1);
    /// Diagonal towards the top left
    pub const UP_LEFT: Self = Self::new(-1, -1);

    /// Axis-aligned steps, always available
    pub const AXES: [Self; 4] = [Self::RIGHT, Self::DOWN, Self::LEFT, Self::UP];
    /// Diagonal steps, available when diagonals are enabled
    pub const DIAGONALS: [Self; 4] = [
        Self::DOWN_RIGHT,
        Self::DOWN_LEFT,
        Self::UP_RIGHT,
        Self::UP_LEFT,
    ];
    /// Used when the forward-only filter leaves nothing
    pub const FORWARD_FALLBACK: [Self; 3] = [Self::RIGHT, Self::DOWN, Self::DOWN_RIGHT];

    const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Test whether the word reads left-to-right and top-to-bottom
    pub const fn is_forward(self) -> bool {
        self.dx >= 0 && self.dy >= 0 && !(self.dx == 0 && self.dy == 0)
    }

    /// Test whether both axes move
    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.dx, self.dy) {
            (1, 0) => "right",
            (0, 1) => "down",
            (-1, 0) => "left",
            (0, -1) => "up",
            (1, 1) => "down-right",
            (-1, 1) => "down-left",
            (1, -1) => "up-right",
            (-1, -1) => "up-left",
            (dx, dy) => return write!(f, "({dx}, {dy})"),
        };
        f.write_str(name)
    }
}

/// Directions a generator may try, assembled once per puzzle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionSet {
    directions: Vec<Direction>,
}

impl DirectionSet {
    /// Assemble the candidate directions for the given options
    ///
    /// With backwards placement disallowed only forward steps remain; should
    /// that leave nothing, right, down and down-right are used instead.
    pub fn new(allow_diagonal: bool, allow_backwards: bool) -> Self {
        let mut directions = Direction::AXES.to_vec();
        if allow_diagonal {
            directions.extend(Direction::DIAGONALS);
        }

        if !allow_backwards {
            directions.retain(|direction| direction.is_forward());
            if directions.is_empty() {
                directions = Direction::FORWARD_FALLBACK.to_vec();
            }
        }

        Self { directions }
    }

    /// Candidate directions in assembly order
    pub const fn as_slice(&self) -> &[Direction] {
        self.directions.as_slice()
    }

    /// Number of candidate directions
    pub const fn len(&self) -> usize {
        self.directions.len()
    }

    /// Test whether no direction is available
    pub const fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Fresh random ordering so that no direction is systematically favoured
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Direction> {
        let mut order = self.directions.clone();
        order.shuffle(rng);
        order
    }
}
