//! Grid geometry shared by the text-grid worlds.

use std::ops::Add;

/// A cell position. `y` grows downward, matching text row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add<Direction> for Point {
    type Output = Self;

    fn add(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A unit move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Enumeration order used by every grid world.
    pub const ALL: [Direction; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Up => (0, -1),
        }
    }

    /// Single-character form for compact solution rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Down => 'D',
            Self::Up => 'U',
        }
    }
}

/// Non-blank rows of a text grid, trimmed.
pub(crate) fn grid_rows(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Iterate `(Point, char)` over grid rows.
pub(crate) fn cells<'a>(rows: &'a [&'a str]) -> impl Iterator<Item = (Point, char)> + 'a {
    rows.iter().zip(0i32..).flat_map(|(row, y)| {
        row.chars()
            .zip(0i32..)
            .map(move |(ch, x)| (Point::new(x, y), ch))
    })
}
