//! `GridMaze`: a single agent walking a text grid from `S` to `G`.
//!
//! Alphabet: `#` wall, `.` floor, `S` start, `G` goal. Start and goal are
//! floor cells. Anything outside the grid counts as wall, so ragged rows are
//! allowed.

use std::collections::HashSet;

use waypoint_kernel::problem::Problem;

use crate::contract::{HarnessWorld, WorldParseError};
use crate::worlds::grid::{cells, grid_rows, Direction, Point};

#[derive(Debug, Clone)]
pub struct GridMaze {
    open: HashSet<Point>,
    start: Point,
    goal: Point,
    width: usize,
    height: usize,
}

impl GridMaze {
    /// Parse a maze.
    ///
    /// # Errors
    ///
    /// Returns [`WorldParseError`] on an empty grid, a character outside the
    /// alphabet, or a start/goal marker that does not appear exactly once.
    pub fn from_text(text: &str) -> Result<Self, WorldParseError> {
        let rows = grid_rows(text);
        if rows.is_empty() {
            return Err(WorldParseError::Empty);
        }

        let mut open = HashSet::new();
        let mut starts = Vec::new();
        let mut goals = Vec::new();
        for (point, ch) in cells(&rows) {
            match ch {
                '#' => continue,
                '.' => {}
                'S' => starts.push(point),
                'G' => goals.push(point),
                found => {
                    return Err(WorldParseError::UnexpectedChar {
                        row: point.y.unsigned_abs() as usize,
                        column: point.x.unsigned_abs() as usize,
                        found,
                    })
                }
            }
            open.insert(point);
        }

        let start = single('S', &starts)?;
        let goal = single('G', &goals)?;
        Ok(Self {
            open,
            start,
            goal,
            width: rows.iter().map(|r| r.chars().count()).max().unwrap_or(0),
            height: rows.len(),
        })
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_open(&self, point: Point) -> bool {
        self.open.contains(&point)
    }
}

fn single(marker: char, found: &[Point]) -> Result<Point, WorldParseError> {
    match found {
        [point] => Ok(*point),
        _ => Err(WorldParseError::MarkerCount {
            marker,
            count: found.len(),
        }),
    }
}

impl Problem for GridMaze {
    type State = Point;
    type Action = Direction;

    fn initial_state(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn get_actions(&self, state: &Point) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_open(*state + *d))
            .collect()
    }

    fn get_successor(&self, state: &Point, action: &Direction) -> Point {
        *state + *action
    }

    fn get_cost(&self, _state: &Point, _action: &Direction) -> f64 {
        1.0
    }
}

impl HarnessWorld for GridMaze {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid_maze"
    }

    fn heuristic(&self, state: &Point) -> f64 {
        f64::from(state.manhattan(self.goal))
    }
}
