//! `ParkingLot`: move every car onto its own slot.
//!
//! Text alphabet: `#` wall, `.` floor, `A`..`J` cars, `0`..`9` slots. Car
//! `A` belongs in slot `0`, `B` in `1`, and so on. Cars and slots are cells
//! a car may occupy; cars block each other.
//!
//! One action moves one car one cell. Entering a slot that belongs to a
//! different car costs [`FOREIGN_SLOT_COST`]; every other move costs 1.

use std::collections::{HashMap, HashSet};

use waypoint_kernel::problem::Problem;

use crate::contract::{HarnessWorld, WorldParseError};
use crate::worlds::grid::{cells, grid_rows, Direction, Point};

/// Cost of driving into another car's slot.
pub const FOREIGN_SLOT_COST: f64 = 101.0;

const CAR_LETTERS: &str = "ABCDEFGHIJ";
const SLOT_DIGITS: &str = "0123456789";

/// Car `car` moves one cell in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarMove {
    pub car: usize,
    pub direction: Direction,
}

impl CarMove {
    /// Compact form, e.g. `"A:R"`.
    #[must_use]
    pub fn label(self) -> String {
        let letter = CAR_LETTERS.chars().nth(self.car).unwrap_or('?');
        format!("{letter}:{}", self.direction.symbol())
    }
}

#[derive(Debug, Clone)]
pub struct ParkingLot {
    passages: HashSet<Point>,
    cars: Vec<Point>,
    /// `slots[i]` is car `i`'s slot.
    slots: Vec<Point>,
    slot_owner: HashMap<Point, usize>,
}

impl ParkingLot {
    /// Parse a lot.
    ///
    /// # Errors
    ///
    /// - [`WorldParseError::Empty`] for blank text or a lot with no cars.
    /// - [`WorldParseError::UnexpectedChar`] outside the alphabet.
    /// - [`WorldParseError::MarkerCount`] for a repeated car or slot.
    /// - [`WorldParseError::Unpaired`] when cars are not `A..` without gaps,
    ///   or a car and its slot do not both appear.
    pub fn from_text(text: &str) -> Result<Self, WorldParseError> {
        let rows = grid_rows(text);
        if rows.is_empty() {
            return Err(WorldParseError::Empty);
        }

        let mut passages = HashSet::new();
        let mut cars: [Vec<Point>; 10] = Default::default();
        let mut slots: [Vec<Point>; 10] = Default::default();
        for (point, ch) in cells(&rows) {
            match ch {
                '#' => continue,
                '.' => {}
                _ => {
                    if let Some(i) = CAR_LETTERS.find(ch) {
                        cars[i].push(point);
                    } else if let Some(i) = SLOT_DIGITS.find(ch) {
                        slots[i].push(point);
                    } else {
                        return Err(WorldParseError::UnexpectedChar {
                            row: point.y.unsigned_abs() as usize,
                            column: point.x.unsigned_abs() as usize,
                            found: ch,
                        });
                    }
                }
            }
            passages.insert(point);
        }

        let count = cars.iter().take_while(|c| !c.is_empty()).count();
        if count == 0 {
            return Err(WorldParseError::Empty);
        }
        let mut car_cells = Vec::with_capacity(count);
        let mut slot_cells = Vec::with_capacity(count);
        let markers = CAR_LETTERS.chars().zip(SLOT_DIGITS.chars());
        let groups = cars.iter().zip(&slots).zip(markers).enumerate();
        for (i, ((car, slot), (letter, digit))) in groups {
            if i >= count {
                if !car.is_empty() {
                    return Err(WorldParseError::Unpaired {
                        detail: format!("car {letter} appears but an earlier letter is missing"),
                    });
                }
                if !slot.is_empty() {
                    return Err(WorldParseError::Unpaired {
                        detail: format!("slot {digit} has no car"),
                    });
                }
                continue;
            }
            car_cells.push(exactly_one(letter, car)?);
            if slot.is_empty() {
                return Err(WorldParseError::Unpaired {
                    detail: format!("car {letter} has no slot"),
                });
            }
            slot_cells.push(exactly_one(digit, slot)?);
        }

        let slot_owner = slot_cells.iter().enumerate().map(|(i, p)| (*p, i)).collect();
        Ok(Self {
            passages,
            cars: car_cells,
            slots: slot_cells,
            slot_owner,
        })
    }

    #[must_use]
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// Slot of car `car`.
    #[must_use]
    pub fn slot(&self, car: usize) -> Option<Point> {
        self.slots.get(car).copied()
    }
}

fn exactly_one(marker: char, found: &[Point]) -> Result<Point, WorldParseError> {
    match found {
        [point] => Ok(*point),
        _ => Err(WorldParseError::MarkerCount {
            marker,
            count: found.len(),
        }),
    }
}

impl Problem for ParkingLot {
    /// `state[i]` is the position of car `i`.
    type State = Vec<Point>;
    type Action = CarMove;

    fn initial_state(&self) -> Vec<Point> {
        self.cars.clone()
    }

    fn is_goal(&self, state: &Vec<Point>) -> bool {
        state.iter().zip(&self.slots).all(|(car, slot)| car == slot)
    }

    /// Cars in index order, directions in [`Direction::ALL`] order.
    fn get_actions(&self, state: &Vec<Point>) -> Vec<CarMove> {
        let mut actions = Vec::new();
        for (car, position) in state.iter().enumerate() {
            for direction in Direction::ALL {
                let target = *position + direction;
                if self.passages.contains(&target) && !state.contains(&target) {
                    actions.push(CarMove { car, direction });
                }
            }
        }
        actions
    }

    fn get_successor(&self, state: &Vec<Point>, action: &CarMove) -> Vec<Point> {
        let mut next = state.clone();
        if let Some(position) = next.get_mut(action.car) {
            *position = *position + action.direction;
        }
        next
    }

    fn get_cost(&self, state: &Vec<Point>, action: &CarMove) -> f64 {
        let Some(position) = state.get(action.car) else {
            return 1.0;
        };
        match self.slot_owner.get(&(*position + action.direction)) {
            Some(&owner) if owner != action.car => FOREIGN_SLOT_COST,
            _ => 1.0,
        }
    }
}

impl HarnessWorld for ParkingLot {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "parking_lot"
    }

    /// Each move shifts one car by one cell, so the summed distance never
    /// overestimates.
    fn heuristic(&self, state: &Vec<Point>) -> f64 {
        let total: u32 = state
            .iter()
            .zip(&self.slots)
            .map(|(car, slot)| car.manhattan(*slot))
            .sum();
        f64::from(total)
    }
}
