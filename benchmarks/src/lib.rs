//! Shared world generators for waypoint benchmark suites.

use waypoint_harness::worlds::grid_maze::GridMaze;
use waypoint_harness::worlds::parking::ParkingLot;

/// A single winding corridor: `corridors` rows of `width` floor cells,
/// joined at alternating ends. `S` starts the first row and `G` ends the
/// last, so every strategy must walk the whole corridor.
#[must_use]
pub fn serpentine_text(corridors: usize, width: usize) -> String {
    let corridors = corridors.max(1);
    let width = width.max(2);
    let border = "#".repeat(width + 2);
    let mut lines = vec![border.clone()];

    for i in 0..corridors {
        let goes_right = i % 2 == 0;
        let end = if goes_right { width - 1 } else { 0 };
        let row: String = (0..width)
            .map(|x| {
                if i == 0 && x == 0 {
                    'S'
                } else if i == corridors - 1 && x == end {
                    'G'
                } else {
                    '.'
                }
            })
            .collect();
        lines.push(format!("#{row}#"));

        if i + 1 < corridors {
            let wall: String = (0..width)
                .map(|x| if x == end { '.' } else { '#' })
                .collect();
            lines.push(format!("#{wall}#"));
        }
    }
    lines.push(border);
    lines.join("\n")
}

/// An open `side x side` room with `S` and `G` in opposite corners. Many
/// equal-length paths, so duplicates dominate.
#[must_use]
pub fn open_room_text(side: usize) -> String {
    let side = side.max(2);
    let border = "#".repeat(side + 2);
    let mut lines = vec![border.clone()];
    for y in 0..side {
        let row: String = (0..side)
            .map(|x| match (x, y) {
                (0, 0) => 'S',
                _ if x == side - 1 && y == side - 1 => 'G',
                _ => '.',
            })
            .collect();
        lines.push(format!("#{row}#"));
    }
    lines.push(border);
    lines.join("\n")
}

/// Parse a generated maze.
///
/// # Panics
///
/// Panics if the generated text does not parse; generator output always
/// does. Benchmark setup failures are fatal.
#[must_use]
pub fn maze(text: &str) -> GridMaze {
    GridMaze::from_text(text).expect("generated maze parses")
}

/// Three cars on a ring road. Cars cannot pass each other, so every
/// solution rotates all three around the ring.
///
/// # Panics
///
/// Panics if the fixed text does not parse.
#[must_use]
pub fn parking_ring() -> ParkingLot {
    ParkingLot::from_text(
        "
        #########
        #A.B..C.#
        #.#####.#
        #2..1..0#
        #########
        ",
    )
    .expect("parking ring parses")
}
