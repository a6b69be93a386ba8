// src/engine_lib/demo_cell.rs

use crate::config::ViewConfig;
use crate::engine_lib::cell::Cell;
use crate::engine_lib::geometry::Point2;
use crate::engine_lib::player::Player;

pub const DEMO_CELL_POINTS: [(f32, f32); 4] = [
    (-60.0, -60.0),
    (-80.0, 20.0),
    (80.0, 40.0),
    (20.0, -80.0),
];

pub fn create_demo_cell() -> Cell {
    let mut cell = Cell::new();
    for (x, y) in DEMO_CELL_POINTS {
        cell.add_point(x, y);
    }
    cell
}

/// Player standing at the origin facing +y, holding a copy of `cell`.
pub fn create_demo_player(cell: &Cell, config: &ViewConfig) -> Player {
    Player::new(Point2::ZERO, 0.0, cell).with_speeds(config.move_speed, config.turn_speed)
}
