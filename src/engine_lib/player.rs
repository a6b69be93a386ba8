// src/engine_lib/player.rs

use crate::engine_lib::camera::Camera;
use crate::engine_lib::cell::Cell;
use crate::engine_lib::geometry::Point2;
use crate::rendering_lib::canvas::{Color, LineCanvas};

pub const DEFAULT_MOVE_SPEED: f32 = 0.1;
pub const DEFAULT_TURN_SPEED: f32 = 0.005;

/// One frame of movement intent. Each axis is -1, 0 or +1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    pub forward: f32,
    pub strafe: f32,
    pub turn: f32,
}

impl MoveInput {
    pub fn new(forward: f32, strafe: f32, turn: f32) -> Self {
        Self { forward, strafe, turn }
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.strafe == 0.0 && self.turn == 0.0
    }
}

/// Result of checking the player against one edge of its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionProbe {
    pub edge_index: usize,
    pub closest_point: Point2,
    pub orientation: f32,
}

impl CollisionProbe {
    /// The player is strictly on the outer side of the edge. Being exactly on
    /// the edge's line counts as inside.
    pub fn is_warning(&self) -> bool {
        self.orientation > 0.0
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    camera: Camera,
    move_speed: f32,
    turn_speed: f32,
    // A snapshot taken at construction; later edits to the source cell are not seen here.
    current_cell: Cell,
}

impl Player {
    pub fn new(position: Point2, heading: f32, current_cell: &Cell) -> Self {
        Self {
            camera: Camera::new(position, heading),
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
            current_cell: current_cell.clone(),
        }
    }

    pub fn with_speeds(mut self, move_speed: f32, turn_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.turn_speed = turn_speed;
        self
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn position(&self) -> Point2 {
        self.camera.position
    }

    pub fn heading(&self) -> f32 {
        self.camera.heading
    }

    pub fn current_cell(&self) -> &Cell {
        &self.current_cell
    }

    /// Turns, then moves relative to the new heading, then probes every edge
    /// of the current cell. Probes are advisory: the player is never pushed
    /// back, so walls can be walked through.
    pub fn movement(&mut self, input: MoveInput) -> Vec<CollisionProbe> {
        self.camera.heading += input.turn * self.turn_speed;

        let step = self.camera.forward() * input.forward + self.camera.right() * input.strafe;
        self.camera.position += step * self.move_speed;

        self.collision_probes()
    }

    pub fn collision_probes(&self) -> Vec<CollisionProbe> {
        let position = self.camera.position;
        self.current_cell
            .edges()
            .enumerate()
            .map(|(edge_index, edge)| CollisionProbe {
                edge_index,
                closest_point: edge.closest_point(position),
                orientation: edge.side_of(position),
            })
            .collect()
    }

    /// Draws a line from the player to each probe's closest point, in
    /// `warning_color` for edges the player is outside of. The canvas draw
    /// color is restored afterwards.
    pub fn draw_probes(&self, probes: &[CollisionProbe], canvas: &mut LineCanvas, warning_color: Color) {
        let base_color = canvas.draw_color();
        for probe in probes {
            if probe.is_warning() {
                canvas.set_draw_color(warning_color);
            }
            let target = self.camera.project(probe.closest_point);
            canvas.draw_view_line(Point2::ZERO, target);
            canvas.set_draw_color(base_color);
        }
    }
}
