// src/engine_lib/mod.rs
pub mod geometry;
pub mod camera;
pub mod cell;
pub mod player;
pub mod controller;
pub mod demo_cell;
pub mod frame_clock;

pub use geometry::{Point2, Segment, distance, dot, orientation, closest_point_on_segment};
pub use camera::Camera;
pub use cell::Cell;
pub use player::{Player, MoveInput, CollisionProbe};
pub use controller::{Action, ActionSet, PlayerController};
pub use frame_clock::FrameClock;
