// src/config.rs

use std::time::Duration;

use crate::engine_lib::player::{DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED};
use crate::rendering_lib::canvas::Color;

/// Tunables for the viewer window and simulation. Speeds are per frame.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub window_position: (i32, i32),
    pub move_speed: f32,
    pub turn_speed: f32,
    pub frame_delay: Duration,
    pub background_color: Color,
    pub line_color: Color,
    pub warning_color: Color,
    pub crosshair_half_size: f32,
    pub show_overlay: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_title: "Cell View".to_string(),
            window_width: 640,
            window_height: 480,
            window_position: (160, 120),
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
            frame_delay: Duration::from_millis(1),
            background_color: Color::BLACK,
            line_color: Color::WHITE,
            warning_color: Color::RED,
            crosshair_half_size: 4.0,
            show_overlay: true,
        }
    }
}
