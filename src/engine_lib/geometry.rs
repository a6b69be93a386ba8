// src/engine_lib/geometry.rs

use glam::Vec2;

use crate::engine_lib::camera::Camera;
use crate::rendering_lib::canvas::LineCanvas;

pub type Point2 = Vec2;

pub fn distance(p1: Point2, p2: Point2) -> f32 {
    p1.distance(p2)
}

pub fn dot(a: Point2, b: Point2) -> f32 {
    a.dot(b)
}

/// Turn direction of a -> b -> c.
///
/// `> 0` clockwise (in screen space, where y is flipped on draw), `0` colinear,
/// `< 0` counter-clockwise.
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f32 {
    (b.x - a.x) * (c.y - b.y) - (c.x - b.x) * (b.y - a.y)
}

/// Nearest point to `p` on `segment`, clamped to its endpoints.
pub fn closest_point_on_segment(segment: &Segment, p: Point2) -> Point2 {
    let length = segment.length();
    if length == 0.0 {
        return segment.p1;
    }
    let along = segment.p2 - segment.p1;
    let scalar = dot(p - segment.p1, along) / length;
    if scalar < 0.0 {
        segment.p1
    } else if scalar > length {
        segment.p2
    } else {
        segment.p1 + along * (scalar / length)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    pub fn length(&self) -> f32 {
        distance(self.p1, self.p2)
    }

    pub fn closest_point(&self, p: Point2) -> Point2 {
        closest_point_on_segment(self, p)
    }

    /// Orientation of `p` relative to this directed segment.
    pub fn side_of(&self, p: Point2) -> f32 {
        orientation(self.p1, self.p2, p)
    }

    /// The segment as seen from `camera`, in view space.
    pub fn viewed_from(&self, camera: &Camera) -> Segment {
        Segment::new(camera.project(self.p1), camera.project(self.p2))
    }

    pub fn draw_from(&self, camera: &Camera, canvas: &mut LineCanvas) {
        let view = self.viewed_from(camera);
        canvas.draw_view_line(view.p1, view.p2);
    }
}
