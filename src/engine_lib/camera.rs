// src/engine_lib/camera.rs

use crate::engine_lib::geometry::Point2;

/// Viewer pose in world space. `heading` is in radians; at heading 0 the
/// camera looks down world +y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point2,
    pub heading: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point2::ZERO, 0.0)
    }
}

impl Camera {
    pub fn new(position: Point2, heading: f32) -> Self {
        Self { position, heading }
    }

    // Straight ahead maps to view-space +y.
    pub fn project(&self, world_point: Point2) -> Point2 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        let rel = world_point - self.position;
        Point2::new(
            rel.x * cos_h - rel.y * sin_h,
            rel.x * sin_h + rel.y * cos_h,
        )
    }

    pub fn unproject(&self, view_point: Point2) -> Point2 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        let rotated = Point2::new(
            view_point.x * cos_h + view_point.y * sin_h,
            -view_point.x * sin_h + view_point.y * cos_h,
        );
        rotated + self.position
    }

    /// World-space unit vector the camera is facing.
    pub fn forward(&self) -> Point2 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        Point2::new(sin_h, cos_h)
    }

    /// World-space unit vector to the camera's right.
    pub fn right(&self) -> Point2 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        Point2::new(cos_h, -sin_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_close(a: Point2, b: Point2, eps: f32) {
        assert!((a - b).length() < eps, "{a:?} != {b:?}");
    }

    #[test]
    fn identity_at_origin() {
        let cam = Camera::default();
        let p = Point2::new(-60.0, 42.5);
        assert_eq!(cam.project(p), p);
    }

    #[test]
    fn project_unproject_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let cam = Camera::new(
                Point2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
                rng.gen_range(-2.0 * PI..2.0 * PI),
            );
            let p = Point2::new(rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0));
            assert_close(cam.unproject(cam.project(p)), p, 1e-2);
        }
    }

    #[test]
    fn forward_projects_straight_ahead() {
        let cam = Camera::new(Point2::new(5.0, -3.0), 0.7);
        let ahead = cam.position + cam.forward() * 10.0;
        assert_close(cam.project(ahead), Point2::new(0.0, 10.0), 1e-4);
        let beside = cam.position + cam.right() * 10.0;
        assert_close(cam.project(beside), Point2::new(10.0, 0.0), 1e-4);
    }

    #[test]
    fn quarter_turn_rotates_view() {
        let cam = Camera::new(Point2::ZERO, FRAC_PI_2);
        // Facing world +x, so a point on +x appears straight ahead.
        assert_close(cam.project(Point2::new(20.0, 0.0)), Point2::new(0.0, 20.0), 1e-4);
    }

    #[test]
    fn translation_only() {
        let cam = Camera::new(Point2::new(10.0, 20.0), 0.0);
        assert_eq!(cam.project(Point2::new(15.0, 18.0)), Point2::new(5.0, -2.0));
    }
}
