// src/engine_lib/cell.rs

use crate::engine_lib::camera::Camera;
use crate::engine_lib::geometry::{Point2, Segment};
use crate::rendering_lib::canvas::LineCanvas;

/// A closed polygon. Point order is winding order; edge `i` runs from point
/// `i` to point `i + 1`, with the last edge wrapping back to the first point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    points: Vec<Point2>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: &[Point2]) -> Self {
        Self { points: points.to_vec() }
    }

    pub fn add_point(&mut self, x: f32, y: f32) {
        self.points.push(Point2::new(x, y));
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn edge_count(&self) -> usize {
        self.points.len()
    }

    /// Indices wrap modulo the edge count. `None` only for an empty cell.
    pub fn edge(&self, i: usize) -> Option<Segment> {
        let n = self.points.len();
        if n == 0 {
            return None;
        }
        Some(Segment::new(self.points[i % n], self.points[(i + 1) % n]))
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.edge_count()).filter_map(move |i| self.edge(i))
    }

    pub fn draw_from(&self, camera: &Camera, canvas: &mut LineCanvas) {
        for edge in self.edges() {
            edge.draw_from(camera, canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Cell {
        let mut cell = Cell::new();
        cell.add_point(-60.0, -60.0);
        cell.add_point(-80.0, 20.0);
        cell.add_point(80.0, 40.0);
        cell.add_point(20.0, -80.0);
        cell
    }

    #[test]
    fn four_points_four_edges() {
        let cell = quad();
        assert_eq!(cell.edge_count(), 4);
        assert_eq!(cell.edges().count(), 4);
    }

    #[test]
    fn last_edge_wraps() {
        let cell = quad();
        let e = cell.edge(3).unwrap();
        assert_eq!(e.p1, Point2::new(20.0, -80.0));
        assert_eq!(e.p2, Point2::new(-60.0, -60.0));
        assert_eq!(cell.edge(4), cell.edge(0));
    }

    #[test]
    fn edges_chain_end_to_start() {
        let cell = quad();
        let edges: Vec<_> = cell.edges().collect();
        for (i, e) in edges.iter().enumerate() {
            assert_eq!(e.p2, edges[(i + 1) % edges.len()].p1);
        }
    }

    #[test]
    fn empty_cell_has_no_edges() {
        let cell = Cell::new();
        assert_eq!(cell.edge_count(), 0);
        assert!(cell.edge(0).is_none());
        assert_eq!(cell.edges().count(), 0);
    }

    #[test]
    fn single_point_cell_is_degenerate() {
        let cell = Cell::from_points(&[Point2::new(1.0, 2.0)]);
        let e = cell.edge(0).unwrap();
        assert_eq!(e.p1, e.p2);
        assert_eq!(e.length(), 0.0);
    }

    #[test]
    fn draw_from_emits_one_line_per_edge() {
        let cell = quad();
        let mut canvas = LineCanvas::new(640.0, 480.0);
        cell.draw_from(&Camera::default(), &mut canvas);
        assert_eq!(canvas.line_count(), 4);
        // First vertex of edge 0 is (-60, -60) in view space.
        assert_eq!(canvas.vertices()[0].position, [260.0, 300.0]);
    }
}
