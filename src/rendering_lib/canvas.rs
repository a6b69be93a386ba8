// src/rendering_lib/canvas.rs

use crate::engine_lib::geometry::Point2;
use crate::rendering_lib::vertex::Vertex;

/// Opaque RGB draw color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_rgba();
        wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: a as f64 }
    }
}

/// CPU-side frame of line segments in screen pixels. Everything drawn in a
/// frame goes through here; `LineRenderer` uploads the result.
#[derive(Debug)]
pub struct LineCanvas {
    width: f32,
    height: f32,
    draw_color: Color,
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl LineCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            draw_color: Color::WHITE,
            clear_color: Color::BLACK,
            vertices: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let color = self.draw_color.to_rgba();
        self.vertices.push(Vertex::new([x1, y1], color));
        self.vertices.push(Vertex::new([x2, y2], color));
    }

    /// View space is centered on the screen with +y pointing up.
    pub fn view_to_screen(&self, p: Point2) -> Point2 {
        Point2::new(self.width / 2.0 + p.x, self.height / 2.0 - p.y)
    }

    pub fn draw_view_line(&mut self, a: Point2, b: Point2) {
        let a = self.view_to_screen(a);
        let b = self.view_to_screen(b);
        self.draw_line(a.x, a.y, b.x, b.y);
    }

    /// An "X" at the screen center marking the viewer.
    pub fn draw_crosshair(&mut self, half_size: f32) {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        self.draw_line(cx + half_size, cy - half_size, cx - half_size, cy + half_size);
        self.draw_line(cx - half_size, cy - half_size, cx + half_size, cy + half_size);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_origin_maps_to_screen_center() {
        let canvas = LineCanvas::new(640.0, 480.0);
        assert_eq!(canvas.view_to_screen(Point2::ZERO), Point2::new(320.0, 240.0));
        assert_eq!(canvas.view_to_screen(Point2::new(10.0, 20.0)), Point2::new(330.0, 220.0));
    }

    #[test]
    fn lines_take_current_color() {
        let mut canvas = LineCanvas::new(640.0, 480.0);
        canvas.draw_line(0.0, 0.0, 1.0, 1.0);
        canvas.set_draw_color(Color::RED);
        canvas.draw_view_line(Point2::ZERO, Point2::new(0.0, 5.0));

        let verts = canvas.vertices();
        assert_eq!(canvas.line_count(), 2);
        assert_eq!(verts[0].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(verts[2].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(verts[3].position, [320.0, 235.0]);
    }

    #[test]
    fn clear_drops_lines_and_keeps_color() {
        let mut canvas = LineCanvas::new(100.0, 100.0);
        canvas.set_draw_color(Color::RED);
        canvas.draw_crosshair(4.0);
        assert_eq!(canvas.line_count(), 2);
        canvas.clear(Color::BLACK);
        assert_eq!(canvas.line_count(), 0);
        assert_eq!(canvas.draw_color(), Color::RED);
        assert_eq!(canvas.clear_color(), Color::BLACK);
    }

    #[test]
    fn crosshair_is_centered() {
        let mut canvas = LineCanvas::new(640.0, 480.0);
        canvas.draw_crosshair(4.0);
        let v = canvas.vertices();
        assert_eq!(v[0].position, [324.0, 236.0]);
        assert_eq!(v[1].position, [316.0, 244.0]);
        assert_eq!(v[2].position, [316.0, 236.0]);
        assert_eq!(v[3].position, [324.0, 244.0]);
    }
}
