// src/ui.rs

use cell_view::engine_lib::geometry::Point2;

pub struct HudInfo {
    pub position: Point2,
    pub heading: f32,
    pub edge_count: usize,
    pub warned_edges: usize,
}

pub fn build_ui(ctx: &egui::Context, info: &HudInfo) {
    egui::Window::new("Controls & Info")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Position: ({:.1}, {:.1})", info.position.x, info.position.y));
                ui.label(format!("Heading: {:.1}°", info.heading.to_degrees()));
                ui.label(format!("Outside {} of {} edges", info.warned_edges, info.edge_count));
                ui.separator();

                ui.label("🎮 Keyboard Controls:");
                ui.label("   W/S: Forward / Back");
                ui.label("   A/D: Strafe Left / Right");
                ui.label("   Q/E: Turn Left / Right");
                ui.label("   Enter: Quit");
            });
        });
}
