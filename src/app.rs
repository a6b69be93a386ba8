// src/app.rs

use std::sync::Arc;
use std::time::Instant;

use winit::{event::WindowEvent, window::Window};

use cell_view::config::ViewConfig;
use cell_view::engine_lib::cell::Cell;
use cell_view::engine_lib::controller::PlayerController;
use cell_view::engine_lib::demo_cell;
use cell_view::engine_lib::frame_clock::FrameClock;
use cell_view::engine_lib::player::{CollisionProbe, Player};
use cell_view::error::InitError;
use cell_view::rendering_lib::{GpuContext, LineCanvas, LineRenderer, WGSL_SHADER_SOURCE};

use crate::ui::{build_ui, HudInfo};

pub struct CellViewApp {
    gpu: GpuContext,
    renderer: LineRenderer,
    canvas: LineCanvas,
    view_config: ViewConfig,
    cell: Cell,
    player: Player,
    controller: PlayerController,
    frame_clock: FrameClock,
    probes: Vec<CollisionProbe>,
    warned_edges: usize,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl CellViewApp {
    pub async fn new(window: Arc<Window>, view_config: ViewConfig) -> Result<Self, InitError> {
        let gpu = GpuContext::new(window.clone()).await?;

        let canvas_width = view_config.window_width as f32;
        let canvas_height = view_config.window_height as f32;
        let renderer = LineRenderer::new(
            &gpu.device, gpu.config.format, WGSL_SHADER_SOURCE,
            canvas_width, canvas_height,
        );
        let canvas = LineCanvas::new(canvas_width, canvas_height);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1);

        let cell = demo_cell::create_demo_cell();
        let player = demo_cell::create_demo_player(&cell, &view_config);
        let probes = player.collision_probes();
        log::info!("cell ready with {} edges", cell.edge_count());

        Ok(Self {
            gpu, renderer, canvas,
            cell, player,
            controller: PlayerController::new(),
            frame_clock: FrameClock::new(view_config.frame_delay),
            probes,
            warned_edges: 0,
            egui_ctx, egui_state, egui_renderer,
            view_config,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.gpu.size }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Whether a new frame is due. Wake-ups before the deadline return false.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        self.frame_clock.tick(now)
    }

    pub fn next_frame(&self) -> Option<Instant> {
        self.frame_clock.next_frame()
    }

    pub fn quit_requested(&self) -> bool {
        self.controller.quit_requested()
    }

    pub fn update(&mut self) {
        self.probes = self.player.movement(self.controller.move_input());

        let warned = self.probes.iter().filter(|p| p.is_warning()).count();
        if warned != self.warned_edges {
            log::debug!(
                "player at ({:.1}, {:.1}) is outside {} edge(s)",
                self.player.position().x, self.player.position().y, warned,
            );
            self.warned_edges = warned;
        }
    }

    fn draw_frame(&mut self) {
        let cfg = &self.view_config;
        self.canvas.clear(cfg.background_color);
        self.canvas.set_draw_color(cfg.line_color);
        self.canvas.draw_crosshair(cfg.crosshair_half_size);
        self.cell.draw_from(&self.player.camera(), &mut self.canvas);
        self.player.draw_probes(&self.probes, &mut self.canvas, cfg.warning_color);
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        self.draw_frame();

        let output_texture = self.gpu.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.render_canvas(
            &self.gpu.device, &self.gpu.queue, &mut encoder, &view, &self.canvas,
        );

        if self.view_config.show_overlay {
            self.render_overlay(window, &mut encoder, &view);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    fn render_overlay(
        &mut self,
        window: &Window,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let info = HudInfo {
            position: self.player.position(),
            heading: self.player.heading(),
            edge_count: self.player.current_cell().edge_count(),
            warned_edges: self.warned_edges,
        };

        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| { build_ui(ctx, &info); });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.gpu.device, &self.gpu.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.gpu.device, &self.gpu.queue, encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if self.controller.handle_window_event(event) { return true; }
        self.view_config.show_overlay && self.egui_state.on_window_event(window, event).consumed
    }
}
