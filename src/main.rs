// src/main.rs

pub mod app;
pub mod ui;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use app::CellViewApp;
use cell_view::config::ViewConfig;

pub async fn run() -> anyhow::Result<()> {
    env_logger::init();

    let view_config = ViewConfig::default();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(view_config.window_title.as_str())
            .with_inner_size(PhysicalSize::new(view_config.window_width, view_config.window_height))
            .with_position(PhysicalPosition::new(view_config.window_position.0, view_config.window_position.1))
            .with_resizable(false)
            .build(&event_loop)
            .context("failed to create window")?,
    );
    log::info!(
        "opened {}x{} window \"{}\"",
        view_config.window_width, view_config.window_height, view_config.window_title,
    );

    let mut app_state = CellViewApp::new(window.clone(), view_config)
        .await
        .context("failed to create renderer")?;

    event_loop
        .run(move |event, target: &EventLoopWindowTarget<()>| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    if !app_state.handle_window_event(event, &window) {
                        match event {
                            WindowEvent::CloseRequested => {
                                target.exit();
                            }
                            WindowEvent::Resized(physical_size) => {
                                app_state.resize(*physical_size);
                            }
                            _ => {}
                        }
                    }
                    if app_state.quit_requested() {
                        target.exit();
                    }
                }
                Event::AboutToWait => {
                    if target.exiting() {
                        return;
                    }

                    if !app_state.frame_due(Instant::now()) {
                        if let Some(next) = app_state.next_frame() {
                            target.set_control_flow(ControlFlow::WaitUntil(next));
                        }
                        return;
                    }

                    app_state.update();
                    match app_state.render(&window) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            log::warn!("surface lost or outdated, reconfiguring");
                            app_state.resize(app_state.get_size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("wgpu out of memory, exiting");
                            target.exit();
                        }
                        Err(e) => log::warn!("surface error: {:?}", e),
                    }

                    if let Some(next) = app_state.next_frame() {
                        target.set_control_flow(ControlFlow::WaitUntil(next));
                    }
                }
                Event::LoopExiting => {
                    log::info!("shutting down");
                }
                _ => {}
            }
        })
        .context("event loop failed")?;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
