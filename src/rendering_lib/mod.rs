// src/rendering_lib/mod.rs

pub mod canvas;
pub mod gpu;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use canvas::{Color, LineCanvas};
pub use gpu::GpuContext;
pub use renderer::LineRenderer;
pub use shader::WGSL_SHADER_SOURCE;
pub use vertex::Vertex;
