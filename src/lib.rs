// src/lib.rs

pub mod config;
pub mod error;
pub mod engine_lib;
pub mod rendering_lib;

pub use config::ViewConfig;
pub use error::InitError;
