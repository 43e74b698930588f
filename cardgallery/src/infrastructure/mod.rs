// src/infrastructure/mod.rs
pub mod config;
pub mod dataset;
pub mod renderer;
pub mod server;

pub use config::Config;
pub use dataset::JsonCardRepository;
pub use renderer::ContentRenderer;
pub use server::{build_router, serve, AppState};
