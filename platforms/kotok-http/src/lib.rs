//! HTTP boundary for the kotok tokenizer.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::Settings;
pub use handlers::configure_routes;
pub use state::AppState;
