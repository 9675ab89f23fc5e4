pub mod app;
pub mod bracket;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;
