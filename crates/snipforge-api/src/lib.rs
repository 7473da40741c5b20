//! Snipforge API - HTTP surface
//!
//! axum router exposing snippet CRUD, template rendering, similarity
//! ranking, multi-LLM generation and rubric upload. Route handlers stay
//! thin: policy lives here, algorithms live in `snipforge-core`.

pub mod docx;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, Result};
pub use server::{start_server, ServerConfig};
pub use state::AppState;
