//! HTTP server for Skill Icons.
//!
//! This crate exposes the icon core over HTTP with `axum`:
//!
//! - `GET /icons?i=js,html,css&t=light&perline=3`: one composed SVG
//! - `GET /api/icons`: every canonical icon name as JSON
//! - `GET /api/svgs`: every catalogue key and its markup as JSON
//!
//! # Running
//!
//! ```ignore
//! use skill_icons_server::{ServerConfig, server};
//!
//! let config = ServerConfig::new("127.0.0.1", 3000).strict_aliases(true);
//! server::run(config).await?;
//! ```
//!
//! # Embedding the Router
//!
//! ```ignore
//! use std::sync::Arc;
//! use skill_icons_server::{AppState, ServerConfig, routes};
//!
//! let config = ServerConfig::default();
//! let service = Arc::new(config.load_service()?);
//! let app = routes::router(AppState::new(service, &config)?);
//! ```

pub mod cli;
pub mod config;
mod error;
mod landing;
pub mod logging;
pub mod query;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::AppState;
