//! Web surface for Project Compass.
//!
//! Serves a single page where project notes are pasted and turned into a
//! structured summary with a timeline chart, plus a small JSON API:
//! - `GET /` and `POST /`: the interactive page
//! - `POST /api/summarize`: the same pipeline, as JSON
//! - `GET /api/health`: liveness and whether extraction is enabled
//!
//! # Example
//!
//! ```ignore
//! use compass_core::ProviderSettings;
//! use compass_web::{serve, AppState, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WebConfig::default();
//!     let state = AppState::new(config.clone(), &ProviderSettings::from_env())?;
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::WebConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::{AppState, Extraction};
pub use view::{Outcome, PageRenderer, SummaryView, Timeline};
