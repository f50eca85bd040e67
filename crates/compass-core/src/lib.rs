//! Compass Core - extraction pipeline for Project Compass.
//!
//! Turns free-form project notes into a [`ProjectSummary`]:
//!
//! - **prompt**: fixed instruction template with a single text placeholder
//! - **client**: model-provider abstraction and the Gemini structured-output client
//! - **extractor**: prompt → one provider call → re-validated summary
//! - **timeline**: milestone date parsing into row-oriented chart input
//! - **config**: provider credential and settings read once at startup
//! - **error**: the error taxonomy and its user-facing messages
//!
//! [`ProjectSummary`]: compass_models::ProjectSummary

pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod prompt;
pub mod timeline;

pub use client::{GeminiClient, StructuredModel};
pub use config::{load_env_files, ApiKey, ProviderSettings};
pub use error::{CompassError, Result};
pub use extractor::Extractor;
pub use prompt::{build_prompt, PROMPT_TEMPLATE};
pub use timeline::{milestone_rows, parse_date, MilestoneRow};
