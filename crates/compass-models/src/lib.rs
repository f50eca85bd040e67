//! Core data models for Project Compass.
//!
//! This crate defines the record shape a language model is asked to fill
//! in when it extracts structure from free-form project notes: a
//! [`ProjectSummary`] composed of [`Milestone`], [`Risk`] and [`Decision`]
//! entries, together with the schema document handed to the provider's
//! structured-output mode.

pub mod schema;
pub mod summary;

pub use schema::response_schema;
pub use summary::{Decision, Milestone, ProjectSummary, Risk};
