//! Validation and summarization engine for WSDC competition result submissions.
//!
//! The [`submissions`] module holds the submission tree, the rule validators, and the
//! summarizer. [`config`], [`telemetry`], and [`error`] carry the ambient service concerns
//! shared with the HTTP binary.

pub mod config;
pub mod error;
pub mod submissions;
pub mod telemetry;
