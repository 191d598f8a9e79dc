//! `disaster-risk` — deterministic disaster-risk scoring with preparedness guidance.
//!
//! - [`assessor`] — [`RiskAssessor`](assessor::RiskAssessor): score, level and
//!   recommendations for a (category, country, region) request.
//! - [`tables`] — immutable score, recommendation, location, hotspot and
//!   knowledge-base data.
//! - [`config`] — layered TOML configuration and configured score entries.
//! - [`predict`] — request checks and the `fail_on` gate for single predictions.
//! - [`batch`] — assessing many requests read from a JSON file.
//! - [`report`] — terminal renderers.
//! - [`cli`] — command-line arguments.

pub mod assessor;
pub mod batch;
pub mod cli;
pub mod config;
pub mod models;
pub mod predict;
pub mod report;
pub mod tables;
