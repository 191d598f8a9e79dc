//! Renderers for assessment results and reference listings.
//!
//! - [`terminal`] — colored, tabular output; respects `--verbose` / `--quiet`.
//!
//! JSON output is produced directly with `serde_json` by the caller.

pub mod terminal;
