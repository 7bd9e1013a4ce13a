#![forbid(unsafe_code)]

//! Optmeta: typed command-line option metadata and deterministic value reports
//!
//! Optmeta describes the options an application accepts without parsing any
//! argument vector itself: a typed descriptor per option, a validated
//! registry collecting them, and formatters that render an externally
//! resolved name-to-value mapping as an aligned table or JSON records.

pub mod cli;
pub mod config;
pub mod model;
pub mod registry;
pub mod report;
