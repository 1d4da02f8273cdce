//! panelrun - Sequential pipeline runner for the detention-data panel build
//!
//! This library provides the core functionality for running an ordered list of
//! external data steps, gating on each step's exit status, and reporting which
//! step failed. The steps themselves (ingestion, cleaning) are opaque external
//! programs; panelrun only orchestrates them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod interpreter;
pub mod output;
pub mod pipeline;
pub mod runner;
