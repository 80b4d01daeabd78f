//! Apigen - component API documentation data generator
//!
//! Apigen extracts the props, events, slots and exposed members of every
//! component in a UI library, writes per-component documentation data, and
//! keeps the per-locale description files complete by inserting a
//! placeholder for each member that has no description yet.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation engine (extraction pool, merge cache, flush)
//! - `logger`: Logging setup
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod utils;
