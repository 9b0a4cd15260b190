//! Library surface of the rig-script CLI.
//!
//! The binary stays thin: argument parsing and summary printing live next
//! to `main`, while logging setup and the workbook-level pipeline are
//! exposed here so integration tests can drive them without spawning a
//! process.

pub mod logging;
pub mod pipeline;
