//! Environment utilities and constants for ednaplot
//!
//! Resolves where the qPCR measurement data lives on disk, either from
//! the EDNAPLOT_DIR environment variable or from the working directory.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
