//! CLI utilities for textpress
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Size and duration formatting

#![warn(missing_docs)]

pub mod output;
