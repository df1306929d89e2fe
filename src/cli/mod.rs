//! CLI module for argument parsing and output formatting.
//!
//! This module provides hand-rolled command line argument parsing
//! and the text and JSON report formatters.

pub mod args;
pub mod output;
