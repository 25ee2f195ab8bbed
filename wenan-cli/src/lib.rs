//! wenan CLI library
//!
//! This library provides the command-line interface for the wenan
//! marketing copy and text segmentation pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
