/// Per-pair rendering: context assembly, output paths, overwrite policy.
pub mod artifact;

/// Sources of raw entity-tagged class descriptors.
pub mod catalog;

/// Handles argument parsing.
pub mod cli;

/// Configuration handling for generation runs.
pub mod config;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Orchestration of full generation runs.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Normalized entity metadata and annotation-dialect parsers.
pub mod metadata;

/// Template parsing and rendering functionality.
pub mod renderer;
