//! # Trackhue
//!
//! Command-line host for the channel color engine. Loads configuration and
//! themes, owns the process-wide theme manager and prints channel colors and
//! style variables for the active theme.
//!
//! ## Modules
//!
//! - [`commands`] - Command-line parsing and command execution
//! - [`config`] - Configuration loading, limits and directory setup
//! - [`error`] - Error types for the host application
//! - [`logger`] - Logging configuration
//! - [`theme`] - Theme files, validation and the global theme manager
//! - [`validation`] - Validator trait shared by the theme validators
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

pub use error::{AppError, AppResult};
pub use validation::Validator;
