//! Configuration loading
//!
//! Handles loading from config files with CLI flags taking precedence
//! (CLI > File > Defaults).

pub mod loader;

pub use loader::load_config;
