//! Utility modules for request configuration

pub mod config;

pub use config::{ConfigError, RequestProfile};
