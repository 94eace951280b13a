//! # hwbot-core
//!
//! Core types, traits, configuration, and error handling for the hwbot
//! notifier.

pub mod config;
pub mod error;
pub mod traits;
