//! # hwbot-api
//!
//! Client for the Practicum homework-status API plus the payload
//! validation and status-to-verdict translation that sits on top of it.

mod client;
mod status;
mod validate;

#[cfg(test)]
mod tests;

pub use client::PracticumClient;
pub use status::parse_status;
pub use validate::{check_response, Snapshot};
