//! # hwbot-channels
//!
//! Messaging platform integrations. Telegram is the only channel.

pub mod telegram;
