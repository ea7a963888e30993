//! # Raffle Bot
//!
//! A Telegram bot for running raffles and giveaways in chats and channels.
//!
//! ## Features
//! - Per-chat raffle configuration (templates, winner count, subscription gate)
//! - Channel configuration from a private chat with the bot
//! - Custom raffle and winner messages captured from setup-message replies
//! - Admin and superadmin permission gates
//! - Background deletion of stale bot messages
//! - Persistent storage with SQLite

rust_i18n::i18n!("locales", fallback = "en");

/// Bot command handlers, checks and update processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Background services like the message deleter and health checks
pub mod services;
/// Utility functions for templates, validation, and logging
pub mod utils;
