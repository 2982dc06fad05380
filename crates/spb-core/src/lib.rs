//! Core domain + application logic for the Study Planner Bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the edge
//! function live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod schedule;
pub mod security;

pub use errors::{Error, Result};
