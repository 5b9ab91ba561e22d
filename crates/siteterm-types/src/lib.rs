//! Foundation types for siteterm.
//!
//! This crate contains the platform-agnostic types shared by all siteterm
//! crates: page identity, key events, configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod page;
