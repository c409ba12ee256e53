//! Core types and trait definitions for the VaporTrack wishlist engine.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod item;
pub mod memory;
pub mod price;
pub mod store;

pub use error::{Error, Result};
