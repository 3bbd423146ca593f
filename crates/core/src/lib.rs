//! Cartwright Core - Shared types library.
//!
//! This crate provides the common domain types used across all Cartwright
//! components:
//! - `checkout` - Shopping cart aggregation and gift card services
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and recurrence value types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
