//! EasyShop Core - Shared types library.
//!
//! This crate provides common types used across all EasyShop cart client
//! components:
//! - `cart` - Cart synchronization and checkout library
//! - `cli` - Command-line front end for driving a cart against the API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and monetary amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
