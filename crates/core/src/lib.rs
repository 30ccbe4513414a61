//! Solemate Core - Shared types library.
//!
//! This crate provides the types used across all Solemate components:
//! - `api` - REST backend serving `/api/*`
//! - `storefront` - Store layer, components and the public site
//! - `cli` - Migrations, seeding and user management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. The API serializes these types and the storefront
//! deserializes the very same definitions, so the wire format has one source.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails
//! - [`models`] - Catalog, order and user entities plus their write payloads
//! - [`resource`] - The [`Resource`] trait tying an entity to its REST path

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod resource;
pub mod types;

pub use models::*;
pub use resource::Resource;
pub use types::*;
