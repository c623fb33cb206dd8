//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: tools wrapping Google Maps Platform
//! endpoints.

pub mod tools;
