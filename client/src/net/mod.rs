//! Networking modules for the LearnHub REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the read-only HTTP calls and `types` defines the wire schema
//! those calls decode into.

pub mod api;
pub mod types;
