//! Networking: wire types and HTTP helpers for the relay server.

pub mod api;
pub mod types;
