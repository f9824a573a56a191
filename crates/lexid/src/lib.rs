//! Lexid library - exposes modules for testing.

pub mod config;
pub mod dictionary;
pub mod normalize;
pub mod routes;
pub mod server;
pub mod store;
