//! Client for the Sky on demand catalogue and decoder for its loosely typed
//! node payloads.
//!
//! The decoders in [`sky::models`] turn response bodies into typed trees,
//! dropping individual children that match no known shape. [`sky::decode`]
//! holds the byte level entry points and [`sky::client::Sky`] fetches the
//! bodies.

pub mod config;
pub mod sky;
