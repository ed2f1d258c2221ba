//! Orchestrator - the event generation loop
//!
//! Validates configuration, owns the single RNG stream, and drives the
//! sampler and frame builder for exactly `event_count` iterations.
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{Generator, GeneratorError};
