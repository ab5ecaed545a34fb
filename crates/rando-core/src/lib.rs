//! Rando Core — shared abstractions.
//!
//! This crate defines the randomness capability, the error types, and the
//! small configuration and input types that the generators depend on. It
//! contains no generation logic.

pub mod error;
pub mod limits;
pub mod rng;
pub mod scalar;
