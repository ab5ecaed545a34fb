//! Rando Numeric — constrained scalar generation.
//!
//! Produces integers, floats and complex numbers with an exact number of
//! decimal digits, optionally restricted to an inclusive range, drawing from
//! either a fast or a cryptographically secure randomness source.

pub mod application;
pub mod domain;
