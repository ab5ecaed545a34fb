//! Application layer: public entry points that pick a randomness source.

pub mod generators;
pub mod random_length;
