//! Shared test doubles for the rando generators.

mod rng;

pub use rng::{CountingRng, Gate, GatedRng, PanickingRng, SequenceRng};
