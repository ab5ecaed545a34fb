//! Domain layer: value types, validation and the sampling algorithms.

pub mod bounds;
pub mod complex;
pub mod float;
pub mod integer;
pub mod length_range;
pub mod validation;
pub mod values;
