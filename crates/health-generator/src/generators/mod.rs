//! Field-level samplers.
//!
//! Each function takes the RNG explicitly so the record generator can hand
//! out its single seeded `StdRng` while keeping the config and pools borrowed.

pub mod name;
pub mod numeric;
pub mod pattern;
pub mod sample;
