/// A distance, named for readability. The alias adds no new type: a `Length`
/// is an `f64` and mixes freely with one.
pub type Length = f64;

pub const ZERO_LENGTH: Length = 0.0;
