#![no_std]

pub mod alias;
pub use alias::{Length, ZERO_LENGTH};

pub mod increaser;
pub use increaser::Increaser;

// Optional module
pub mod optional;
pub use optional::Optional;

pub mod sequence;
pub use sequence::{present_values, PresentValues, PresentValuesExt};
