//! A counter with a pure and a mutating way of going up by one.
//!
//! EDUCATIONAL PURPOSE: `increase` computes a new value and leaves the
//! counter alone, so calling it and dropping the result is almost always a
//! mistake. `#[must_use]` makes the compiler warn at such call sites and
//! names the method the caller probably wanted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Increaser {
    pub value: i64,
}

impl Increaser {
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns `value + 1`, saturating at `i64::MAX`.
    #[must_use = "`increase` does not modify the counter; use `increase_in_place` to mutate it"]
    pub const fn increase(&self) -> i64 {
        self.value.saturating_add(1)
    }

    pub fn increase_in_place(&mut self) {
        self.value = self.increase();
    }
}
