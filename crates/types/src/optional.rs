//! A value that may be present or absent.
//!
//! EDUCATIONAL PURPOSE: `Optional<T>` spells out what the standard `Option`
//! is underneath: an enumeration with two cases, one of which carries a
//! payload. Absence is its own case, so no value of `T` has to be reserved
//! as a sentinel for "nothing here".

/// Either no value (`Absent`) or exactly one value of `T` (`Present`).
///
/// The state is fixed at construction. There is no way to borrow the payload
/// mutably; to change presence, build a new container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Optional<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Optional<T> {
    /// Constructs an `Optional::Present(value)` variant.
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Constructs an `Optional::Absent` variant.
    pub const fn absent() -> Self {
        Optional::Absent
    }

    /// Returns true if the value is `Present`.
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns true if the value is `Absent`.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// This is the non-consuming way to inspect a container: matching on
    /// the result any number of times gives the same branch and payload.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Visits the container with one handler per case.
    ///
    /// Both handlers must be supplied, so a caller can't forget the absent
    /// case. The payload only reaches `on_present`.
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Absent => on_absent(),
        }
    }

    /// Runs `f` with the payload if there is one; does nothing otherwise.
    ///
    /// Mirrors the single-case pattern `if let Optional::Present(x) = ..`.
    pub fn if_present<F: FnOnce(&T)>(&self, f: F) {
        if let Optional::Present(value) = self {
            f(value);
        }
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `f` to the payload.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Expects the value to be `Present`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when the container is `Absent`. Reaching that
    /// panic is a bug in the caller, which should have matched first.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!("{}", msg),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    /// Yields the payload once, or nothing.
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self.as_ref()).into_iter()
    }
}
