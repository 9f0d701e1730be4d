//! Walking a sequence of optionals and keeping only what is there.
//!
//! EDUCATIONAL PURPOSE: this is the `for case let number? in array` loop from
//! pattern-matching tours, expressed as an iterator adaptor. Nothing is
//! collected up front; each `next` pulls from the underlying sequence until
//! it finds a present element or runs out.

use core::iter::FusedIterator;

use crate::optional::Optional;

/// Lazy iterator over the payloads of the `Present` elements of `I`.
///
/// Created by [`present_values`] or [`PresentValuesExt::present_values`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PresentValues<I> {
    inner: I,
}

impl<I> PresentValues<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<T, I> Iterator for PresentValues<I>
where
    I: Iterator<Item = Optional<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        for element in self.inner.by_ref() {
            if let Optional::Present(value) = element {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Any element may turn out to be absent.
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<T, I> DoubleEndedIterator for PresentValues<I>
where
    I: DoubleEndedIterator<Item = Optional<T>>,
{
    fn next_back(&mut self) -> Option<T> {
        while let Some(element) = self.inner.next_back() {
            if let Optional::Present(value) = element {
                return Some(value);
            }
        }
        None
    }
}

impl<T, I> FusedIterator for PresentValues<I> where I: FusedIterator<Item = Optional<T>> {}

/// Filters `seq` down to the payloads of its present elements, in order.
///
/// An empty or fully absent input yields nothing.
pub fn present_values<T, S>(seq: S) -> PresentValues<S::IntoIter>
where
    S: IntoIterator<Item = Optional<T>>,
{
    PresentValues::new(seq.into_iter())
}

/// Adds `.present_values()` to every iterator of optionals.
pub trait PresentValuesExt<T>: Iterator<Item = Optional<T>> + Sized {
    fn present_values(self) -> PresentValues<Self> {
        PresentValues::new(self)
    }
}

impl<T, I> PresentValuesExt<T> for I where I: Iterator<Item = Optional<T>> {}
