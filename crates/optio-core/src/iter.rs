// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Option Iterators
//!
//! An option is a collection of zero or one elements. `Iter` borrows the
//! payload and `IntoIter` moves it out; both yield it at most once and then
//! stay exhausted.
//!
//! ## Highlights
//!
//! - Exact `size_hint`: `(1, Some(1))` before the payload is taken,
//!   `(0, Some(0))` afterwards or for `None`.
//! - `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `Iter` is `Clone` for every `T`, since it only holds a shared borrow.
//!
//! ```rust
//! use optio_core::Option::{self, None, Some};
//!
//! let present: Option<i32> = Some(3);
//! let absent: Option<i32> = None;
//!
//! let values: Vec<i32> = present.into_iter().chain(absent).collect();
//! assert_eq!(values, vec![3]);
//! ```

use crate::option::Option;
use std::iter::FusedIterator;

/// A borrowing iterator over the value of an [`Option`].
///
/// Created by [`Option::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> core::option::Option<Self::Item> {
        std::mem::take(&mut self.inner).into_std()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let len = remaining(&self.inner);
        (len, core::option::Option::Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> core::option::Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the value of an [`Option`].
///
/// Created by `Option::into_iter` (from the `IntoIterator` implementation).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> core::option::Option<Self::Item> {
        std::mem::take(&mut self.inner).into_std()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let len = remaining(&self.inner);
        (len, core::option::Option::Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> core::option::Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[inline(always)]
fn remaining<T>(inner: &Option<T>) -> usize {
    match inner {
        Option::Some(_) => 1,
        Option::None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::Option::{None, Some};

    #[test]
    fn test_iter_with_some() {
        let option = Some(10);
        let mut iter = option.iter();

        assert_eq!(iter.next(), core::option::Option::Some(&10));
        assert_eq!(iter.next(), core::option::Option::None);
    }

    #[test]
    fn test_iter_with_none() {
        let option: Option<i32> = None;
        let mut iter = option.iter();

        assert_eq!(iter.next(), core::option::Option::None);
    }

    #[test]
    fn test_size_hint() {
        // Case 1: payload present
        let option = Some("a");
        let mut iter = option.iter();
        assert_eq!(iter.size_hint(), (1, core::option::Option::Some(1)));
        iter.next();
        assert_eq!(iter.size_hint(), (0, core::option::Option::Some(0)));

        // Case 2: payload absent
        let empty: Option<&str> = None;
        assert_eq!(empty.iter().size_hint(), (0, core::option::Option::Some(0)));
    }

    #[test]
    fn test_exact_size_iterator() {
        let mut iter = Some(vec![1, 2, 3]).into_iter();

        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), core::option::Option::Some(vec![1, 2, 3]));
        assert_eq!(iter.len(), 0);

        let empty: IntoIter<Vec<i32>> = Option::None.into_iter();
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_double_ended() {
        let option = Some(7);
        let mut iter = option.iter();

        assert_eq!(iter.next_back(), core::option::Option::Some(&7));
        assert_eq!(iter.next(), core::option::Option::None);
    }

    #[test]
    fn test_fused_iterator() {
        let mut iter = Some(1).into_iter();

        assert_eq!(iter.next(), core::option::Option::Some(1));
        assert_eq!(iter.next(), core::option::Option::None);
        assert_eq!(iter.next(), core::option::Option::None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_iter_clone_does_not_require_clone_payload() {
        struct NotClone(u8);

        let option = Some(NotClone(9));
        let iter = option.iter();
        let copy = iter.clone();

        assert_eq!(iter.map(|v| v.0).sum::<u8>(), 9);
        assert_eq!(copy.count(), 1);
    }
}
