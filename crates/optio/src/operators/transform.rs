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

//! # Transform Operators
//!
//! Combinators that reshape an option or the value inside it.
//!
//! - `map`, `map_or`, `map_or_else` apply a function to the payload.
//! - `filter` keeps or drops the payload based on a predicate.
//! - `flat` removes one level of nesting from `Option<Option<T>>`.
//! - `zip` pairs the payloads of two options.
//!
//! `map` obeys the functor laws: mapping the identity changes nothing, and
//! `map(map(o, f), g)` equals `map(o, |x| g(f(x)))`.

use optio_core::Option;

/// Maps an `Option<T>` to an `Option<U>` by applying `f` to the contained
/// value, or returns `None`.
///
/// `f` runs exactly once if the option is `Some`, and never otherwise.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, map};
/// let option: Option<&str> = Some("Hello, World!");
/// assert_eq!(map(option, str::len), Some(13));
/// ```
#[inline]
pub fn map<T, U, F>(option: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    match option {
        Option::Some(value) => Option::Some(f(value)),
        Option::None => Option::None,
    }
}

/// Returns `default` if the option is `None`, otherwise applies `f` to the
/// contained value.
///
/// `default` is evaluated by the caller. Use [`map_or_else`] to defer it.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, map_or};
/// assert_eq!(map_or(Some("Hello"), 0, str::len), 5);
/// assert_eq!(map_or(Option::<&str>::None, 0, str::len), 0);
/// ```
#[inline]
pub fn map_or<T, U, F>(option: Option<T>, default: U, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    match option {
        Option::Some(value) => f(value),
        Option::None => default,
    }
}

/// Returns `default_fn()` if the option is `None`, otherwise applies `f` to the
/// contained value.
///
/// Exactly one of the two closures runs.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, map_or_else};
/// assert_eq!(map_or_else(Some("Hello"), || 2_usize.pow(3), str::len), 5);
/// assert_eq!(map_or_else(Option::<&str>::None, || 2_usize.pow(3), str::len), 8);
/// ```
#[inline]
pub fn map_or_else<T, U, D, F>(option: Option<T>, default_fn: D, f: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    match option {
        Option::Some(value) => f(value),
        Option::None => default_fn(),
    }
}

/// Returns `None` if the option is `None`, otherwise calls `predicate` with a
/// borrow of the contained value and returns:
///
/// - the original `Some`, moved through unchanged, if `predicate` returns `true`;
/// - `None` if `predicate` returns `false`.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, filter};
/// let is_even = |v: &i32| v % 2 == 0;
///
/// assert_eq!(filter(Some(0), is_even), Some(0));
/// assert_eq!(filter(Some(1), is_even), None);
/// assert_eq!(filter(None, is_even), None);
/// ```
#[inline]
pub fn filter<T, P>(option: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    if let Option::Some(value) = &option
        && !predicate(value)
    {
        return Option::None;
    }

    option
}

/// Removes one level of nesting from an `Option<Option<T>>`.
///
/// A `Some` outer option yields its inner option as is, whichever variant it
/// holds.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, flat};
/// assert_eq!(flat(Some(Some(6))), Some(6));
/// assert_eq!(flat(Some(Option::<i32>::None)), None);
/// assert_eq!(flat(Option::<Option<i32>>::None), None);
/// ```
#[inline]
pub fn flat<T>(option: Option<Option<T>>) -> Option<T> {
    match option {
        Option::Some(inner) => inner,
        Option::None => Option::None,
    }
}

/// Zips two options into an option of a pair.
///
/// Returns `Some((a, b))` if both are `Some`, otherwise `None`.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, zip};
/// assert_eq!(zip(Some(1), Some("hi")), Some((1, "hi")));
/// assert_eq!(zip(Some(1), Option::<&str>::None), None);
/// assert_eq!(zip(Option::<i32>::None, Some("hi")), None);
/// ```
#[inline]
pub fn zip<T, U>(option: Option<T>, optb: Option<U>) -> Option<(T, U)> {
    match (option, optb) {
        (Option::Some(a), Option::Some(b)) => Option::Some((a, b)),
        _ => Option::None,
    }
}

/// Method-call form of the transform operators.
pub trait OptionTransform<T>: Sized {
    /// See [`map`].
    fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U;

    /// See [`map_or`].
    fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U;

    /// See [`map_or_else`].
    fn map_or_else<U, D, F>(self, default_fn: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U;

    /// See [`filter`].
    fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// See [`zip`].
    fn zip<U>(self, optb: Option<U>) -> Option<(T, U)>;
}

impl<T> OptionTransform<T> for Option<T> {
    #[inline]
    fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        map(self, f)
    }

    #[inline]
    fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        map_or(self, default, f)
    }

    #[inline]
    fn map_or_else<U, D, F>(self, default_fn: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        map_or_else(self, default_fn, f)
    }

    #[inline]
    fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        filter(self, predicate)
    }

    #[inline]
    fn zip<U>(self, optb: Option<U>) -> Option<(T, U)> {
        zip(self, optb)
    }
}

/// Method-call form of [`flat`], available on nested options only.
pub trait OptionFlatten<T> {
    /// See [`flat`].
    fn flat(self) -> Option<T>;
}

impl<T> OptionFlatten<T> for Option<Option<T>> {
    #[inline]
    fn flat(self) -> Option<T> {
        flat(self)
    }
}
