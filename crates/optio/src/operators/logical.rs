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

//! # Logical Operators
//!
//! Boolean-style combinators that read `Some` as true and `None` as false.
//!
//! | operator   | `Some(a)`, `Some(b)` | `Some(a)`, `None` | `None`, `Some(b)` | `None`, `None` |
//! |------------|----------------------|-------------------|-------------------|----------------|
//! | `or`       | `Some(a)`            | `Some(a)`         | `Some(b)`         | `None`         |
//! | `and`      | `Some(b)`            | `None`            | `None`            | `None`         |
//! | `xor`      | `None`               | `Some(a)`         | `Some(b)`         | `None`         |
//!
//! Operands returned "verbatim" are moved through untouched, so a boxed payload
//! keeps its address. The closure-taking forms (`or_else`, `and_then`) call
//! their closure at most once, and only on the path that needs it.

use crate::operators::query::{is_none, is_some};
use optio_core::Option;

/// Returns `option` if it contains a value, otherwise `optb`.
///
/// `optb` is evaluated by the caller. Use [`or_else`] to defer it.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, or};
/// assert_eq!(or(Some(2), None), Some(2));
/// assert_eq!(or(None, Some(100)), Some(100));
/// assert_eq!(or(Some(2), Some(100)), Some(2));
/// assert_eq!(or(Option::<i32>::None, None), None);
/// ```
#[inline]
pub fn or<T>(option: Option<T>, optb: Option<T>) -> Option<T> {
    if is_some(&option) {
        return option;
    }

    optb
}

/// Returns `option` if it contains a value, otherwise the result of `f`.
///
/// `f` runs only when `option` is `None`.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, or_else};
/// let fallback = || Some("fallback");
///
/// assert_eq!(or_else(Some("primary"), fallback), Some("primary"));
/// assert_eq!(or_else(None, fallback), Some("fallback"));
/// ```
#[inline]
pub fn or_else<T, F>(option: Option<T>, f: F) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    if is_some(&option) {
        return option;
    }

    f()
}

/// Returns `None` if `option` is `None`, otherwise `optb`.
///
/// The payload types of the two operands are independent.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, and};
/// assert_eq!(and(Some(2), Some("foo")), Some("foo"));
/// assert_eq!(and(Some(2), Option::<&str>::None), None);
/// assert_eq!(and(Option::<i32>::None, Some("foo")), None);
/// ```
#[inline]
pub fn and<T, U>(option: Option<T>, optb: Option<U>) -> Option<U> {
    if is_none(&option) {
        return Option::NONE;
    }

    optb
}

/// Returns `None` if `option` is `None`, otherwise wraps `f(value)` in a new
/// `Some`.
///
/// The result of `f` is always wrapped: a closure returning an option yields a
/// nested option. Use [`flat`](crate::operators::transform::flat) to remove the
/// extra level.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, and_then};
/// assert_eq!(and_then(Some(2), |x: i32| x.pow(3)), Some(8));
/// assert_eq!(and_then(Option::<i32>::None, |x| x.pow(3)), None);
/// ```
#[inline]
pub fn and_then<T, U, F>(option: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    match option {
        Option::Some(value) => Option::Some(f(value)),
        Option::None => Option::None,
    }
}

/// Returns `Some` if exactly one of `option` and `optb` is `Some`, otherwise
/// `None`.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, xor};
/// assert_eq!(xor(Some(0), None), Some(0));
/// assert_eq!(xor(None, Some(1)), Some(1));
/// assert_eq!(xor(Some(0), Some(1)), None);
/// assert_eq!(xor(Option::<i32>::None, None), None);
/// ```
#[inline]
pub fn xor<T>(option: Option<T>, optb: Option<T>) -> Option<T> {
    match (option, optb) {
        (option @ Option::Some(_), Option::None) => option,
        (Option::None, optb @ Option::Some(_)) => optb,
        _ => Option::None,
    }
}

/// Method-call form of the logical operators.
pub trait OptionLogical<T>: Sized {
    /// See [`or`].
    fn or(self, optb: Option<T>) -> Option<T>;

    /// See [`or_else`].
    fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>;

    /// See [`and`].
    fn and<U>(self, optb: Option<U>) -> Option<U>;

    /// See [`and_then`].
    fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U;

    /// See [`xor`].
    fn xor(self, optb: Option<T>) -> Option<T>;
}

impl<T> OptionLogical<T> for Option<T> {
    #[inline]
    fn or(self, optb: Option<T>) -> Option<T> {
        or(self, optb)
    }

    #[inline]
    fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        or_else(self, f)
    }

    #[inline]
    fn and<U>(self, optb: Option<U>) -> Option<U> {
        and(self, optb)
    }

    #[inline]
    fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        and_then(self, f)
    }

    #[inline]
    fn xor(self, optb: Option<T>) -> Option<T> {
        xor(self, optb)
    }
}
