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

//! # Extract Operators
//!
//! Pull the payload out of an option. When the option is `None`, each
//! operator resolves absence in its own way:
//!
//! - `unwrap_or` substitutes an already evaluated default.
//! - `unwrap_or_else` runs a closure, only on the absent path.
//! - `match_with` runs exactly one of two closures.
//! - `try_unwrap`, `try_expect`, and `expect_with` return a `NoneError`
//!   (or a caller-built error) as `Err`.
//! - `unwrap` and `expect` panic. Reserve them for options where absence is a
//!   programming error.
//!
//! No operator here recovers on its own; recovery is always the caller's
//! choice of operator.
//!
//! With the `tracing` feature enabled, every absence violation is also
//! reported as a `debug` event on the `optio` target before it surfaces.

use optio_core::{NoneError, Option};
use std::borrow::Cow;

#[cold]
#[inline(never)]
fn report(error: NoneError) -> NoneError {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "optio", reason = error.message(), "absence violation");
    error
}

#[cold]
#[inline(never)]
#[track_caller]
fn fail(error: NoneError) -> ! {
    let error = report(error);
    panic!("{}", error)
}

/// Returns the contained `Some` value.
///
/// # Panics
///
/// Panics with `"option is None"` if the option is `None`.
///
/// # Examples
///
/// ```rust
/// # use optio::{Some, unwrap};
/// assert_eq!(unwrap(Some(0)), 0);
/// ```
///
/// ```rust,should_panic
/// # use optio::{Option, None, unwrap};
/// let option: Option<i32> = None;
/// unwrap(option); // panics with "option is None"
/// ```
#[inline]
#[track_caller]
pub fn unwrap<T>(option: Option<T>) -> T {
    match option {
        Option::Some(value) => value,
        Option::None => fail(NoneError::new()),
    }
}

/// Returns the contained `Some` value, otherwise `default`.
///
/// `default` is evaluated by the caller before the call. Use
/// [`unwrap_or_else`] when computing it is expensive.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, unwrap_or};
/// assert_eq!(unwrap_or(Some(0), 1), 0);
/// assert_eq!(unwrap_or(None, 1), 1);
/// ```
#[inline]
pub fn unwrap_or<T>(option: Option<T>, default: T) -> T {
    match option {
        Option::Some(value) => value,
        Option::None => default,
    }
}

/// Returns the contained `Some` value, otherwise computes one from `f`.
///
/// `f` runs exactly once when the option is `None` and never otherwise.
///
/// # Examples
///
/// ```rust
/// # use optio::{Some, None, unwrap_or_else};
/// assert_eq!(unwrap_or_else(Some(0), || 2_i32.pow(3)), 0);
/// assert_eq!(unwrap_or_else(None, || 2_i32.pow(3)), 8);
/// ```
#[inline]
pub fn unwrap_or_else<T, F>(option: Option<T>, f: F) -> T
where
    F: FnOnce() -> T,
{
    match option {
        Option::Some(value) => value,
        Option::None => f(),
    }
}

/// Returns the contained `Some` value.
///
/// # Panics
///
/// Panics with `message` if the option is `None`. To surface a domain error
/// of your own kind instead of panicking, use [`expect_with`].
///
/// # Examples
///
/// ```rust
/// # use optio::{Some, expect};
/// assert_eq!(expect(Some(0), "slot must be assigned"), 0);
/// ```
///
/// ```rust,should_panic
/// # use optio::{Option, None, expect};
/// let option: Option<i32> = None;
/// expect(option, "slot must be assigned");
/// ```
#[inline]
#[track_caller]
pub fn expect<T>(option: Option<T>, message: &str) -> T {
    match option {
        Option::Some(value) => value,
        Option::None => fail(NoneError::with_message(message.to_owned())),
    }
}

/// Returns the contained `Some` value, or `NoneError` with the message
/// `"option is None"`.
///
/// The non-panicking form of [`unwrap`].
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, NoneError, try_unwrap};
/// assert_eq!(try_unwrap(Some(3)), Ok(3));
/// assert_eq!(try_unwrap(Option::<i32>::None), Err(NoneError::new()));
/// ```
#[inline]
pub fn try_unwrap<T>(option: Option<T>) -> Result<T, NoneError> {
    match option {
        Option::Some(value) => Ok(value),
        Option::None => Err(report(NoneError::new())),
    }
}

/// Returns the contained `Some` value, or a `NoneError` carrying `message`.
///
/// This is [`expect_with`] using `NoneError` itself as the error kind.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, None, try_expect};
/// let option: Option<u16> = None;
/// let error = try_expect(option, "port is not configured").unwrap_err();
/// assert_eq!(error.to_string(), "port is not configured");
/// ```
#[inline]
pub fn try_expect<T, M>(option: Option<T>, message: M) -> Result<T, NoneError>
where
    M: Into<Cow<'static, str>>,
{
    expect_with(option, message, |error| error)
}

/// Returns the contained `Some` value, or an error of the caller's kind.
///
/// On `None`, `kind` receives a `NoneError` carrying `message` and converts it
/// into the caller's domain error. `kind` is never called for `Some`.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, None, NoneError, expect_with};
/// #[derive(Debug, PartialEq)]
/// enum ConfigError {
///     Missing(String),
/// }
///
/// let option: Option<u16> = None;
/// let result = expect_with(option, "port", |e: NoneError| {
///     ConfigError::Missing(e.message().to_owned())
/// });
///
/// assert_eq!(result, Err(ConfigError::Missing("port".to_owned())));
/// ```
#[inline]
pub fn expect_with<T, E, M, K>(option: Option<T>, message: M, kind: K) -> Result<T, E>
where
    M: Into<Cow<'static, str>>,
    K: FnOnce(NoneError) -> E,
{
    match option {
        Option::Some(value) => Ok(value),
        Option::None => Err(kind(report(NoneError::with_message(message)))),
    }
}

/// The two arms of a [`match_with`] call.
///
/// `some` receives the payload, `none` receives nothing; both produce the same
/// result type.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<S, N> {
    /// Called with the payload when the option is `Some`.
    pub some: S,
    /// Called when the option is `None`.
    pub none: N,
}

impl<S, N> Matcher<S, N> {
    /// Creates a matcher from its two arms.
    #[inline]
    pub const fn new(some: S, none: N) -> Self {
        Self { some, none }
    }
}

/// Calls `matcher.some` with the payload if the option is `Some`, otherwise
/// calls `matcher.none`.
///
/// Exactly one arm runs, exactly once.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, None, Matcher, match_with};
/// let status = |option: Option<u16>| {
///     match_with(option, Matcher {
///         some: |code| code,
///         none: || 500,
///     })
/// };
///
/// assert_eq!(status(Some(204)), 204);
/// assert_eq!(status(None), 500);
/// ```
#[inline]
pub fn match_with<T, U, S, N>(option: Option<T>, matcher: Matcher<S, N>) -> U
where
    S: FnOnce(T) -> U,
    N: FnOnce() -> U,
{
    match option {
        Option::Some(value) => (matcher.some)(value),
        Option::None => (matcher.none)(),
    }
}

/// Method-call form of the extract operators.
pub trait OptionExtract<T>: Sized {
    /// See [`unwrap`].
    #[track_caller]
    fn unwrap(self) -> T;

    /// See [`unwrap_or`].
    fn unwrap_or(self, default: T) -> T;

    /// See [`unwrap_or_else`].
    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T;

    /// See [`expect`].
    #[track_caller]
    fn expect(self, message: &str) -> T;

    /// See [`try_unwrap`].
    fn try_unwrap(self) -> Result<T, NoneError>;

    /// See [`try_expect`].
    fn try_expect<M>(self, message: M) -> Result<T, NoneError>
    where
        M: Into<Cow<'static, str>>;

    /// See [`expect_with`].
    fn expect_with<E, M, K>(self, message: M, kind: K) -> Result<T, E>
    where
        M: Into<Cow<'static, str>>,
        K: FnOnce(NoneError) -> E;

    /// See [`match_with`].
    fn match_with<U, S, N>(self, matcher: Matcher<S, N>) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U;
}

impl<T> OptionExtract<T> for Option<T> {
    #[inline]
    #[track_caller]
    fn unwrap(self) -> T {
        unwrap(self)
    }

    #[inline]
    fn unwrap_or(self, default: T) -> T {
        unwrap_or(self, default)
    }

    #[inline]
    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        unwrap_or_else(self, f)
    }

    #[inline]
    #[track_caller]
    fn expect(self, message: &str) -> T {
        expect(self, message)
    }

    #[inline]
    fn try_unwrap(self) -> Result<T, NoneError> {
        try_unwrap(self)
    }

    #[inline]
    fn try_expect<M>(self, message: M) -> Result<T, NoneError>
    where
        M: Into<Cow<'static, str>>,
    {
        try_expect(self, message)
    }

    #[inline]
    fn expect_with<E, M, K>(self, message: M, kind: K) -> Result<T, E>
    where
        M: Into<Cow<'static, str>>,
        K: FnOnce(NoneError) -> E,
    {
        expect_with(self, message, kind)
    }

    #[inline]
    fn match_with<U, S, N>(self, matcher: Matcher<S, N>) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match_with(self, matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optio_core::Option::{None, Some};
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_unwrap_returns_some_value() {
        assert_eq!(unwrap(Some(0)), 0);
        assert_eq!(unwrap(Some("berth")), "berth");
    }

    #[test]
    #[should_panic(expected = "option is None")]
    fn test_unwrap_panics_on_none() {
        unwrap(Option::<i32>::None);
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(unwrap_or(Some(0), 1), 0);
        assert_eq!(unwrap_or(None, 1), 1);
    }

    #[test]
    fn test_unwrap_or_else_skips_closure_on_some() {
        let calls = Cell::new(0);
        let value = unwrap_or_else(Some(0), || {
            calls.set(calls.get() + 1);
            1
        });

        assert_eq!(value, 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unwrap_or_else_calls_closure_once_on_none() {
        let calls = Cell::new(0);
        let value = unwrap_or_else(None, || {
            calls.set(calls.get() + 1);
            1
        });

        assert_eq!(value, 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_expect_returns_some_value() {
        assert_eq!(expect(Some(0), ""), 0);
    }

    #[test]
    #[should_panic(expected = "<message>")]
    fn test_expect_panics_with_message() {
        expect(Option::<i32>::None, "<message>");
    }

    #[test]
    fn test_try_unwrap() {
        assert_eq!(try_unwrap(Some(5)), Ok(5));

        let error = try_unwrap(Option::<i32>::None).unwrap_err();
        assert_eq!(error.message(), "option is None");
    }

    #[test]
    fn test_try_expect_carries_message() {
        assert_eq!(try_expect(Some(1), "unused"), Ok(1));

        let error = try_expect(Option::<i32>::None, "<message>").unwrap_err();
        assert_eq!(error, NoneError::with_message("<message>"));
    }

    #[test]
    fn test_expect_with_custom_error_kind() {
        #[derive(Debug, PartialEq)]
        struct RangeError(String);

        let calls = Cell::new(0);
        let to_range = |e: NoneError| {
            calls.set(calls.get() + 1);
            RangeError(e.message().to_owned())
        };

        assert_eq!(expect_with(Some(2), "<message>", to_range), Ok(2));
        assert_eq!(calls.get(), 0);

        let result = expect_with(Option::<i32>::None, "<message>", |e: NoneError| {
            calls.set(calls.get() + 1);
            RangeError(e.message().to_owned())
        });
        assert_eq!(result, Err(RangeError("<message>".to_owned())));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_expect_with_into_boxed_error() {
        let result: Result<u8, Box<dyn std::error::Error>> =
            expect_with(Option::<u8>::None, "<message>", |e| e.into());
        assert_eq!(result.unwrap_err().to_string(), "<message>");
    }

    #[test]
    fn test_match_with_calls_some_arm_on_some() {
        let some_args = RefCell::new(Vec::new());
        let none_calls = Cell::new(0);

        let result = match_with(
            Some(0),
            Matcher {
                some: |v| {
                    some_args.borrow_mut().push(v);
                    1
                },
                none: || {
                    none_calls.set(none_calls.get() + 1);
                    2
                },
            },
        );

        assert_eq!(result, 1);
        assert_eq!(*some_args.borrow(), vec![0]);
        assert_eq!(none_calls.get(), 0);
    }

    #[test]
    fn test_match_with_calls_none_arm_on_none() {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);

        let result = match_with(
            Option::<i32>::None,
            Matcher::new(
                |_: i32| {
                    some_calls.set(some_calls.get() + 1);
                    1
                },
                || {
                    none_calls.set(none_calls.get() + 1);
                    2
                },
            ),
        );

        assert_eq!(result, 2);
        assert_eq!(some_calls.get(), 0);
        assert_eq!(none_calls.get(), 1);
    }

    #[test]
    fn test_method_form() {
        assert_eq!(Some(4).unwrap(), 4);
        assert_eq!(Option::<i32>::None.unwrap_or(7), 7);
        assert_eq!(Option::<i32>::None.unwrap_or_else(|| 8), 8);
        assert_eq!(Some(1).expect("present"), 1);
        assert!(Option::<i32>::None.try_unwrap().is_err());
        assert_eq!(
            Some(2).match_with(Matcher::new(|v: i32| v * 10, || 0)),
            20
        );
    }
}
