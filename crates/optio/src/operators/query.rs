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

//! # Query Operators
//!
//! Variant predicates. Both are total, constant-time discriminant checks that
//! borrow the option and never touch the payload.
//!
//! `is_some` returning `true` guarantees that every extractor in
//! [`extract`](crate::operators::extract) will succeed on the same option.
//!
//! ```rust
//! use optio::{Option, Some, None, is_none, is_some};
//!
//! let option: Option<u32> = Some(2);
//! assert!(is_some(&option));
//! assert!(is_none(&Option::<u32>::None));
//! ```

use optio_core::Option;

/// Returns `true` if the option is a `Some` value.
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, Some, is_some};
/// let option: Option<i32> = Some(2);
/// assert!(is_some(&option));
/// ```
#[inline]
pub const fn is_some<T>(option: &Option<T>) -> bool {
    matches!(option, Option::Some(_))
}

/// Returns `true` if the option is `None`. Always the negation of [`is_some`].
///
/// # Examples
///
/// ```rust
/// # use optio::{Option, None, is_none};
/// let option: Option<()> = None;
/// assert!(is_none(&option));
/// ```
#[inline]
pub const fn is_none<T>(option: &Option<T>) -> bool {
    !is_some(option)
}

/// Method-call form of the query operators.
pub trait OptionQuery {
    /// See [`is_some`].
    fn is_some(&self) -> bool;

    /// See [`is_none`].
    fn is_none(&self) -> bool;
}

impl<T> OptionQuery for Option<T> {
    #[inline]
    fn is_some(&self) -> bool {
        is_some(self)
    }

    #[inline]
    fn is_none(&self) -> bool {
        is_none(self)
    }
}
