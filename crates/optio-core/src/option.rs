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

//! # The Option Type
//!
//! `Option<T>` is a closed, two-variant sum type: `Some(T)` wraps exactly one
//! value, `None` carries nothing. There is no third state and no way to hold a
//! `Some` without a value.
//!
//! ## Invariants
//!
//! - `Some` is immutable once built. This crate hands out shared borrows of the
//!   payload (`as_ref`, `iter`) but never a mutable one.
//! - `None` is a unit variant. It never allocates, is the same value for every
//!   `T`, and any two `None`s compare equal. `Option::<T>::NONE` names it in
//!   constant position.
//! - The variant can always be inspected through `&Option<T>` without moving
//!   the payload.
//!
//! ## Construction
//!
//! `Some(value)` is the one constructor for the present variant. The value is
//! moved into the container; nothing is cloned.
//!
//! ```rust
//! use optio_core::Option::{self, None, Some};
//!
//! let name: Option<String> = Some(String::from("berth"));
//! let nothing: Option<String> = None;
//!
//! assert_eq!(name.as_ref(), Some(&String::from("berth")));
//! assert_eq!(nothing, Option::NONE);
//! ```
//!
//! ## Interoperability
//!
//! Conversions to and from `core::option::Option` are provided through `From`,
//! so values crossing into the standard library (or coming out of it) need no
//! manual matching.

use crate::iter::{IntoIter, Iter};

/// An optional value: either `Some` and holding a `T`, or `None`.
///
/// `None` is declared first so that ordering agrees with the standard
/// library: `None < Some(_)` for any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    /// The absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio_core::Option;
    /// const EMPTY: Option<u32> = Option::NONE;
    /// assert_eq!(EMPTY, Option::None);
    /// ```
    pub const NONE: Self = Self::None;

    /// Converts from `&Option<T>` to `Option<&T>`.
    ///
    /// This lets operators that consume their input run on a borrowed option
    /// without giving up ownership of the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio_core::Option::{self, Some};
    /// let text: Option<String> = Some(String::from("Hello, World!"));
    /// let borrowed: Option<&String> = text.as_ref();
    ///
    /// assert_eq!(borrowed, Some(&String::from("Hello, World!")));
    /// assert_eq!(text, Some(String::from("Hello, World!")));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Returns an iterator over the possibly contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio_core::Option::{self, None, Some};
    /// let present: Option<u8> = Some(4);
    /// let absent: Option<u8> = None;
    ///
    /// assert_eq!(present.iter().collect::<Vec<_>>(), vec![&4]);
    /// assert_eq!(absent.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Wraps a standard library option.
    #[inline]
    pub fn from_std(option: core::option::Option<T>) -> Self {
        match option {
            core::option::Option::Some(value) => Self::Some(value),
            core::option::Option::None => Self::None,
        }
    }

    /// Unwraps into a standard library option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio_core::Option;
    /// let option = Option::from_std("42".parse::<u32>().ok());
    /// assert_eq!(option.into_std(), Some(42));
    /// ```
    #[inline]
    pub fn into_std(self) -> core::option::Option<T> {
        match self {
            Self::Some(value) => core::option::Option::Some(value),
            Self::None => core::option::Option::None,
        }
    }
}

impl<T> Default for Option<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> std::fmt::Display for Option<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({})", value),
            Self::None => write!(f, "None"),
        }
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    #[inline]
    fn from(option: core::option::Option<T>) -> Self {
        Self::from_std(option)
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.into_std()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
