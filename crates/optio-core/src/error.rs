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

//! # Absence-Violation Error
//!
//! `NoneError` is the single error kind of the optio algebra. It is produced
//! when a caller demands the payload of a `None`, either through a panicking
//! extractor (`unwrap`, `expect`) or through one of the `Result`-returning
//! forms (`try_unwrap`, `try_expect`, `expect_with`).
//!
//! The error only carries a human-readable message. `NoneError::new()` uses
//! the fixed message `"option is None"`; `NoneError::with_message` carries a
//! caller-supplied description.
//!
//! ```rust
//! use optio_core::NoneError;
//!
//! assert_eq!(NoneError::new().to_string(), "option is None");
//! assert_eq!(NoneError::with_message("missing port").message(), "missing port");
//! ```

use std::borrow::Cow;

/// The message carried by `NoneError::new()`.
pub const NONE_MESSAGE: &str = "option is None";

/// The error raised when a value is extracted from `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoneError {
    message: Cow<'static, str>,
}

impl NoneError {
    /// Creates the generic absence-violation error with the message
    /// `"option is None"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio_core::NoneError;
    /// let error = NoneError::new();
    /// assert_eq!(error.message(), "option is None");
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(NONE_MESSAGE),
        }
    }

    /// Creates an absence-violation error with a caller-supplied message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio_core::NoneError;
    /// let error = NoneError::with_message(format!("no entry for key {}", 3));
    /// assert_eq!(error.to_string(), "no entry for key 3");
    /// ```
    #[inline]
    pub fn with_message<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            message: message.into(),
        }
    }

    /// Returns the description of this error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns its description.
    #[inline]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

impl Default for NoneError {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NoneError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let error = NoneError::new();
        assert_eq!(error.message(), "option is None");
        assert_eq!(format!("{}", error), "option is None");
        assert_eq!(NoneError::default(), error);
    }

    #[test]
    fn test_custom_message_owned_and_borrowed() {
        let borrowed = NoneError::with_message("<message>");
        let owned = NoneError::with_message(String::from("<message>"));

        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.to_string(), "<message>");
        assert_eq!(owned.into_message(), "<message>");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

        let error = NoneError::new();
        assert_error(&error);

        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert_eq!(boxed.to_string(), "option is None");
    }
}
