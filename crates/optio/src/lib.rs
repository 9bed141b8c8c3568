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

//! # Optio
//!
//! Optional values and a small algebra of pure operators over them.
//!
//! An [`Option<T>`](Option) is either `Some` and holds a value, or `None` and
//! does not. This crate provides the operators for working with one without
//! ever reaching for a null:
//!
//! - Querying the variant: [`is_some`], [`is_none`].
//! - Extracting the value: [`unwrap`], [`unwrap_or`], [`unwrap_or_else`],
//!   [`expect`], [`expect_with`], [`try_unwrap`], [`try_expect`],
//!   [`match_with`].
//! - Combining options as booleans: [`or`], [`or_else`], [`and`],
//!   [`and_then`], [`xor`].
//! - Transforming: [`map`], [`map_or`], [`map_or_else`], [`filter`], [`flat`],
//!   [`zip`].
//!
//! All operators are also available as methods through the extension traits
//! in [`prelude`].
//!
//! ## Usage
//!
//! ```rust
//! use optio::{Option, None, filter, map, unwrap_or};
//!
//! fn parse_port(text: &str) -> Option<u16> {
//!     Option::from_std(text.parse::<u16>().ok())
//! }
//!
//! let port = unwrap_or(filter(parse_port("8080"), |p| *p >= 1024), 80);
//! assert_eq!(port, 8080);
//!
//! let doubled = map(parse_port("not a port"), |p| p * 2);
//! assert_eq!(doubled, None);
//! ```
//!
//! ## Errors
//!
//! Only [`unwrap`] and [`expect`] can fail, and only on `None`: they panic
//! with a [`NoneError`] message. Their `try_*` counterparts and
//! [`expect_with`] return the error instead. Panics raised inside
//! caller-supplied closures propagate unchanged.
//!
//! ## Features
//!
//! - `tracing`: report absence violations as `debug` events on the `optio`
//!   target.

pub mod num;
pub mod operators;
pub mod prelude;

pub use operators::extract::{
    Matcher, expect, expect_with, match_with, try_expect, try_unwrap, unwrap, unwrap_or,
    unwrap_or_else,
};
pub use operators::logical::{and, and_then, or, or_else, xor};
pub use operators::query::{is_none, is_some};
pub use operators::transform::{filter, flat, map, map_or, map_or_else, zip};
pub use optio_core::Option::{self, None, Some};
pub use optio_core::{NoneError, error::NONE_MESSAGE};
