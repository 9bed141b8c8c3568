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

//! # Optio Core
//!
//! The optional-value type underpinning the `optio` operator algebra. Every
//! `Option<T>` is either `Some` and holds a value, or `None` and does not.
//! Absence is an explicit, exhaustively matched case rather than a null.
//!
//! ## Modules
//!
//! - `option`: The two-variant `Option<T>` enum, the shared `None` constant,
//!   borrowed views, and conversions to and from `core::option::Option`.
//! - `error`: `NoneError`, the absence-violation error raised when a value is
//!   demanded from `None`.
//! - `iter`: Zero-or-one element iterators over an option (`Iter`, `IntoIter`).
//!
//! ## Usage
//!
//! ```rust
//! use optio_core::Option::{self, None, Some};
//!
//! let present: Option<i32> = Some(2);
//! let absent: Option<i32> = None;
//!
//! assert_eq!(present.iter().copied().sum::<i32>(), 2);
//! assert_eq!(absent, Option::NONE);
//! ```
//!
//! The operators themselves (`map`, `filter`, `and_then`, ...) live in the
//! `optio` crate.

pub mod error;
pub mod iter;
pub mod option;

pub use error::NoneError;
pub use option::Option;
