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

//! Glob-import this module to bring the option type, its variants, and the
//! method forms of every operator into scope.
//!
//! ```rust
//! use optio::prelude::*;
//!
//! let len = Some("Hello").map(str::len).filter(|n| *n > 3).unwrap_or(0);
//! assert_eq!(len, 5);
//! ```
//!
//! The glob shadows the standard library's `Option`, `Some`, and `None`.
//! Refer to those as `core::option::Option` where both are needed.

pub use crate::operators::extract::{Matcher, OptionExtract};
pub use crate::operators::logical::OptionLogical;
pub use crate::operators::query::OptionQuery;
pub use crate::operators::transform::{OptionFlatten, OptionTransform};
pub use optio_core::Option::{self, None, Some};
pub use optio_core::NoneError;
