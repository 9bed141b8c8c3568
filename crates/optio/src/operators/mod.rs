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

//! # Operators
//!
//! The optio operator set, grouped by what the operators do with an option.
//!
//! ## Submodules
//!
//! - `query`: `is_some`, `is_none`.
//! - `extract`: `unwrap`, `unwrap_or`, `unwrap_or_else`, `expect`,
//!   `expect_with`, `try_unwrap`, `try_expect`, `match_with`.
//! - `logical`: `or`, `or_else`, `and`, `and_then`, `xor`.
//! - `transform`: `map`, `map_or`, `map_or_else`, `filter`, `flat`, `zip`.
//!
//! Each operator is a free function taking the option as its first argument.
//! Every submodule also provides an extension trait (`OptionQuery`,
//! `OptionExtract`, `OptionLogical`, `OptionTransform`, `OptionFlatten`) with
//! the same operators in method form.
//!
//! No operator mutates its input. Each one either moves an input through,
//! builds a new `Some`, or returns `None`.

pub mod extract;
pub mod logical;
pub mod query;
pub mod transform;
