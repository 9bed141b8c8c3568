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

//! # Checked Arithmetic
//!
//! By-value checked arithmetic whose results are `optio` options: `None` marks
//! overflow, underflow, or division by zero. This turns integer arithmetic into
//! a natural source of absent values for the operator algebra.
//!
//! Implemented for every type with the `num_traits` checked operations, which
//! covers all primitive integers.
//!
//! ```rust
//! use optio::num::CheckedOption;
//! use optio::{Some, None, and_then, flat};
//!
//! assert_eq!(200_u8.checked_add_opt(50), Some(250));
//! assert_eq!(200_u8.checked_add_opt(100), None);
//!
//! let chained = flat(and_then(10_i32.checked_div_opt(2), |v| v.checked_mul_opt(3)));
//! assert_eq!(chained, Some(15));
//! ```

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};
use optio_core::Option;

/// Checked arithmetic by value, returning `optio::Option`.
pub trait CheckedOption: Sized {
    /// Checked addition. `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio::num::CheckedOption;
    /// # use optio::{Some, None};
    /// assert_eq!(i8::MAX.checked_add_opt(1), None);
    /// assert_eq!(1_i8.checked_add_opt(1), Some(2));
    /// ```
    fn checked_add_opt(self, v: Self) -> Option<Self>;

    /// Checked subtraction. `None` on underflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio::num::CheckedOption;
    /// # use optio::{Some, None};
    /// assert_eq!(0_u32.checked_sub_opt(1), None);
    /// assert_eq!(5_u32.checked_sub_opt(1), Some(4));
    /// ```
    fn checked_sub_opt(self, v: Self) -> Option<Self>;

    /// Checked multiplication. `None` on overflow.
    fn checked_mul_opt(self, v: Self) -> Option<Self>;

    /// Checked division. `None` on division by zero or overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optio::num::CheckedOption;
    /// # use optio::{Some, None};
    /// assert_eq!(7_i64.checked_div_opt(0), None);
    /// assert_eq!(i64::MIN.checked_div_opt(-1), None);
    /// assert_eq!(8_i64.checked_div_opt(2), Some(4));
    /// ```
    fn checked_div_opt(self, v: Self) -> Option<Self>;
}

impl<N> CheckedOption for N
where
    N: CheckedAdd + CheckedSub + CheckedMul + CheckedDiv,
{
    #[inline(always)]
    fn checked_add_opt(self, v: Self) -> Option<Self> {
        self.checked_add(&v).into()
    }

    #[inline(always)]
    fn checked_sub_opt(self, v: Self) -> Option<Self> {
        self.checked_sub(&v).into()
    }

    #[inline(always)]
    fn checked_mul_opt(self, v: Self) -> Option<Self> {
        self.checked_mul(&v).into()
    }

    #[inline(always)]
    fn checked_div_opt(self, v: Self) -> Option<Self> {
        self.checked_div(&v).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optio_core::Option::{None, Some};

    #[test]
    fn test_checked_add_opt() {
        assert_eq!(250_u8.checked_add_opt(5), Some(255));
        assert_eq!(250_u8.checked_add_opt(6), None);
        assert_eq!(i128::MAX.checked_add_opt(1), None);
    }

    #[test]
    fn test_checked_sub_opt() {
        assert_eq!(10_usize.checked_sub_opt(10), Some(0));
        assert_eq!(10_usize.checked_sub_opt(11), None);
        assert_eq!(i16::MIN.checked_sub_opt(1), None);
    }

    #[test]
    fn test_checked_mul_opt() {
        assert_eq!(20_u8.checked_mul_opt(10), Some(200));
        assert_eq!(20_u8.checked_mul_opt(20), None);
    }

    #[test]
    fn test_checked_div_opt() {
        assert_eq!(9_i32.checked_div_opt(3), Some(3));
        assert_eq!(9_i32.checked_div_opt(0), None);
        assert_eq!(i32::MIN.checked_div_opt(-1), None);
    }
}
