// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros, which handle the
//! floating-point precision issues `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may carry minor
/// floating-point error from arithmetic.
pub const F64_EPSILON: f64 = 1e-10;
