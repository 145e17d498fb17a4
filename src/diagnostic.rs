//! Rendering of check failures.
//!
//! These messages are meant for humans. Nothing parses them back.

use std::fmt::Display;

/// `"<file>:<line>: ERROR: Check failed [ <condition> ]. <extra>"`
pub fn format_assertion_failure(
    condition: &str,
    file: &str,
    line: u32,
    extra: impl Display,
) -> String {
    format!("{file}:{line}: ERROR: Check failed [ {condition} ]. {extra}")
}

/// `"<lhs> <operator> <rhs>"`, used as the condition of a failed comparison.
///
/// Operands without a [`Display`] impl are rejected at compile time.
pub fn format_comparison_failure<L, R>(lhs: &L, rhs: &R, operator: &str) -> String
where
    L: Display + ?Sized,
    R: Display + ?Sized,
{
    format!("{lhs} {operator} {rhs}")
}
