//! Checks usable inside a test body.
//!
//! A failing check ends the enclosing test. It does so in two steps:
//!
//! 1. if the run context asks for it, trap into the attached debugger while
//!    the failing frame is still on the stack
//! 2. unwind with a [`FailureSignal`] payload carrying the rendered message
//!
//! The engine catches the signal at the test boundary and reports the test
//! as an assertion failure. The functions here are usually reached through
//! the [`check!`](crate::check) family of macros, which capture the condition
//! text for the message.

use std::{
    fmt::Display,
    panic::{self, Location, UnwindSafe},
};

use thiserror::Error;

use crate::{
    context, debugger,
    diagnostic::{format_assertion_failure, format_comparison_failure},
};

/// The payload a failing check unwinds with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FailureSignal {
    pub message: String,
}

impl FailureSignal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Run `f` and hand back the signal if a check inside it failed.
    ///
    /// Panics that do not carry a [`FailureSignal`] keep unwinding.
    pub fn catch<F, R>(f: F) -> Result<R, FailureSignal>
    where
        F: FnOnce() -> R + UnwindSafe,
    {
        panic::catch_unwind(f).map_err(|payload| match payload.downcast::<FailureSignal>() {
            Ok(signal) => *signal,
            Err(payload) => panic::resume_unwind(payload),
        })
    }
}

/// The relation a comparison check asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }

    pub fn expectation(self) -> &'static str {
        match self {
            Comparison::Eq => "Expected to be equal",
            Comparison::Ne => "Expected to be not equal",
            Comparison::Lt => "Expected to be less than",
            Comparison::Le => "Expected to be less than or equal to",
            Comparison::Gt => "Expected to be greater than",
            Comparison::Ge => "Expected to be greater than or equal to",
        }
    }
}

/// Abort the current test with `message`.
///
/// Traps into the debugger first when the run context asks for it.
#[cold]
pub fn fail(message: String) -> ! {
    if context::debug_break_on_failure() {
        debugger::debug_break();
    }

    panic::panic_any(FailureSignal { message })
}

#[cold]
#[track_caller]
fn fail_here(condition: &str, extra: &str) -> ! {
    let location = Location::caller();
    fail(format_assertion_failure(
        condition,
        location.file(),
        location.line(),
        extra,
    ))
}

#[inline]
#[track_caller]
pub fn check(condition: bool, condition_text: &str) {
    if !condition {
        fail_here(condition_text, "Expected to be true");
    }
}

#[inline]
#[track_caller]
pub fn check_false(condition: bool, condition_text: &str) {
    if condition {
        fail_here(condition_text, "Expected to be false");
    }
}

#[track_caller]
fn check_comparison<L, R>(holds: bool, lhs: &L, rhs: &R, comparison: Comparison)
where
    L: Display + ?Sized,
    R: Display + ?Sized,
{
    if !holds {
        let condition = format_comparison_failure(lhs, rhs, comparison.symbol());
        fail_here(&condition, comparison.expectation());
    }
}

#[track_caller]
pub fn check_eq<L, R>(lhs: &L, rhs: &R)
where
    L: PartialEq<R> + Display + ?Sized,
    R: Display + ?Sized,
{
    check_comparison(lhs == rhs, lhs, rhs, Comparison::Eq);
}

#[track_caller]
pub fn check_ne<L, R>(lhs: &L, rhs: &R)
where
    L: PartialEq<R> + Display + ?Sized,
    R: Display + ?Sized,
{
    check_comparison(lhs != rhs, lhs, rhs, Comparison::Ne);
}

#[track_caller]
pub fn check_lt<L, R>(lhs: &L, rhs: &R)
where
    L: PartialOrd<R> + Display + ?Sized,
    R: Display + ?Sized,
{
    check_comparison(lhs < rhs, lhs, rhs, Comparison::Lt);
}

#[track_caller]
pub fn check_le<L, R>(lhs: &L, rhs: &R)
where
    L: PartialOrd<R> + Display + ?Sized,
    R: Display + ?Sized,
{
    check_comparison(lhs <= rhs, lhs, rhs, Comparison::Le);
}

#[track_caller]
pub fn check_gt<L, R>(lhs: &L, rhs: &R)
where
    L: PartialOrd<R> + Display + ?Sized,
    R: Display + ?Sized,
{
    check_comparison(lhs > rhs, lhs, rhs, Comparison::Gt);
}

#[track_caller]
pub fn check_ge<L, R>(lhs: &L, rhs: &R)
where
    L: PartialOrd<R> + Display + ?Sized,
    R: Display + ?Sized,
{
    check_comparison(lhs >= rhs, lhs, rhs, Comparison::Ge);
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use regex::Regex;

    use super::*;
    use crate::{check, check_eq, check_false, check_ge, check_gt, check_le, check_lt, check_ne};

    static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^src[/\\]assertion\.rs:(?P<line>\d+): ERROR: Check failed \[ (?P<condition>.+) \]\. (?P<extra>.+)$").unwrap()
    });

    fn caught<F: FnOnce() + UnwindSafe>(f: F) -> Option<String> {
        FailureSignal::catch(f).err().map(|signal| signal.message)
    }

    #[test]
    fn passing_checks_do_not_signal() {
        assert_eq!(caught(|| check!(true)), None);
        assert_eq!(caught(|| check_false!(false)), None);
        assert_eq!(caught(|| check_eq!(2, 2)), None);
        assert_eq!(caught(|| check_ne!(2, 3)), None);
        assert_eq!(caught(|| check_lt!(1, 2)), None);
        assert_eq!(caught(|| check_le!(2, 2)), None);
        assert_eq!(caught(|| check_gt!(3, 2)), None);
        assert_eq!(caught(|| check_ge!(6, 5)), None);
        assert_eq!(caught(|| check_ge!(5, 5)), None);
    }

    #[test]
    fn check_reports_condition_text_and_line() {
        let line = line!() + 1;
        let message = caught(|| check!(1 + 1 == 3)).expect("check must fail");

        let caps = MESSAGE_RE.captures(&message).expect("message layout");
        assert_eq!(&caps["line"], line.to_string());
        assert_eq!(&caps["condition"], "1 + 1 == 3");
        assert_eq!(&caps["extra"], "Expected to be true");
    }

    #[test]
    fn check_false_reports_expectation() {
        let message = caught(|| check_false!(true)).expect("check must fail");
        let caps = MESSAGE_RE.captures(&message).expect("message layout");
        assert_eq!(&caps["condition"], "true");
        assert_eq!(&caps["extra"], "Expected to be false");
    }

    #[test]
    fn comparisons_render_operand_values() {
        let a = 2;
        let b = 3;
        let message = caught(|| check_eq!(a, b)).expect("check must fail");
        assert!(message.contains("[ 2 == 3 ]"), "{message}");
        assert!(message.ends_with("Expected to be equal"));

        let message = caught(|| check_ge!(5, 6)).expect("check must fail");
        let caps = MESSAGE_RE.captures(&message).expect("message layout");
        assert_eq!(&caps["condition"], "5 >= 6");
        assert_eq!(&caps["extra"], "Expected to be greater than or equal to");
    }

    #[test]
    fn every_comparison_fails_on_the_wrong_side() {
        let cases: [(fn(), &str); 6] = [
            (|| check_eq!(1, 2), "1 == 2"),
            (|| check_ne!(1, 1), "1 != 1"),
            (|| check_lt!(2, 2), "2 < 2"),
            (|| check_le!(3, 2), "3 <= 2"),
            (|| check_gt!(2, 2), "2 > 2"),
            (|| check_ge!(1, 2), "1 >= 2"),
        ];

        for (check, condition) in cases {
            let message = caught(check).expect("check must fail");
            let caps = MESSAGE_RE.captures(&message).expect("message layout");
            assert_eq!(&caps["condition"], condition);
        }
    }

    #[test]
    fn mixed_operand_types_compare() {
        let greeting = String::from("hello world");
        assert_eq!(caught(|| check_eq!(greeting, "hello world")), None);
        let message = caught(|| check_ne!(greeting, "hello world")).expect("check must fail");
        assert!(message.contains("[ hello world != hello world ]"));
    }

    #[test]
    fn nan_follows_partial_order() {
        let message = caught(|| check_ge!(f64::NAN, f64::NAN)).expect("NaN is unordered");
        assert!(message.contains("[ NaN >= NaN ]"));
    }

    #[test]
    fn catch_lets_other_panics_through() {
        let result = panic::catch_unwind(|| {
            FailureSignal::catch(|| {
                if true {
                    panic!("unrelated")
                }
            })
        });
        assert!(result.is_err());
    }
}
