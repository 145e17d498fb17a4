//! The status channel of a run.
//!
//! While a run progresses the harness reports human readable status events to
//! a [`StatusFormatter`]: which tests were added to the selection, which
//! requested names could not be found, when each test starts and how it ended.
//!
//! Formatters are a side channel. A formatter error is recorded in
//! [`RunReport::fmt_errors`](crate::RunReport::fmt_errors) together with the
//! [`FormatError`] naming the hook that failed, and the run carries on.
//!
//! Every hook has a default implementation that does nothing, so a formatter
//! only implements what it is interested in.

use std::time::Duration;

use crate::{outcome::TestOutcome, report::TestOutcomes, selection::SelectionError};

pub mod channel;
pub mod color;
pub mod no;
pub mod plain;

/// Which formatter hook returned an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    SourceError,
    TestAdded,
    TestNotFound,
    RunStart,
    TestStart,
    TestOutcome,
    RunOutcomes,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtSourceError<'r> {
    pub error: &'r SelectionError,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtTestAdded<'r> {
    pub name: &'r str,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtTestNotFound<'r> {
    pub name: &'r str,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtRunStart {
    pub tests: usize,
    pub debug_break_on_failure: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtTestStart<'r> {
    pub name: &'r str,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtTestOutcome<'r> {
    pub name: &'r str,
    pub outcome: &'r TestOutcome,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtRunOutcomes<'r> {
    pub outcomes: &'r TestOutcomes,
    pub not_found: &'r [String],
    pub duration: Duration,
}

/// Receives the status events of a run.
///
/// Hooks are called in this order: [`fmt_source_error`] (at most once),
/// [`fmt_test_added`] per selected test, [`fmt_test_not_found`] per unresolved
/// name, [`fmt_run_start`], then [`fmt_test_start`] and [`fmt_test_outcome`]
/// per test, and finally [`fmt_run_outcomes`].
///
/// [`fmt_source_error`]: StatusFormatter::fmt_source_error
/// [`fmt_test_added`]: StatusFormatter::fmt_test_added
/// [`fmt_test_not_found`]: StatusFormatter::fmt_test_not_found
/// [`fmt_run_start`]: StatusFormatter::fmt_run_start
/// [`fmt_test_start`]: StatusFormatter::fmt_test_start
/// [`fmt_test_outcome`]: StatusFormatter::fmt_test_outcome
/// [`fmt_run_outcomes`]: StatusFormatter::fmt_run_outcomes
pub trait StatusFormatter {
    type Error;

    fn fmt_source_error(&mut self, data: FmtSourceError<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_added(&mut self, data: FmtTestAdded<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_not_found(&mut self, data: FmtTestNotFound<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_run_start(&mut self, data: FmtRunStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_start(&mut self, data: FmtTestStart<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}

pub(crate) trait FmtErrors<E> {
    fn push_on_error(&mut self, result: Result<(), (FormatError, E)>);
}

impl<E> FmtErrors<E> for Vec<(FormatError, E)> {
    fn push_on_error(&mut self, result: Result<(), (FormatError, E)>) {
        if let Err(err) = result {
            self.push(err);
        }
    }
}

/// Tag a formatter call's error with the hook that produced it.
macro_rules! named_fmt {
    ($kind:ident: $call:expr) => {
        ($call).map_err(|err| ($crate::formatter::FormatError::$kind, err))
    };
}

pub(crate) use named_fmt;
