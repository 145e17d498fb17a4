use std::{borrow::Cow, process::ExitCode, time::Duration};

use crate::{formatter::FormatError, outcome::TestOutcome, selection::SelectionError};

pub type TestOutcomes = Vec<(Cow<'static, str>, TestOutcome)>;

/// Everything a run produced.
///
/// `outcomes` holds one entry per attempted test, in run order.
#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport<FmtError> {
    pub outcomes: TestOutcomes,
    pub not_found: Vec<String>,
    pub source_error: Option<SelectionError>,
    pub duration: Duration,
    pub fmt_errors: Vec<(FormatError, FmtError)>,
}

impl<FmtError> RunReport<FmtError> {
    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.passed())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.failed())
            .count()
    }

    pub fn outcome(&self, name: &str) -> Option<&TestOutcome> {
        self.outcomes
            .iter()
            .find_map(|(test, outcome)| (test == name).then_some(outcome))
    }

    /// Names of the attempted tests, in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().map(|(name, _)| name.as_ref())
    }

    /// A run succeeds when every attempted test passed.
    ///
    /// Unresolved selection names are diagnostics and do not fail the run.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.is_success() {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }
}
