use crossbeam_channel::{SendError, Sender};

use crate::{formatter::*, outcome::TestStatus};

/// An owned copy of a status event, as sent by [`ChannelFormatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatusEvent {
    SourceError { message: String },
    TestAdded { name: String },
    TestNotFound { name: String },
    RunStart { tests: usize, debug_break_on_failure: bool },
    TestStart { name: String },
    TestOutcome { name: String, status: TestStatus },
    RunOutcomes { passed: usize, failed: usize, not_found: usize },
}

/// Forward every status event over a channel.
///
/// This hands the status stream to another thread, for example one that
/// renders it for a UI. A disconnected receiver shows up as format errors in
/// the report.
#[derive(Debug, Clone)]
pub struct ChannelFormatter {
    sender: Sender<StatusEvent>,
}

impl ChannelFormatter {
    pub fn new(sender: Sender<StatusEvent>) -> Self {
        Self { sender }
    }
}

impl From<Sender<StatusEvent>> for ChannelFormatter {
    fn from(sender: Sender<StatusEvent>) -> Self {
        Self::new(sender)
    }
}

impl StatusFormatter for ChannelFormatter {
    type Error = SendError<StatusEvent>;

    fn fmt_source_error(&mut self, data: FmtSourceError<'_>) -> Result<(), Self::Error> {
        self.sender.send(StatusEvent::SourceError {
            message: data.error.to_string(),
        })
    }

    fn fmt_test_added(&mut self, data: FmtTestAdded<'_>) -> Result<(), Self::Error> {
        self.sender.send(StatusEvent::TestAdded {
            name: data.name.to_string(),
        })
    }

    fn fmt_test_not_found(&mut self, data: FmtTestNotFound<'_>) -> Result<(), Self::Error> {
        self.sender.send(StatusEvent::TestNotFound {
            name: data.name.to_string(),
        })
    }

    fn fmt_run_start(&mut self, data: FmtRunStart) -> Result<(), Self::Error> {
        self.sender.send(StatusEvent::RunStart {
            tests: data.tests,
            debug_break_on_failure: data.debug_break_on_failure,
        })
    }

    fn fmt_test_start(&mut self, data: FmtTestStart<'_>) -> Result<(), Self::Error> {
        self.sender.send(StatusEvent::TestStart {
            name: data.name.to_string(),
        })
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'_>) -> Result<(), Self::Error> {
        self.sender.send(StatusEvent::TestOutcome {
            name: data.name.to_string(),
            status: data.outcome.status.clone(),
        })
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_>) -> Result<(), Self::Error> {
        let passed = data
            .outcomes
            .iter()
            .filter(|(_, outcome)| outcome.passed())
            .count();
        self.sender.send(StatusEvent::RunOutcomes {
            passed,
            failed: data.outcomes.len() - passed,
            not_found: data.not_found.len(),
        })
    }
}
