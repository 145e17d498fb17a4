use std::{any::Any, thread, time::Duration};

use crate::{assertion::FailureSignal, test::TestResult};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Failed(TestFailure),
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    pub fn failure(&self) -> Option<&TestFailure> {
        match self {
            TestStatus::Passed => None,
            TestStatus::Failed(failure) => Some(failure),
        }
    }

    /// Classify what came out of the unwind boundary around a test body.
    pub fn from_unwind(result: thread::Result<TestResult>) -> Self {
        match result {
            Ok(TestResult(Ok(()))) => TestStatus::Passed,
            Ok(TestResult(Err(err))) => TestStatus::Failed(TestFailure::Fault {
                message: Some(err),
            }),
            Err(payload) => TestStatus::Failed(match payload.downcast::<FailureSignal>() {
                Ok(signal) => TestFailure::Assertion {
                    message: signal.message,
                },
                Err(payload) => TestFailure::Fault {
                    message: payload_as_string(payload),
                },
            }),
        }
    }
}

/// How a test failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// A check failed and raised a [`FailureSignal`].
    Assertion { message: String },

    /// Anything else: a panic that was not raised by a check, or an `Err`
    /// returned from the test body.
    Fault { message: Option<String> },
}

impl TestFailure {
    pub fn is_assertion(&self) -> bool {
        matches!(self, TestFailure::Assertion { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TestFailure::Assertion { message } => Some(message),
            TestFailure::Fault { message } => message.as_deref(),
        }
    }
}

/// Read a panic payload produced by `panic!` (`&'static str` or `String`).
fn payload_as_string(payload: Box<dyn Any + Send + 'static>) -> Option<String> {
    payload
        .downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|payload| payload.downcast::<String>().map(|s| *s))
        .ok()
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;

    #[test]
    fn classifies_unwind_results() {
        let passed = TestStatus::from_unwind(Ok(().into()));
        assert!(passed.passed());

        let errored = TestStatus::from_unwind(Ok(Err::<(), _>("io").into()));
        assert_eq!(
            errored.failure(),
            Some(&TestFailure::Fault {
                message: Some(String::from("\"io\""))
            })
        );

        let signal = panic::catch_unwind(|| -> TestResult {
            panic::panic_any(FailureSignal::new("check failed"))
        });
        let asserted = TestStatus::from_unwind(signal);
        assert_eq!(
            asserted.failure(),
            Some(&TestFailure::Assertion {
                message: String::from("check failed")
            })
        );
    }

    #[test]
    fn fault_message_from_payload() {
        let formatted = panic::catch_unwind(|| -> TestResult { panic!("index {} out of range", 3) });
        let status = TestStatus::from_unwind(formatted);
        assert_eq!(
            status.failure().and_then(TestFailure::message),
            Some("index 3 out of range")
        );
        assert!(!status.failure().is_some_and(TestFailure::is_assertion));

        let opaque = panic::catch_unwind(|| -> TestResult { panic::panic_any(42_u8) });
        let status = TestStatus::from_unwind(opaque);
        assert_eq!(status, TestStatus::Failed(TestFailure::Fault { message: None }));
    }
}
