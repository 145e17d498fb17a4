use std::{error::Error, io};

use crate::{
    formatter::{
        color::{ColorSetting, Painted, StatusLabel, SupportsColor},
        *,
    },
    outcome::{TestFailure, TestStatus},
};

/// Line oriented status output, written to stdout by default.
#[derive(Debug)]
pub struct PlainFormatter<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
}

impl Default for PlainFormatter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: Default::default(),
        }
    }
}

impl<W: io::Write> PlainFormatter<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PlainFormatter<WithTarget> {
        PlainFormatter {
            target: with_target,
            color_setting: self.color_setting,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PlainFormatter {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: io::Write + SupportsColor> PlainFormatter<W> {
    /// Return whether this formatter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        self.color_setting.resolve(&self.target)
    }

    fn paint(&self, label: StatusLabel) -> Painted {
        label.paint(self.use_color())
    }
}

impl<W: io::Write + SupportsColor> StatusFormatter for PlainFormatter<W> {
    type Error = io::Error;

    fn fmt_source_error(&mut self, data: FmtSourceError<'_>) -> io::Result<()> {
        match data.error.source() {
            Some(source) => writeln!(self.target, "{}: {source}", data.error),
            None => writeln!(self.target, "{}", data.error),
        }
    }

    fn fmt_test_added(&mut self, data: FmtTestAdded<'_>) -> io::Result<()> {
        writeln!(self.target, "added test {}", data.name)
    }

    fn fmt_test_not_found(&mut self, data: FmtTestNotFound<'_>) -> io::Result<()> {
        let label = self.paint(StatusLabel::NotFound);
        writeln!(self.target, "{label} {}", data.name)
    }

    fn fmt_run_start(&mut self, data: FmtRunStart) -> io::Result<()> {
        match data.tests {
            1 => writeln!(self.target, "\nrunning 1 test")?,
            count => writeln!(self.target, "\nrunning {count} tests")?,
        }
        if data.debug_break_on_failure {
            writeln!(self.target, "debugger attached, failing checks will break")?;
        }
        Ok(())
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'_>) -> io::Result<()> {
        match &data.outcome.status {
            TestStatus::Passed => {
                let ok = self.paint(StatusLabel::Ok);
                writeln!(self.target, "test {} ... {ok}", data.name)
            }
            TestStatus::Failed(failure) => {
                let failed = self.paint(StatusLabel::Failed);
                writeln!(self.target, "test {} ... {failed}", data.name)?;
                match failure {
                    TestFailure::Assertion { message } => writeln!(self.target, "    {message}"),
                    TestFailure::Fault { message: Some(message) } => writeln!(
                        self.target,
                        "    caught exception from test {}: {message}",
                        data.name
                    ),
                    TestFailure::Fault { message: None } => writeln!(
                        self.target,
                        "    caught exception from test {}",
                        data.name
                    ),
                }
            }
        }
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_>) -> io::Result<()> {
        let passed = data
            .outcomes
            .iter()
            .filter(|(_, outcome)| outcome.passed())
            .count();
        let failed = data.outcomes.len() - passed;
        let result = match failed {
            0 => self.paint(StatusLabel::Ok),
            _ => self.paint(StatusLabel::Failed),
        };

        write!(
            self.target,
            "\ntest result: {result}. {passed} passed; {failed} failed; "
        )?;
        if !data.not_found.is_empty() {
            write!(self.target, "{} not found; ", data.not_found.len())?;
        }
        writeln!(
            self.target,
            "finished in {:.2}s\n",
            data.duration.as_secs_f64()
        )
    }
}
