//! Run configuration.

use std::{env, ffi::OsString};

use crate::{
    registry::TestRegistry,
    selection::{ExternalSelection, RegisteredOrder, Selection, TestSelector},
};

/// Environment variable naming a selection file for [`RunConfig::from_env`].
pub const SELECTION_FILE_ENV: &str = "SCHOOLTEST_SELECTION_FILE";

/// How [`run_tests`](crate::run_tests) picks its tests.
///
/// With `use_external_selection` unset every registered test runs in
/// registration order. Otherwise `selection_source` names a file listing
/// the tests to run, one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub use_external_selection: bool,
    pub selection_source: String,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection_file(self, path: impl Into<String>) -> Self {
        Self {
            use_external_selection: true,
            selection_source: path.into(),
        }
    }

    /// Read the configuration from [`SELECTION_FILE_ENV`].
    ///
    /// A set, non-empty value enables external selection from that file.
    pub fn from_env() -> Self {
        Self::from_selection_var(env::var_os(SELECTION_FILE_ENV))
    }

    fn from_selection_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => {
                Self::default().with_selection_file(path.to_string_lossy())
            }
            _ => Self::default(),
        }
    }
}

impl TestSelector for RunConfig {
    fn select(&self, registry: &TestRegistry) -> Selection {
        match self.use_external_selection {
            true => ExternalSelection::from_file(&self.selection_source).select(registry),
            false => RegisteredOrder.select(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{selection::SelectionError, test_support::*};

    #[test]
    fn default_runs_everything() {
        let journal = Journal::default();
        let registry = registry![
            "one" => journal.record("one"),
            "two" => journal.record("two"),
        ];

        harness(&registry).with_selector(RunConfig::new()).run();
        assert_eq!(journal.entries(), ["one", "two"]);
    }

    #[test]
    fn selection_file_is_used() {
        let registry = registry!["one" => || ()];
        let config = RunConfig::new().with_selection_file("missing/selection/file.txt");
        assert!(config.use_external_selection);

        let report = harness(&registry).with_selector(config).run();
        assert!(report.outcomes.is_empty());
        assert!(matches!(report.source_error, Some(SelectionError::Open { .. })));
    }

    #[test]
    fn env_value_parsing() {
        assert_eq!(RunConfig::from_selection_var(None), RunConfig::default());
        assert_eq!(
            RunConfig::from_selection_var(Some(OsString::new())),
            RunConfig::default()
        );
        assert_eq!(
            RunConfig::from_selection_var(Some(OsString::from("tests.txt"))),
            RunConfig {
                use_external_selection: true,
                selection_source: String::from("tests.txt"),
            }
        );
    }
}
