//! Test selection for schooltest.
//!
//! A selector decides which registered tests a run executes, and in which
//! order. The order it returns is the order the harness runs the tests in,
//! without any reordering.
//!
//! [`RegisteredOrder`] selects everything in registration order.
//! [`ExternalSelection`] reads an ordered list of names from a
//! [`SelectionSource`]. Problems while building a selection never abort a run:
//! unknown names are dropped and listed in [`Selection::not_found`], and a
//! source that cannot be read yields what could be read so far plus a
//! [`SelectionError`].
//!
//! Implement [`TestSelector`] to define a selection strategy.

use std::{io, sync::Arc};

use thiserror::Error;

use crate::{registry::TestRegistry, test::TestEntry};

mod registered;
pub use registered::*;

mod external;
pub use external::*;

/// The result of applying a [`TestSelector`].
#[derive(Debug, Default)]
pub struct Selection {
    /// The tests to run, in run order.
    pub tests: Vec<Arc<TestEntry>>,

    /// Requested names that did not resolve in the registry, in request order.
    pub not_found: Vec<String>,

    /// Set when the selection source could not be opened or fully read.
    pub source_error: Option<SelectionError>,
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("could not open selection source {source_id:?}")]
    Open {
        source_id: String,
        #[source]
        error: io::Error,
    },

    #[error("failed to read selection source {source_id:?} after {lines} lines")]
    Read {
        source_id: String,
        lines: usize,
        #[source]
        error: io::Error,
    },
}

/// A strategy for choosing the tests of a run.
pub trait TestSelector {
    /// Select tests from `registry`.
    ///
    /// Selected entries are shared with the registry, so the registry does not
    /// need to stay borrowed (or locked) while the tests run.
    fn select(&self, registry: &TestRegistry) -> Selection;
}
