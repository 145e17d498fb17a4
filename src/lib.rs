//! A small unit test engine.
//!
//! Tests register themselves, either statically through [`test_case!`] or
//! explicitly through [`register`]. [`run_tests`] selects what to run (every
//! test in registration order, or an ordered list of names read from a file),
//! runs each test behind an unwind boundary and returns a [`RunReport`].
//!
//! Inside a test the [`check!`] family of macros verifies conditions. A failing
//! check ends its test with a diagnostic like
//!
//! ```text
//! tests/math.rs:12: ERROR: Check failed [ 5 >= 6 ]. Expected to be greater than or equal to
//! ```
//!
//! When a debugger is attached, a failing check traps into it before
//! unwinding, so the failing frame can be inspected.
//!
//! For more control, [`harness`] builds a [`TestHarness`] over any
//! [`TestRegistry`](registry::TestRegistry) with pluggable selection, debugger
//! probing and status output.

pub mod assertion;
pub mod config;
pub mod context;
pub mod debugger;
pub mod diagnostic;
pub mod formatter;
pub mod outcome;
pub mod registry;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

mod macros;
mod panic_hook;

pub use config::RunConfig;
pub use registry::register;

#[doc(hidden)]
pub mod __private {
    pub use linkme;
}

#[cfg(test)]
mod test_support;
