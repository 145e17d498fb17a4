//! Run scoped state.
//!
//! The engine publishes a [`RunContext`] for the duration of a run: whether
//! failing checks should trap into an attached debugger, and which test is
//! executing right now. Runs execute entirely on the calling thread, so the
//! context is stored per thread.
//!
//! [`RunContextGuard`] snapshots the previous context when a run starts and
//! puts it back when the guard drops, on every exit path. A test body that
//! starts a nested run therefore gets its own context and finds its caller's
//! context intact afterwards.

use std::{cell::RefCell, sync::Arc};

use crate::test::TestEntry;

thread_local! {
    static RUN_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct RunContext {
    pub debug_break_on_failure: bool,
    pub current_test: Option<Arc<TestEntry>>,
}

impl RunContext {
    pub const fn new() -> Self {
        Self {
            debug_break_on_failure: false,
            current_test: None,
        }
    }
}

/// A snapshot of the context of the current thread.
pub fn current() -> RunContext {
    RUN_CONTEXT.with_borrow(Clone::clone)
}

pub fn debug_break_on_failure() -> bool {
    RUN_CONTEXT
        .try_with(|context| context.borrow().debug_break_on_failure)
        .unwrap_or(false)
}

pub fn current_test() -> Option<Arc<TestEntry>> {
    RUN_CONTEXT.with_borrow(|context| context.current_test.clone())
}

#[derive(Debug)]
#[must_use = "the previous context is restored when the guard drops"]
pub struct RunContextGuard {
    previous: Option<RunContext>,
}

impl RunContextGuard {
    /// Start a fresh context and remember the one it replaces.
    pub fn enter(debug_break_on_failure: bool) -> Self {
        let previous = RUN_CONTEXT.replace(RunContext {
            debug_break_on_failure,
            current_test: None,
        });
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for RunContextGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            let _ = RUN_CONTEXT.try_with(|context| *context.borrow_mut() = previous);
        }
    }
}

/// Marks a test as the one currently executing until dropped.
#[derive(Debug)]
#[must_use = "the current test is cleared when the guard drops"]
pub(crate) struct CurrentTestGuard(());

impl CurrentTestGuard {
    pub(crate) fn set(entry: Arc<TestEntry>) -> Self {
        RUN_CONTEXT.with_borrow_mut(|context| context.current_test = Some(entry));
        Self(())
    }
}

impl Drop for CurrentTestGuard {
    fn drop(&mut self) {
        let _ = RUN_CONTEXT.try_with(|context| context.borrow_mut().current_test = None);
    }
}
