//! Debugger probing for schooltest.
//!
//! At the start of every run the harness asks a probe whether an interactive
//! debugger is attached. The answer is published in the run context and makes
//! failing checks trap into the debugger before they unwind, so the failing
//! frame can still be inspected.
//!
//! [`PlatformProbe`] asks the operating system. A plain `bool` or any
//! `Fn() -> bool` works as a probe too, which is handy to force the behavior
//! in either direction. Forcing `true` without a debugger attached will
//! usually kill the process on the first failing check.

mod platform;
pub use platform::*;

/// A strategy for deciding whether failing checks should trap into a debugger.
pub trait DebuggerProbe {
    fn is_debugger_attached(&self) -> bool;
}

impl DebuggerProbe for bool {
    fn is_debugger_attached(&self) -> bool {
        *self
    }
}

impl<F> DebuggerProbe for F
where
    F: Fn() -> bool,
{
    fn is_debugger_attached(&self) -> bool {
        self()
    }
}
