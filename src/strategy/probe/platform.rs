use crate::{debugger, probe::DebuggerProbe};

/// The default [`DebuggerProbe`], backed by [`debugger::is_debugger_attached`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformProbe;

impl DebuggerProbe for PlatformProbe {
    fn is_debugger_attached(&self) -> bool {
        debugger::is_debugger_attached()
    }
}
