use std::{
    panic::{self, PanicHookInfo},
    sync::Arc,
    thread,
};

use crate::assertion::FailureSignal;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Keeps failing checks from printing panic messages while installed.
///
/// Panics carrying a [`FailureSignal`] are already reported through the run
/// report and the status formatter. Every other panic is forwarded to the hook
/// that was installed before.
///
/// The panic hook is process global while runs are per thread. While a guard
/// is installed, `FailureSignal` panics on every thread are silenced, not only
/// those of the run that installed it. Guards must drop in reverse install
/// order: if runs on two threads overlap and finish out of order, the
/// silencing hook stays installed for the rest of the process.
pub(crate) struct SignalPanicHookGuard(Option<Arc<PanicHook>>);

impl SignalPanicHookGuard {
    pub(crate) fn install() -> Self {
        let previous: Arc<PanicHook> = Arc::new(panic::take_hook());
        let forward = Arc::clone(&previous);

        panic::set_hook(Box::new(move |panic_hook_info| {
            if panic_hook_info.payload().is::<FailureSignal>() {
                return;
            }
            forward(panic_hook_info)
        }));

        Self(Some(previous))
    }
}

impl Drop for SignalPanicHookGuard {
    fn drop(&mut self) {
        // set_hook panics while panicking, keep ours in that case
        if thread::panicking() {
            return;
        }

        if let Some(previous) = self.0.take() {
            drop(panic::take_hook());
            match Arc::try_unwrap(previous) {
                Ok(previous) => panic::set_hook(previous),
                Err(previous) => panic::set_hook(Box::new(move |info| previous(info))),
            }
        }
    }
}
