use crate::formatter::StatusFormatter;

/// A formatter that produces no output.
///
/// Useful when the [`RunReport`](crate::RunReport) is all we need, for
/// example when the engine is driven from another test system.
#[derive(Debug, Default, Clone)]
pub struct NoFormatter;

impl StatusFormatter for NoFormatter {
    type Error = ();
}
