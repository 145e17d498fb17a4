use std::io;

pub use test::TestHarness;

use crate::{
    config::RunConfig, formatter::plain::PlainFormatter, probe::PlatformProbe, registry,
    registry::TestRegistry, report::RunReport, selection::RegisteredOrder,
};

/// Build a harness over `registry` with the default strategies: every test in
/// registration order, platform debugger detection and plain status output
/// on stdout.
pub fn harness(
    registry: &TestRegistry,
) -> TestHarness<'_, RegisteredOrder, PlatformProbe, PlainFormatter<io::Stdout>> {
    TestHarness {
        registry,
        selector: RegisteredOrder,
        probe: PlatformProbe,
        formatter: PlainFormatter::default(),
    }
}

/// Run the tests of the global registry as configured.
///
/// The global registry is only locked while the run takes a snapshot of it,
/// so test bodies may register tests or start nested runs.
pub fn run_tests(config: &RunConfig) -> RunReport<io::Error> {
    let registry = registry::global().clone();
    harness(&registry).with_selector(config.clone()).run()
}
