use std::{
    io::{self, Write},
    string::FromUtf8Error,
    sync::{Arc, LazyLock, Mutex},
};

use regex::Regex;

use crate::{
    TestHarness, formatter::color::SupportsColor, formatter::no::NoFormatter,
    registry::TestRegistry, selection::RegisteredOrder,
};

/// Build a [`TestRegistry`] from `name => body` pairs.
macro_rules! registry {
    [$($name:expr => $body:expr),* $(,)?] => {{
        #[allow(unused_mut)]
        let mut registry = $crate::registry::TestRegistry::new();
        $(registry.register($name, $body);)*
        registry
    }};
}

pub(crate) use registry;

/// A harness that stays quiet and never traps into a debugger.
pub fn harness(registry: &TestRegistry) -> TestHarness<'_, RegisteredOrder, bool, NoFormatter> {
    TestHarness {
        registry,
        selector: RegisteredOrder,
        probe: false,
        formatter: NoFormatter,
    }
}

/// Shared record of what test bodies did, in order.
#[derive(Debug, Default, Clone)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    /// A test body that records `entry` when called.
    pub fn record(&self, entry: &'static str) -> impl Fn() + Send + Sync + 'static {
        let journal = self.clone();
        move || journal.push(entry)
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.0.lock().map_err(|_| Error::Poison)?;
        String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)
    }
}

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Example matches:
    //   src\formatter\plain.rs:231
    //   src/formatter/plain.rs:231
    Regex::new(r"src[/\\][^\s:]+\.rs:\d+").unwrap()
});

/// Replace source locations in check messages with `<location>`.
pub fn sanitize_locations(input: &str) -> String {
    LOCATION_RE.replace_all(input, "<location>").to_string()
}
