use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    sync::Arc,
};

use tracing::{debug, warn};

use crate::{
    registry::TestRegistry,
    selection::{Selection, SelectionError, TestSelector},
};

/// Where an [`ExternalSelection`] reads its test names from.
pub trait SelectionSource {
    /// A human readable name for diagnostics, like a file path.
    fn identifier(&self) -> Cow<'_, str>;

    fn open(&self) -> io::Result<impl BufRead + '_>;
}

/// A selection file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource(pub PathBuf);

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl SelectionSource for FileSource {
    fn identifier(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    fn open(&self) -> io::Result<impl BufRead + '_> {
        File::open(&self.0).map(BufReader::new)
    }
}

/// Selection text held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource(pub Cow<'static, str>);

impl TextSource {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }
}

impl SelectionSource for TextSource {
    fn identifier(&self) -> Cow<'_, str> {
        Cow::Borrowed("<text>")
    }

    fn open(&self) -> io::Result<impl BufRead + '_> {
        Ok(self.0.as_bytes())
    }
}

/// Select tests by name from a [`SelectionSource`].
///
/// The source holds one test name per line. Each line is trimmed, so
/// indentation and `\r\n` line endings are fine, and blank lines are skipped.
/// A UTF-8 byte order mark in front of the first line is ignored.
/// Names run in the order they are listed; a name listed twice runs twice.
///
/// A line that is not valid UTF-8 cannot name a test. It is recorded, lossily
/// decoded, in [`Selection::not_found`] and reading continues with the next
/// line. Only an I/O error ends the selection early.
#[derive(Debug, Clone)]
pub struct ExternalSelection<S> {
    source: S,
}

impl<S: SelectionSource> ExternalSelection<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl ExternalSelection<FileSource> {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }
}

impl ExternalSelection<TextSource> {
    pub fn from_text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(TextSource::new(text))
    }
}

impl<S: SelectionSource> TestSelector for ExternalSelection<S> {
    fn select(&self, registry: &TestRegistry) -> Selection {
        let source_id = || self.source.identifier().into_owned();
        let mut reader = match self.source.open() {
            Ok(reader) => reader,
            Err(error) => {
                warn!(source = %source_id(), %error, "could not open selection source");
                return Selection {
                    source_error: Some(SelectionError::Open {
                        source_id: source_id(),
                        error,
                    }),
                    ..Selection::default()
                };
            }
        };

        let mut selection = Selection::default();
        let mut buf = Vec::new();
        for lines in 0.. {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => (),
                Err(error) => {
                    selection.source_error = Some(SelectionError::Read {
                        source_id: source_id(),
                        lines,
                        error,
                    });
                    break;
                }
            }

            let line = match str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) => {
                    let name = String::from_utf8_lossy(&buf).trim().to_string();
                    warn!(test = %name, line = lines + 1, "selection line is not valid UTF-8");
                    selection.not_found.push(name);
                    continue;
                }
            };

            let line = match lines {
                0 => line.strip_prefix('\u{feff}').unwrap_or(line),
                _ => line,
            };
            let name = line.trim();
            if name.is_empty() {
                continue;
            }

            match registry.lookup(name) {
                Some(entry) => selection.tests.push(Arc::clone(entry)),
                None => {
                    warn!(test = name, "selected test is not registered");
                    selection.not_found.push(name.to_string());
                }
            }
        }

        debug!(
            source = %source_id(),
            selected = selection.tests.len(),
            not_found = selection.not_found.len(),
            "resolved external selection"
        );
        selection
    }
}
