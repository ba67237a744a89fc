use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used in place of a path for standard input and synthetic sources.
pub const STDIN_SENTINEL: &str = "<stdin>";

/// Where an occurrence was observed: a file, or standard input.
///
/// Serialized as a plain string; [`STDIN_SENTINEL`] round-trips to [`SourcePath::Stdin`].
/// File paths are kept exactly as the collector reported them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourcePath {
    Stdin,
    File(String),
}

impl SourcePath {
    pub fn new<S: Into<String>>(s: S) -> Self {
        let s = s.into();
        if s == STDIN_SENTINEL {
            SourcePath::Stdin
        } else {
            SourcePath::File(s)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourcePath::Stdin => STDIN_SENTINEL,
            SourcePath::File(p) => p,
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, SourcePath::Stdin)
    }
}

impl From<String> for SourcePath {
    fn from(value: String) -> Self {
        SourcePath::new(value)
    }
}

impl From<SourcePath> for String {
    fn from(value: SourcePath) -> Self {
        match value {
            SourcePath::Stdin => STDIN_SENTINEL.to_string(),
            SourcePath::File(p) => p,
        }
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
