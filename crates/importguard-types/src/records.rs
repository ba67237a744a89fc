//! Occurrence and comparison-result records.
//!
//! Collectors produce [`ParsedImport`] and [`DeclaredDependency`] values; the comparison engine
//! groups them into [`UndeclaredDependency`] and [`UnusedDependency`] records.

use crate::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an occurrence was observed. Provenance only: never used for matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    #[schemars(with = "String")]
    pub path: SourcePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Location {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: SourcePath::new(path),
            line: None,
        }
    }

    pub fn stdin() -> Self {
        Self {
            path: SourcePath::Stdin,
            line: None,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => write!(f, "{}", self.path),
        }
    }
}

/// One observed import of a top-level module.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ParsedImport {
    pub name: String,
    pub location: Location,
}

impl ParsedImport {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// One declaration of a dependency in a manifest.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DeclaredDependency {
    pub name: String,
    pub location: Location,
}

impl DeclaredDependency {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// An import name with no matching declaration, plus every occurrence of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UndeclaredDependency {
    pub name: String,
    pub references: Vec<ParsedImport>,
}

/// A declared name that no import reaches, plus every declaration of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnusedDependency {
    pub name: String,
    pub references: Vec<DeclaredDependency>,
}
