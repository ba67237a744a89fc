//! Stable DTOs and IDs used across the importguard workspace.
//!
//! This crate is intentionally boring:
//! - occurrence and comparison-result records
//! - data types for the emitted report
//! - stable string IDs and codes
//! - source path handling (files and standard input)
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod records;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::{SourcePath, STDIN_SENTINEL};
pub use receipt::{
    Finding, ImportguardData, ImportguardReport, ReportEnvelope, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
pub use records::{
    DeclaredDependency, Location, ParsedImport, UndeclaredDependency, UnusedDependency,
};
