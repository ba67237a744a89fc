//! Use case orchestration for importguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod input;
mod render;
mod report;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use input::{parse_dependencies_json, parse_imports_json};
pub use render::{render_annotations, render_markdown, render_summary};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
