//! Pure comparison and policy evaluation (no IO).
//!
//! Input: imports and declared dependencies gathered elsewhere.
//! Output: undeclared/unused records, findings, verdict, and summary data.

#![forbid(unsafe_code)]

pub mod compare;
pub mod model;
pub mod policy;
pub mod report;
pub mod resolver;

mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use compare::{Comparison, compare_imports_to_dependencies};
pub use engine::evaluate;
pub use resolver::{NameResolver, normalize_name};
