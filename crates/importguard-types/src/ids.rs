//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_DEPS_UNDECLARED: &str = "deps.undeclared";
pub const CHECK_DEPS_UNUSED: &str = "deps.unused";

// Codes: deps.undeclared
pub const CODE_UNDECLARED_IMPORT: &str = "undeclared_import";

// Codes: deps.unused
pub const CODE_UNUSED_DEPENDENCY: &str = "unused_dependency";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
