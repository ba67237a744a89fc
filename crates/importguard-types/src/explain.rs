//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Project state that would trigger a finding.
    pub before: &'static str,
    /// Project state that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_DEPS_UNDECLARED => Some(explain_undeclared()),
        ids::CHECK_DEPS_UNUSED => Some(explain_unused()),

        // Codes
        ids::CODE_UNDECLARED_IMPORT => Some(explain_undeclared_import()),
        ids::CODE_UNUSED_DEPENDENCY => Some(explain_unused_dependency()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_DEPS_UNDECLARED, ids::CHECK_DEPS_UNUSED]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_UNDECLARED_IMPORT, ids::CODE_UNUSED_DEPENDENCY]
}

fn explain_undeclared() -> Explanation {
    Explanation {
        title: "Undeclared Dependencies",
        description: "\
Detects third-party modules that are imported in source code but not declared
in any dependency manifest (requirements.txt, pyproject.toml, setup.cfg, ...).

An undeclared import works on the developer machine only because the package
happens to be installed there. A fresh environment built from the manifests
will fail at import time.

Import names are matched against declared names after normalization: names are
compared case-insensitively and `-`, `_` and `.` are treated as the same
separator. Modules whose import name differs from their distribution name
(for example `yaml` from `pyyaml`) need an entry in the `[mapping]` table.",
        remediation: "\
Declare the distribution that provides the module in your manifest.

If the import name and the distribution name differ, add a mapping:

    [mapping]
    yaml = \"pyyaml\"

If the import is provided by something other than a third-party package
(a vendored module, a conditional import), add it to the check's ignore list
in importguard.toml.",
        examples: ExamplePair {
            before: r#"# app.py
import numpy

# requirements.txt
pandas"#,
            after: r#"# app.py
import numpy

# requirements.txt
pandas
numpy"#,
        },
    }
}

fn explain_unused() -> Explanation {
    Explanation {
        title: "Unused Dependencies",
        description: "\
Detects dependencies that are declared in a manifest but never imported by
any analysed source file.

Unused declarations slow down installs, widen the supply-chain surface, and
make manifests harder to trust. Tools that are run rather than imported
(formatters, test runners) are common sources of false positives.",
        remediation: "\
Remove the declaration if the package is no longer needed.

If the package is used under a different import name, add a mapping so the
import reaches the declaration:

    [mapping]
    sklearn = \"scikit-learn\"

If the package is a tool that is never imported, add it to the check's ignore
list:

    [checks.\"deps.unused\"]
    ignore = [\"black\", \"pytest*\"]",
        examples: ExamplePair {
            before: r#"# app.py
import pandas

# requirements.txt
pandas
scipy"#,
            after: r#"# app.py
import pandas

# requirements.txt
pandas"#,
        },
    }
}

fn explain_undeclared_import() -> Explanation {
    let mut exp = explain_undeclared();
    exp.title = "Undeclared import";
    exp
}

fn explain_unused_dependency() -> Explanation {
    let mut exp = explain_unused();
    exp.title = "Unused dependency";
    exp
}
