use crate::model::AuditInput;
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use crate::resolver::NameResolver;
use importguard_types::{
    DeclaredDependency, Location, ParsedImport, Severity, UndeclaredDependency, UnusedDependency,
    ids,
};
use std::collections::BTreeMap;

/// Imports read from standard input, one per name.
pub fn imports(names: &[&str]) -> Vec<ParsedImport> {
    names
        .iter()
        .map(|n| ParsedImport::new(*n, Location::stdin()))
        .collect()
}

/// Dependencies declared in a manifest called `foo`, one per name.
pub fn deps(names: &[&str]) -> Vec<DeclaredDependency> {
    names
        .iter()
        .map(|n| DeclaredDependency::new(*n, Location::new("foo")))
        .collect()
}

pub fn undeclared(names: &[&str]) -> Vec<UndeclaredDependency> {
    names
        .iter()
        .map(|n| UndeclaredDependency {
            name: n.to_string(),
            references: imports(&[*n]),
        })
        .collect()
}

pub fn unused(names: &[&str]) -> Vec<UnusedDependency> {
    names
        .iter()
        .map(|n| UnusedDependency {
            name: n.to_string(),
            references: deps(&[*n]),
        })
        .collect()
}

pub fn input(import_names: &[&str], dep_names: &[&str]) -> AuditInput {
    AuditInput::new(imports(import_names), deps(dep_names))
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        resolver: NameResolver::identity(),
    }
}

pub fn config_with_check_ignore(
    check_id: &str,
    severity: Severity,
    ignore: Vec<&str>,
) -> EffectiveConfig {
    let mut cfg = config_with_check(check_id, severity);
    if let Some(policy) = cfg.checks.get_mut(check_id) {
        policy.ignore = ignore.into_iter().map(|s| s.to_string()).collect();
    }
    cfg
}

/// Both checks enabled at `severity`.
pub fn config_all(severity: Severity) -> EffectiveConfig {
    let mut cfg = config_with_check(ids::CHECK_DEPS_UNDECLARED, severity);
    cfg.checks.insert(
        ids::CHECK_DEPS_UNUSED.to_string(),
        CheckPolicy::enabled(severity),
    );
    cfg
}
