use importguard_domain::NameResolver;
use importguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use importguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error),
        resolver: NameResolver::identity(),
    }
}

fn warn_profile() -> EffectiveConfig {
    // Reports everything, fails nothing unless `fail_on = "warning"` is set.
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
        resolver: NameResolver::identity(),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use importguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_DEPS_UNDECLARED.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_DEPS_UNUSED.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}
