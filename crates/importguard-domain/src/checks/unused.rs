use crate::checks::utils::{build_ignore_set, is_ignored, locations_to_json};
use crate::compare::Comparison;
use crate::fingerprint::fingerprint_for_name;
use crate::policy::EffectiveConfig;
use importguard_types::{Finding, ids};
use serde_json::json;

pub fn run(comparison: &Comparison, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_UNUSED) else {
        return;
    };
    let ignore = build_ignore_set(&policy.ignore);

    for dep in &comparison.unused {
        if is_ignored(ignore.as_ref(), &dep.name) {
            continue;
        }

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_DEPS_UNUSED.to_string(),
            code: ids::CODE_UNUSED_DEPENDENCY.to_string(),
            message: format!(
                "'{}' is declared as a dependency but never imported",
                dep.name
            ),
            location: dep.references.first().map(|r| r.location.clone()),
            help: Some(
                "Remove the declaration, map its import name under [mapping], or ignore it if the package is a tool that is never imported."
                    .to_string(),
            ),
            url: None,
            fingerprint: Some(fingerprint_for_name(
                ids::CHECK_DEPS_UNUSED,
                ids::CODE_UNUSED_DEPENDENCY,
                &dep.name,
            )),
            data: json!({
                "dependency": dep.name,
                "declared_in": locations_to_json(dep.references.iter().map(|r| &r.location)),
            }),
        });
    }
}
