use crate::checks::utils::{build_ignore_set, is_ignored, locations_to_json};
use crate::compare::Comparison;
use crate::fingerprint::fingerprint_for_name;
use crate::policy::EffectiveConfig;
use importguard_types::{Finding, ids};
use serde_json::json;

pub fn run(comparison: &Comparison, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_UNDECLARED) else {
        return;
    };
    let ignore = build_ignore_set(&policy.ignore);

    for dep in &comparison.undeclared {
        if is_ignored(ignore.as_ref(), &dep.name) {
            continue;
        }

        let occurrences = dep.references.len();
        let message = if occurrences > 1 {
            format!(
                "'{}' is imported ({} occurrences) but not declared as a dependency",
                dep.name, occurrences
            )
        } else {
            format!("'{}' is imported but not declared as a dependency", dep.name)
        };

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_DEPS_UNDECLARED.to_string(),
            code: ids::CODE_UNDECLARED_IMPORT.to_string(),
            message,
            location: dep.references.first().map(|r| r.location.clone()),
            help: Some(
                "Declare the distribution that provides this module, or add a [mapping] entry if its import name differs."
                    .to_string(),
            ),
            url: None,
            fingerprint: Some(fingerprint_for_name(
                ids::CHECK_DEPS_UNDECLARED,
                ids::CODE_UNDECLARED_IMPORT,
                &dep.name,
            )),
            data: json!({
                "import": dep.name,
                "occurrences": locations_to_json(dep.references.iter().map(|r| &r.location)),
            }),
        });
    }
}
