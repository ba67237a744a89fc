//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Grouping multiplicity and first-seen ordering
//! - Matching and independence of the undeclared/unused rules, with and without a mapping table
//! - Determinism of comparison and evaluation

use crate::compare::compare_imports_to_dependencies;
use crate::engine::evaluate;
use crate::model::AuditInput;
use crate::resolver::{NameResolver, normalize_name};
use crate::test_support::config_all;
use importguard_types::{DeclaredDependency, Location, ParsedImport, Severity};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for module/distribution names, including mixed case and separators.
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,6}([-_.][a-z0-9]{1,4}){0,2}")
        .unwrap()
}

fn arb_location() -> impl Strategy<Value = Location> {
    prop_oneof![
        Just(Location::stdin()),
        (
            prop::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.py").unwrap(),
            prop::option::of(1u32..500),
        )
            .prop_map(|(path, line)| {
                let loc = Location::new(path);
                match line {
                    Some(l) => loc.with_line(l),
                    None => loc,
                }
            }),
    ]
}

fn arb_imports() -> impl Strategy<Value = Vec<ParsedImport>> {
    prop::collection::vec(
        (arb_name(), arb_location()).prop_map(|(n, l)| ParsedImport::new(n, l)),
        0..20,
    )
}

fn arb_deps() -> impl Strategy<Value = Vec<DeclaredDependency>> {
    prop::collection::vec(
        (arb_name(), arb_location()).prop_map(|(n, l)| DeclaredDependency::new(n, l)),
        0..20,
    )
}

/// Import name -> candidate distribution names.
fn arb_mapping() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        (arb_name(), prop::collection::vec(arb_name(), 1..4)),
        0..6,
    )
}

/// Candidates for `import_name` computed straight from the raw table.
fn expected_candidates(mapping: &[(String, Vec<String>)], import_name: &str) -> BTreeSet<String> {
    let key = normalize_name(import_name);
    let mut out: BTreeSet<String> = mapping
        .iter()
        .filter(|(k, _)| normalize_name(k) == key)
        .flat_map(|(_, cs)| cs.iter().map(|c| normalize_name(c)))
        .collect();
    out.insert(key);
    out
}

/// Distinct names in first-seen order.
fn distinct_in_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|n| seen.insert(*n)).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn comparison_is_deterministic(imports in arb_imports(), deps in arb_deps()) {
        let resolver = NameResolver::identity();
        let a = compare_imports_to_dependencies(&imports, &deps, &resolver);
        let b = compare_imports_to_dependencies(&imports, &deps, &resolver);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_undeclared_record_holds_all_occurrences(imports in arb_imports(), deps in arb_deps()) {
        let got = compare_imports_to_dependencies(&imports, &deps, &NameResolver::identity());
        for record in &got.undeclared {
            let expected: Vec<&ParsedImport> =
                imports.iter().filter(|i| i.name == record.name).collect();
            let actual: Vec<&ParsedImport> = record.references.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn every_unused_record_holds_all_occurrences(imports in arb_imports(), deps in arb_deps()) {
        let got = compare_imports_to_dependencies(&imports, &deps, &NameResolver::identity());
        for record in &got.unused {
            let expected: Vec<&DeclaredDependency> =
                deps.iter().filter(|d| d.name == record.name).collect();
            let actual: Vec<&DeclaredDependency> = record.references.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn records_follow_first_seen_order(imports in arb_imports(), deps in arb_deps()) {
        let got = compare_imports_to_dependencies(&imports, &deps, &NameResolver::identity());

        let order = distinct_in_order(imports.iter().map(|i| i.name.as_str()));
        let names: Vec<&str> = got.undeclared.iter().map(|u| u.name.as_str()).collect();
        let expected: Vec<&str> = order.into_iter().filter(|n| names.contains(n)).collect();
        prop_assert_eq!(names, expected);

        let order = distinct_in_order(deps.iter().map(|d| d.name.as_str()));
        let names: Vec<&str> = got.unused.iter().map(|u| u.name.as_str()).collect();
        let expected: Vec<&str> = order.into_iter().filter(|n| names.contains(n)).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn identical_names_never_reported(names in prop::collection::vec(arb_name(), 0..10)) {
        let imports: Vec<ParsedImport> = names
            .iter()
            .map(|n| ParsedImport::new(n.clone(), Location::stdin()))
            .collect();
        let deps: Vec<DeclaredDependency> = names
            .iter()
            .map(|n| DeclaredDependency::new(n.clone(), Location::new("requirements.txt")))
            .collect();
        let got = compare_imports_to_dependencies(&imports, &deps, &NameResolver::identity());
        prop_assert!(got.is_clean());
    }

    #[test]
    fn undeclared_matches_its_own_rule(imports in arb_imports(), deps in arb_deps()) {
        let got = compare_imports_to_dependencies(&imports, &deps, &NameResolver::identity());
        let declared: HashSet<String> = deps.iter().map(|d| normalize_name(&d.name)).collect();
        let expected: Vec<&str> = distinct_in_order(imports.iter().map(|i| i.name.as_str()))
            .into_iter()
            .filter(|n| !declared.contains(&normalize_name(n)))
            .collect();
        let names: Vec<&str> = got.undeclared.iter().map(|u| u.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn unused_matches_its_own_rule(imports in arb_imports(), deps in arb_deps()) {
        let got = compare_imports_to_dependencies(&imports, &deps, &NameResolver::identity());
        let imported: HashSet<String> = imports.iter().map(|i| normalize_name(&i.name)).collect();
        let expected: Vec<&str> = distinct_in_order(deps.iter().map(|d| d.name.as_str()))
            .into_iter()
            .filter(|n| !imported.contains(&normalize_name(n)))
            .collect();
        let names: Vec<&str> = got.unused.iter().map(|u| u.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn mapped_undeclared_follows_any_candidate_rule(
        mapping in arb_mapping(),
        imports in arb_imports(),
        deps in arb_deps(),
    ) {
        let resolver = NameResolver::new(mapping.clone());
        let got = compare_imports_to_dependencies(&imports, &deps, &resolver);
        let declared: HashSet<String> = deps.iter().map(|d| normalize_name(&d.name)).collect();
        let expected: Vec<&str> = distinct_in_order(imports.iter().map(|i| i.name.as_str()))
            .into_iter()
            .filter(|n| !expected_candidates(&mapping, n).iter().any(|c| declared.contains(c)))
            .collect();
        let names: Vec<&str> = got.undeclared.iter().map(|u| u.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn mapped_unused_follows_reachability_rule(
        mapping in arb_mapping(),
        imports in arb_imports(),
        deps in arb_deps(),
    ) {
        let resolver = NameResolver::new(mapping.clone());
        let got = compare_imports_to_dependencies(&imports, &deps, &resolver);
        let reached: HashSet<String> = imports
            .iter()
            .flat_map(|i| expected_candidates(&mapping, &i.name))
            .collect();
        let expected: Vec<&str> = distinct_in_order(deps.iter().map(|d| d.name.as_str()))
            .into_iter()
            .filter(|n| !reached.contains(&normalize_name(n)))
            .collect();
        let names: Vec<&str> = got.unused.iter().map(|u| u.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn mapping_applies_from_import_to_declared_only(import in arb_name(), dist in arb_name()) {
        prop_assume!(normalize_name(&import) != normalize_name(&dist));
        let resolver = NameResolver::new([(import.clone(), vec![dist.clone()])]);

        let forward = compare_imports_to_dependencies(
            &[ParsedImport::new(import.clone(), Location::stdin())],
            &[DeclaredDependency::new(dist.clone(), Location::new("requirements.txt"))],
            &resolver,
        );
        prop_assert!(forward.is_clean());

        let reversed = compare_imports_to_dependencies(
            &[ParsedImport::new(dist.clone(), Location::stdin())],
            &[DeclaredDependency::new(import.clone(), Location::new("requirements.txt"))],
            &resolver,
        );
        prop_assert_eq!(reversed.undeclared.len(), 1);
        prop_assert_eq!(&reversed.undeclared[0].name, &dist);
        prop_assert_eq!(reversed.unused.len(), 1);
        prop_assert_eq!(&reversed.unused[0].name, &import);
    }

    #[test]
    fn normalize_is_idempotent(name in arb_name()) {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn evaluation_finding_count_matches_comparison(imports in arb_imports(), deps in arb_deps()) {
        let cfg = config_all(Severity::Warning);
        let input = AuditInput::new(imports, deps);
        let report = evaluate(&input, &cfg);
        let records = report.comparison.undeclared.len() + report.comparison.unused.len();
        prop_assert_eq!(report.data.findings_total as usize, records);
        prop_assert!(report.findings.len() <= cfg.max_findings);
    }
}
