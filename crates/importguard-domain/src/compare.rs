//! Reconcile observed imports against declared dependencies.

use crate::resolver::NameResolver;
use importguard_types::{DeclaredDependency, ParsedImport, UndeclaredDependency, UnusedDependency};
use std::collections::{HashMap, HashSet};

/// Result of comparing imports to declared dependencies.
///
/// Both lists follow first-occurrence order of their names in the respective input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    pub undeclared: Vec<UndeclaredDependency>,
    pub unused: Vec<UnusedDependency>,
}

impl Comparison {
    pub fn is_clean(&self) -> bool {
        self.undeclared.is_empty() && self.unused.is_empty()
    }

    pub fn into_parts(self) -> (Vec<UndeclaredDependency>, Vec<UnusedDependency>) {
        (self.undeclared, self.unused)
    }
}

/// Group occurrences by exact name, remembering the order in which names were first seen.
struct OrderedGroups<'a, T> {
    keys: Vec<&'a str>,
    members: HashMap<&'a str, Vec<&'a T>>,
}

impl<'a, T> OrderedGroups<'a, T> {
    fn build(items: &'a [T], name_of: impl Fn(&'a T) -> &'a str) -> Self {
        let mut keys = Vec::new();
        let mut members: HashMap<&'a str, Vec<&'a T>> = HashMap::new();
        for item in items {
            let name = name_of(item);
            members
                .entry(name)
                .or_insert_with(|| {
                    keys.push(name);
                    Vec::new()
                })
                .push(item);
        }
        Self { keys, members }
    }

    fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a T])> + '_ {
        self.keys.iter().map(move |key| {
            let refs = self.members.get(key).map(Vec::as_slice).unwrap_or_default();
            (*key, refs)
        })
    }
}

/// Compare imports to declared dependencies.
///
/// An import name is undeclared when none of its resolved candidates is declared. A declared
/// name is unused when no import's candidate set contains it. Matched names appear in neither
/// list. Each name yields at most one record carrying all of its occurrences in input order.
pub fn compare_imports_to_dependencies(
    imports: &[ParsedImport],
    dependencies: &[DeclaredDependency],
    resolver: &NameResolver,
) -> Comparison {
    let import_groups = OrderedGroups::build(imports, |i| i.name.as_str());
    let dependency_groups = OrderedGroups::build(dependencies, |d| d.name.as_str());

    let declared: HashSet<String> = dependency_groups
        .iter()
        .map(|(name, _)| resolver.normalize_declared(name))
        .collect();

    let mut reached: HashSet<String> = HashSet::new();
    let mut undeclared = Vec::new();
    for (name, refs) in import_groups.iter() {
        let candidates = resolver.resolve(name);
        if !candidates.iter().any(|c| declared.contains(c)) {
            undeclared.push(undeclared_record(name, refs));
        }
        reached.extend(candidates);
    }

    let unused = dependency_groups
        .iter()
        .filter(|(name, _)| !reached.contains(&resolver.normalize_declared(name)))
        .map(|(name, refs)| unused_record(name, refs))
        .collect();

    Comparison { undeclared, unused }
}

fn undeclared_record(name: &str, refs: &[&ParsedImport]) -> UndeclaredDependency {
    UndeclaredDependency {
        name: name.to_string(),
        references: refs.iter().map(|r| (*r).clone()).collect(),
    }
}

fn unused_record(name: &str, refs: &[&DeclaredDependency]) -> UnusedDependency {
    UnusedDependency {
        name: name.to_string(),
        references: refs.iter().map(|r| (*r).clone()).collect(),
    }
}
