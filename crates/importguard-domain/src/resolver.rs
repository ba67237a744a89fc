//! Import-name to distribution-name resolution.

use std::collections::{BTreeMap, BTreeSet};

/// Normalize a package or module identifier for comparison.
///
/// Lowercases, and collapses every run of `-`, `_` and `.` into a single `-`, so
/// `Foo_Bar`, `foo-bar` and `foo.bar` all compare equal.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for ch in name.chars() {
        if matches!(ch, '-' | '_' | '.') {
            if !in_separator {
                out.push('-');
                in_separator = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            in_separator = false;
        }
    }
    out
}

/// Resolves an import identifier to the set of declared identifiers that satisfy it.
///
/// The mapping table is supplied once at construction and never changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameResolver {
    /// Normalized import name -> normalized candidate distribution names.
    mapping: BTreeMap<String, BTreeSet<String>>,
}

impl NameResolver {
    /// A resolver without a mapping table: every import resolves to itself.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build a resolver from `import name -> candidates` pairs.
    ///
    /// Keys and candidates are normalized; keys that normalize to the same name are merged.
    pub fn new<I, K, C, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let mut normalized: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (import_name, candidates) in mapping {
            normalized
                .entry(normalize_name(import_name.as_ref()))
                .or_default()
                .extend(candidates.into_iter().map(|c| normalize_name(c.as_ref())));
        }
        Self {
            mapping: normalized,
        }
    }

    /// Distribution names that would satisfy `import_name`.
    ///
    /// Always contains the normalized import name itself; mapped candidates are added on top.
    pub fn resolve(&self, import_name: &str) -> BTreeSet<String> {
        let key = normalize_name(import_name);
        let mut out = self.mapping.get(&key).cloned().unwrap_or_default();
        out.insert(key);
        out
    }

    /// The form a declared name takes when compared against resolved candidates.
    pub fn normalize_declared(&self, declared_name: &str) -> String {
        normalize_name(declared_name)
    }

    /// Number of distinct (normalized) import names in the mapping table.
    pub fn mapping_len(&self) -> usize {
        self.mapping.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_separators_and_case() {
        assert_eq!(normalize_name("Foo_Bar"), "foo-bar");
        assert_eq!(normalize_name("foo.bar"), "foo-bar");
        assert_eq!(normalize_name("foo--__..bar"), "foo-bar");
        assert_eq!(normalize_name("numpy"), "numpy");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn identity_resolver_returns_normalized_name_only() {
        let resolver = NameResolver::identity();
        let got = resolver.resolve("Foo_Bar");
        assert_eq!(got.into_iter().collect::<Vec<_>>(), vec!["foo-bar".to_string()]);
    }

    #[test]
    fn mapped_name_includes_candidates_and_identity() {
        let resolver =
            NameResolver::new([("sklearn", vec!["scikit-learn", "Scikit_Learn_Intelex"])]);
        let got: Vec<String> = resolver.resolve("sklearn").into_iter().collect();
        assert_eq!(
            got,
            vec![
                "scikit-learn".to_string(),
                "scikit-learn-intelex".to_string(),
                "sklearn".to_string(),
            ]
        );
    }

    #[test]
    fn mapping_keys_are_normalized_and_merged() {
        let resolver = NameResolver::new([("Foo_Bar", vec!["a"]), ("foo-bar", vec!["b"])]);
        assert_eq!(resolver.mapping_len(), 1);
        let got = resolver.resolve("foo.bar");
        assert!(got.contains("a"));
        assert!(got.contains("b"));
    }

    #[test]
    fn unknown_name_falls_back_to_identity() {
        let resolver = NameResolver::new([("yaml", vec!["pyyaml"])]);
        let got = resolver.resolve("requests");
        assert_eq!(got.len(), 1);
        assert!(got.contains("requests"));
    }
}
