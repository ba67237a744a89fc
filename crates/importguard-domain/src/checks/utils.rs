use globset::{Glob, GlobSet, GlobSetBuilder};
use importguard_types::Location;
use serde_json::{Value, json};

/// Build the ignore set for a check. Patterns are validated in importguard-settings; any that
/// fail to compile here are skipped.
pub fn build_ignore_set(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // Case-sensitive, matched against the name as the collector reported it.
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().ok()
}

pub fn is_ignored(ignore: Option<&GlobSet>, name: &str) -> bool {
    ignore.map(|set| set.is_match(name)).unwrap_or(false)
}

pub fn locations_to_json<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Value {
    Value::Array(
        locations
            .into_iter()
            .map(|loc| match loc.line {
                Some(line) => json!({ "path": loc.path.as_str(), "line": line }),
                None => json!({ "path": loc.path.as_str() }),
            })
            .collect(),
    )
}
