use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a dependency finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - dependency name (as written by the collector)
///
/// Locations are not part of the identity.
pub fn fingerprint_for_name(check_id: &str, code: &str, name: &str) -> String {
    let canonical = [check_id, code, name].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_name_sensitive() {
        let a = fingerprint_for_name("deps.unused", "unused_dependency", "scipy");
        let b = fingerprint_for_name("deps.unused", "unused_dependency", "scipy");
        let c = fingerprint_for_name("deps.unused", "unused_dependency", "numpy");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
