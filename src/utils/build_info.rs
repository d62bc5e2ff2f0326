//! Commit hash and build date baked in by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `quest-rpg 2026-01-31 (a1b2c3d)`
pub fn version_string() -> String {
    format!("quest-rpg {} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_string_mentions_both() {
        let version = version_string();
        assert!(version.starts_with("quest-rpg "));
        assert!(version.contains(BUILD_DATE));
        assert!(version.contains(BUILD_COMMIT));
    }
}
