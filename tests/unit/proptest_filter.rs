//! Property-based tests for path utilities
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use pylint_vcs::core::services::{relative_path, should_include};

const SEP: char = std::path::MAIN_SEPARATOR;

fn segment() -> impl Strategy<Value = String> {
    "[a-z_]{1,8}"
}

fn relative() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|parts| parts.join(&SEP.to_string()))
}

proptest! {
    /// Joining a root and a relative path, then relativizing, gives the
    /// relative path back, with or without a trailing separator on the root
    #[test]
    fn relative_path_inverts_join(root in relative(), rest in relative(), trailing in any::<bool>()) {
        let path = format!("{SEP}{root}{SEP}{rest}");
        let parent = if trailing { format!("{SEP}{root}{SEP}") } else { format!("{SEP}{root}") };
        prop_assert_eq!(relative_path(&path, &parent), rest);
    }

    /// Without ignore rules every path is included
    #[test]
    fn no_rules_include_all(path in relative()) {
        prop_assert!(should_include(&path, &[], &[]));
    }

    /// Listing any segment of a path excludes it
    #[test]
    fn listed_segment_excludes(parts in prop::collection::vec(segment(), 1..5), pick in any::<prop::sample::Index>()) {
        let path = parts.join(&SEP.to_string());
        let ignored = pick.get(&parts).as_str();
        prop_assert!(!should_include(&path, &[ignored], &[]));
    }

    /// A literal pattern equal to the path's first segment excludes it
    #[test]
    fn leading_literal_pattern_excludes(path in relative()) {
        let first = path.split(SEP).next().unwrap_or_default().to_string();
        prop_assert!(!should_include(&path, &[], &[first.as_str()]));
    }

    /// Entries that are not whole segments never exclude
    #[test]
    fn partial_segment_does_not_exclude(path in relative()) {
        prop_assert!(should_include(&path, &["Z-not-a-segment"], &[]));
    }
}
