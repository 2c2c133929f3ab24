//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid project name (letters, digits, spaces, `-`, `_`, `.`)
    pub fn project_name() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_][A-Za-z0-9 _.-]{0,30}[A-Za-z0-9_]?"
            .prop_filter("Name must be a usable single component", |s| {
                s != "." && s != ".." && s.trim() == s
            })
    }

    /// Generate a template-relative path segment that is not the marker
    pub fn plain_segment() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,12}(\\.[a-z]{1,3})?"
            .prop_filter("Segment must not be the marker", |s| s != "template")
    }

    /// Generate a template-relative path, sometimes containing marker segments
    pub fn template_path() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                3 => plain_segment(),
                1 => Just("template".to_string()),
            ],
            1..5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::plan::rename_relative;
    use crate::core::project::validate_name;
    use proptest::prelude::*;
    use std::path::PathBuf;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_generated_names_are_valid(name in project_name()) {
            prop_assert!(validate_name(&name).is_ok(), "{name:?} rejected");
        }

        #[test]
        fn test_names_with_separators_rejected(a in project_name(), b in project_name()) {
            let joined = format!("{a}/{b}");
            prop_assert!(validate_name(&joined).is_err());
        }

        #[test]
        fn test_rename_preserves_depth(segments in template_path(), name in project_name()) {
            let relative: PathBuf = segments.iter().collect();
            let renamed = rename_relative(&relative, true, &name, ".ino");
            prop_assert_eq!(renamed.components().count(), segments.len());
        }

        #[test]
        fn test_rename_only_touches_marker(segments in template_path(), name in project_name()) {
            let relative: PathBuf = segments.iter().collect();
            let renamed = rename_relative(&relative, true, &name, ".cpp");
            let last = segments.len() - 1;

            for (i, (orig, new)) in segments.iter().zip(renamed.iter()).enumerate() {
                let new = new.to_string_lossy();
                if orig == "template" {
                    let expected = if i == last { format!("{name}.cpp") } else { name.clone() };
                    prop_assert_eq!(new.as_ref(), expected.as_str());
                } else {
                    prop_assert_eq!(new.as_ref(), orig.as_str());
                }
            }
        }
    }
}
