//! Label to category table

use crate::types::Category;

/// Label that removes a pull request from the changelog
pub const SKIP_LABEL: &str = "Skip Changelog";

/// Order in which categories are rendered within a month
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::NewFeatures,
    Category::ApiChanges,
    Category::DocumentationChanges,
    Category::ExampleUpdates,
    Category::Deprecated,
    Category::PlatformUpdates,
];

/// Category a label maps to, if any.
///
/// Unmapped labels, including [`SKIP_LABEL`], return `None`.
pub fn category_for_label(label: &str) -> Option<Category> {
    match label {
        "New Features" => Some(Category::NewFeatures),
        "API Changes" => Some(Category::ApiChanges),
        "Documentation and Feature Enhancements"
        | "Information Architecture Changes"
        | "Documentation Fixes" => Some(Category::DocumentationChanges),
        "Deprecated" => Some(Category::Deprecated),
        "Example Updates" => Some(Category::ExampleUpdates),
        "Platform Updates" => Some(Category::PlatformUpdates),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_documentation_labels_share_category() {
        for label in [
            "Documentation and Feature Enhancements",
            "Information Architecture Changes",
            "Documentation Fixes",
        ] {
            assert_eq!(
                category_for_label(label),
                Some(Category::DocumentationChanges)
            );
        }
    }

    #[test]
    fn test_unmapped_labels() {
        assert_eq!(category_for_label(SKIP_LABEL), None);
        assert_eq!(category_for_label("bug"), None);
        // Matching is case-sensitive
        assert_eq!(category_for_label("new features"), None);
    }

    #[test]
    fn test_category_order_is_unique() {
        let unique: HashSet<_> = CATEGORY_ORDER.iter().collect();
        assert_eq!(unique.len(), CATEGORY_ORDER.len());
        assert_eq!(CATEGORY_ORDER[4].heading(), "### 🗑 Deprecated");
    }
}
