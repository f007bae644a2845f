//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{tab_key}--{category}` (e.g. `"a004_machine--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// System administration page (users, groups).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Page id for a tab key and category.
pub fn page_id(tab_key: &str, category: &str) -> String {
    format!("{}--{}", tab_key, category)
}

/// Category of a list page by aggregate index.
pub fn list_category(aggregate_index: &str) -> &'static str {
    if aggregate_index == "sys" {
        PAGE_CAT_SYSTEM
    } else {
        PAGE_CAT_LIST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("a011_production", PAGE_CAT_LIST), "a011_production--list");
        assert_eq!(list_category("sys"), PAGE_CAT_SYSTEM);
        assert_eq!(list_category("a004"), PAGE_CAT_LIST);
    }
}
