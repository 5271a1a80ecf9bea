//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_recovery_policy--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector, paste into IDE search, land in the matching
//! `domain/` directory.

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System / administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_agent--list"));
        assert!(!is_valid_page_id("a001_agent"));
        assert!(!is_valid_page_id("--list"));
    }
}
