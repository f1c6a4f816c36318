use serde::Deserialize;

use crate::pagination;

/// Number of repositories requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Owner of a repository as embedded in a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// One repository record from `/search/repositories`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultItem {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub html_url: String,
}

/// A page of search results together with the total hit count.
///
/// A result set is always replaced wholesale; pages are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of pages at [`PAGE_SIZE`] items per page.
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.total_count, PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_response() {
        let body = r#"{
            "total_count": 45,
            "incomplete_results": false,
            "items": [{
                "id": 724712,
                "name": "rust",
                "full_name": "rust-lang/rust",
                "description": "Empowering everyone to build reliable and efficient software.",
                "owner": { "login": "rust-lang", "avatar_url": "https://avatars.githubusercontent.com/u/5430905?v=4" },
                "clone_url": "https://github.com/rust-lang/rust.git",
                "html_url": "https://github.com/rust-lang/rust",
                "stargazers_count": 100000
            }]
        }"#;

        let set: ResultSet = serde_json::from_str(body).unwrap();
        assert_eq!(set.total_count, 45);
        assert_eq!(set.items.len(), 1);
        assert_eq!(set.items[0].full_name, "rust-lang/rust");
        assert_eq!(set.items[0].owner.login, "rust-lang");
        assert_eq!(set.page_count(), 3);
    }

    #[test]
    fn tolerates_missing_fields() {
        let set: ResultSet =
            serde_json::from_str(r#"{"items":[{"id":1,"description":null}]}"#).unwrap();
        assert_eq!(set.total_count, 0);
        assert_eq!(set.items[0].description, None);
        assert!(set.items[0].clone_url.is_empty());

        let empty: ResultSet = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.page_count(), 0);
    }
}
