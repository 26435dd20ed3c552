use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
}
