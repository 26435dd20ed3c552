use std::fmt;

use crate::types::SearchItem;

/// A repository to star, addressed by its `owner/name` full name.
///
/// Description and star count are only known when the repository came
/// from a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub full_name: String,
    pub description: Option<String>,
    pub stars: Option<u64>,
}

impl RepositoryRef {
    /// A bare reference taken verbatim from the command line.
    pub fn named(full_name: impl Into<String>) -> Self {
        RepositoryRef {
            full_name: full_name.into(),
            description: None,
            stars: None,
        }
    }

    /// Split the full name into `(owner, name)`, if it has that shape.
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        let (owner, name) = self.full_name.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((owner, name))
    }
}

impl From<SearchItem> for RepositoryRef {
    fn from(item: SearchItem) -> Self {
        RepositoryRef {
            full_name: item.full_name,
            description: item.description,
            stars: Some(item.stargazers_count),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}
