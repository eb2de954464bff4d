use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub pageid: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchList {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// Response from `action=query&list=search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: Option<SearchList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSource {
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub pageid: i64,
    #[serde(default)]
    pub title: String,
    pub thumbnail: Option<ImageSource>,
    pub original: Option<ImageSource>,
    pub extract: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Page {
    /// Thumbnail URL, falling back to the original image
    pub fn image_url(&self) -> Option<&str> {
        self.thumbnail
            .as_ref()
            .or(self.original.as_ref())
            .map(|image| image.source.as_str())
            .filter(|url| !url.is_empty())
    }

    pub fn category_titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.title.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMap {
    /// Keyed by page id; iteration is in ascending id order
    #[serde(default)]
    pub pages: BTreeMap<i64, Page>,
}

/// Response from `action=query&pageids=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesResponse {
    pub query: Option<PageMap>,
}
