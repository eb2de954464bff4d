use serde::{Deserialize, Serialize};

const COVERS_BASE_URL: &str = "https://covers.openlibrary.org/b/id";

/// Work entry from GET /search.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDoc {
    /// Work key, e.g. `/works/OL45804W`
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub cover_i: Option<i64>,
    pub first_publish_year: Option<i32>,
}

impl BookDoc {
    /// Medium-size cover URL
    pub fn cover_url(&self) -> Option<String> {
        self.cover_i
            .filter(|id| *id > 0)
            .map(|id| format!("{}/{}-M.jpg", COVERS_BASE_URL, id))
    }

    /// Authors joined with `, `
    pub fn authors(&self) -> Option<String> {
        let names: Vec<&str> = self
            .author_name
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        (!names.is_empty()).then(|| names.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: i64,
    #[serde(default)]
    pub docs: Vec<BookDoc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_doc_helpers() {
        let json = r#"{"numFound": 2, "docs": [
            {"key": "/works/OL27448W", "title": "The Lord of the Rings", "author_name": ["J.R.R. Tolkien"], "cover_i": 9255566},
            {"key": "/works/OL1W", "title": "Good Omens", "author_name": ["Terry Pratchett", "Neil Gaiman"]}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let lotr = &response.docs[0];
        assert_eq!(
            lotr.cover_url().as_deref(),
            Some("https://covers.openlibrary.org/b/id/9255566-M.jpg")
        );
        assert_eq!(lotr.authors().as_deref(), Some("J.R.R. Tolkien"));

        let omens = &response.docs[1];
        assert_eq!(omens.cover_url(), None);
        assert_eq!(omens.authors().as_deref(), Some("Terry Pratchett, Neil Gaiman"));
    }
}
