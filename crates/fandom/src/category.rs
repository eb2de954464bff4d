use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

const CATEGORY_PREFIX: &str = "Category:";

/// Rules for deriving a source title from category tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRules {
    /// Categories containing any of these substrings (case-sensitive) are ignored
    pub excluded_substrings: Vec<String>,
    /// Role words marking a "<work> <role>" category (case-insensitive)
    pub role_words: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            excluded_substrings: ["Males", "Females", "Articles", "living", "deceased"]
                .into_iter()
                .map(String::from)
                .collect(),
            role_words: ["Characters", "Villains", "Heroes", "Antagonists", "Protagonists"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Compiled [`CategoryRules`]
#[derive(Debug, Clone)]
pub struct CategoryInference {
    excluded_substrings: Vec<String>,
    role_pattern: Option<Regex>,
    strip_patterns: Vec<Regex>,
}

impl CategoryInference {
    pub fn new(rules: &CategoryRules) -> crate::Result<Self> {
        let words: Vec<&str> = rules
            .role_words
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .collect();

        let role_pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|word| regex::escape(word))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!("({})", alternation))
                    .case_insensitive(true)
                    .build()?,
            )
        };

        let strip_patterns = words
            .iter()
            .map(|word| {
                RegexBuilder::new(&format!(" {}", regex::escape(word)))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded_substrings: rules.excluded_substrings.clone(),
            role_pattern,
            strip_patterns,
        })
    }

    fn is_excluded(&self, category: &str) -> bool {
        self.excluded_substrings
            .iter()
            .any(|needle| !needle.is_empty() && category.contains(needle.as_str()))
    }

    /// Infer the parent work from a page's categories.
    ///
    /// Picks the first non-excluded category containing a role word, then
    /// removes the `Category:` prefix and the first occurrence of each
    /// ` <role word>`.
    pub fn infer<'a, I>(&self, categories: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let role_pattern = self.role_pattern.as_ref()?;
        let best = categories
            .into_iter()
            .filter(|category| !self.is_excluded(category))
            .find(|category| role_pattern.is_match(category))?;

        let mut title = best.replacen(CATEGORY_PREFIX, "", 1);
        for pattern in &self.strip_patterns {
            title = pattern.replacen(&title, 1, "").into_owned();
        }

        let title = title.trim();
        (!title.is_empty()).then(|| title.to_string())
    }
}

impl Default for CategoryInference {
    fn default() -> Self {
        // Default role words are plain literals and always compile
        Self::new(&CategoryRules::default()).unwrap_or(Self {
            excluded_substrings: Vec::new(),
            role_pattern: None,
            strip_patterns: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(categories: &[&str]) -> Option<String> {
        CategoryInference::default().infer(categories.iter().copied())
    }

    #[test]
    fn test_infer_from_role_category() {
        assert_eq!(
            infer(&["Breaking Bad Villains", "Male Characters", "Living people"]),
            Some("Breaking Bad".to_string())
        );
        assert_eq!(
            infer(&["Category:Breaking Bad Villains", "Category:Males"]),
            Some("Breaking Bad".to_string())
        );
    }

    #[test]
    fn test_excluded_categories_are_skipped() {
        assert_eq!(
            infer(&["Category:Males", "Category:Articles with Characters", "Category:Marvel Heroes"]),
            Some("Marvel".to_string())
        );
        assert_eq!(
            infer(&["Category:deceased Characters", "Category:DC Antagonists"]),
            Some("DC".to_string())
        );
    }

    #[test]
    fn test_role_words_are_case_insensitive() {
        assert_eq!(
            infer(&["Category:Star Wars villains"]),
            Some("Star Wars".to_string())
        );
    }

    #[test]
    fn test_strips_each_role_word_once() {
        assert_eq!(
            infer(&["Category:Disney Heroes Protagonists"]),
            Some("Disney".to_string())
        );
    }

    #[test]
    fn test_no_match_yields_none() {
        assert_eq!(infer(&["Category:Living people", "Category:Pages"]), None);
        assert_eq!(infer(&[]), None);
        // Nothing remains once the prefix and role word are stripped
        assert_eq!(infer(&["Category: Villains"]), None);
    }

    #[test]
    fn test_custom_rules() {
        let rules = CategoryRules {
            excluded_substrings: vec![],
            role_words: vec!["Monsters".to_string()],
        };
        let inference = CategoryInference::new(&rules).unwrap();
        assert_eq!(
            inference.infer(["Category:Godzilla Monsters", "Category:Toho Villains"]),
            Some("Godzilla".to_string())
        );
        assert_eq!(inference.infer(["Category:Toho Villains"]), None);
    }

    #[test]
    fn test_empty_role_words_never_match() {
        let rules = CategoryRules {
            excluded_substrings: vec![],
            role_words: vec![],
        };
        let inference = CategoryInference::new(&rules).unwrap();
        assert_eq!(inference.infer(["Category:Marvel Heroes"]), None);
    }
}
