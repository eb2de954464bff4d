//! Ranked character lists built from validated drafts

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DraftError, ItemDraft, SourceType};

/// Author shown on a shared list whose owner is gone
pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("List name required")]
    EmptyName,
    #[error("No item at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Saved entry of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub character_name: String,
    pub source_title: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: u8,
}

impl ListItem {
    /// Validate the draft and trim its text fields
    pub fn from_draft(draft: ItemDraft) -> Result<Self, DraftError> {
        draft.validate()?;
        Ok(Self {
            character_name: draft.character_name.trim().to_string(),
            source_title: draft.source_title.trim().to_string(),
            source_type: draft.source_type,
            image: draft.image.filter(|image| !image.trim().is_empty()),
            rating: draft.rating,
        })
    }

    /// Reopen the item in the edit form
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            character_name: self.character_name.clone(),
            source_title: self.source_title.clone(),
            source_type: self.source_type,
            image: self.image.clone(),
            rating: self.rating,
        }
    }
}

/// Item as displayed: its place by rating and its position in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedItem<'a> {
    /// 1-based display rank
    pub rank: usize,
    /// Position in [`CharacterList::items`], for edit and remove
    pub index: usize,
    #[serde(flatten)]
    pub item: &'a ListItem,
}

/// Named, user-ordered list of characters.
///
/// Items keep the order the user gave them; [`CharacterList::ranked_view`]
/// is the rating-sorted display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterList {
    name: String,
    #[serde(default)]
    items: Vec<ListItem>,
}

impl CharacterList {
    pub fn new(name: &str) -> Result<Self, ListError> {
        Ok(Self {
            name: list_name(name)?,
            items: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ListError> {
        self.name = list_name(name)?;
        Ok(())
    }

    /// Append a validated item and return its position
    pub fn add(&mut self, draft: ItemDraft) -> Result<usize, ListError> {
        self.items.push(ListItem::from_draft(draft)?);
        Ok(self.items.len() - 1)
    }

    /// Replace the item at `index`; the list is unchanged on error
    pub fn update(&mut self, index: usize, draft: ItemDraft) -> Result<(), ListError> {
        self.check(index)?;
        self.items[index] = ListItem::from_draft(draft)?;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ListItem, ListError> {
        self.check(index)?;
        Ok(self.items.remove(index))
    }

    /// Take the item at `from` out and reinsert it at `to`.
    ///
    /// Both positions refer to the list before the move.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.check(from)?;
        self.check(to)?;
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    /// Items of one source type (or all), highest rating first.
    ///
    /// Equal ratings keep their list order.
    pub fn ranked_view(&self, filter: Option<SourceType>) -> Vec<RankedItem<'_>> {
        let mut view: Vec<(usize, &ListItem)> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.map_or(true, |source_type| item.source_type == source_type))
            .collect();
        view.sort_by_key(|(_, item)| Reverse(item.rating));

        view.into_iter()
            .enumerate()
            .map(|(position, (index, item))| RankedItem {
                rank: position + 1,
                index,
                item,
            })
            .collect()
    }

    /// Read-only copy for a share link
    pub fn share(&self, author: Option<&str>) -> SharedList {
        let author = author
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);
        SharedList {
            name: self.name.clone(),
            author: author.to_string(),
            items: self.items.clone(),
        }
    }

    fn check(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

/// List as seen through a share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedList {
    pub name: String,
    pub author: String,
    pub items: Vec<ListItem>,
}

fn list_name(name: &str) -> Result<String, ListError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ListError::EmptyName);
    }
    Ok(name.to_string())
}
