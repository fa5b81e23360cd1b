use super::entry::{
    CategoryUpdate, FeedbackCategory, FeedbackEntry, FeedbackItem, FeedbackUpdate,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum length of a text field before it is truncated
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Characters kept at each end of a truncated field
const KEPT_EDGE: usize = 250;

const TRUNCATION_MARKER: &str = " ... (result too long) ... ";

/// Keep the head and tail of an overlong text
///
/// Lengths are counted in characters, not bytes.
pub fn truncate_field(text: &str, max_length: usize) -> String {
    let len = text.chars().count();
    if len <= max_length {
        return text.to_string();
    }

    let head: String = text.chars().take(KEPT_EDGE).collect();
    let tail: String = text.chars().skip(len.saturating_sub(KEPT_EDGE)).collect();
    format!("{}{}{}", head, TRUNCATION_MARKER, tail)
}

/// Feedback list rendered by the platform as foldable blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FoldableFeedback {
    #[serde(rename = "content")]
    entries: Vec<FeedbackEntry>,

    #[serde(skip, default = "default_max_length")]
    max_length: usize,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Default for FoldableFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldableFeedback {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a top-level item, truncating `expected` and `obtained`
    pub fn add_feedback(&mut self, item: FeedbackItem) -> &mut Self {
        let item = self.truncated(item);
        self.entries.push(FeedbackEntry::Item(item));
        self
    }

    /// Patch the most recent top-level item, skipping categories after it
    ///
    /// Returns false when there is no item to patch.
    pub fn add_to_last_feedback(&mut self, update: FeedbackUpdate) -> bool {
        let max_length = self.max_length;
        match self.last_item_mut() {
            Some(item) => {
                update.apply(item);
                truncate_item(item, max_length);
                true
            }
            None => {
                tracing::debug!("No feedback item to update");
                false
            }
        }
    }

    /// Append a category; nested items are truncated too
    pub fn add_category(&mut self, mut category: FeedbackCategory) -> &mut Self {
        truncate_entries(&mut category.feedbacks, self.max_length);
        self.entries.push(FeedbackEntry::Category(category));
        self
    }

    /// Patch the last category and append `feedbacks` to it
    pub fn add_to_last_category(
        &mut self,
        update: CategoryUpdate,
        feedbacks: Vec<FeedbackEntry>,
    ) -> bool {
        let max_length = self.max_length;
        match self.last_category_mut() {
            Some(category) => {
                update.apply(category);
                let mut feedbacks = feedbacks;
                truncate_entries(&mut feedbacks, max_length);
                category.feedbacks.extend(feedbacks);
                true
            }
            None => {
                tracing::debug!("No category to update");
                false
            }
        }
    }

    /// Last category anywhere in the top-level list
    pub fn last_category(&self) -> Option<&FeedbackCategory> {
        self.entries.iter().rev().find_map(|entry| match entry {
            FeedbackEntry::Category(category) => Some(category),
            FeedbackEntry::Item(_) => None,
        })
    }

    fn last_category_mut(&mut self) -> Option<&mut FeedbackCategory> {
        self.entries.iter_mut().rev().find_map(|entry| match entry {
            FeedbackEntry::Category(category) => Some(category),
            FeedbackEntry::Item(_) => None,
        })
    }

    fn last_item_mut(&mut self) -> Option<&mut FeedbackItem> {
        self.entries.iter_mut().rev().find_map(|entry| match entry {
            FeedbackEntry::Item(item) => Some(item),
            FeedbackEntry::Category(_) => None,
        })
    }

    fn truncated(&self, mut item: FeedbackItem) -> FeedbackItem {
        truncate_item(&mut item, self.max_length);
        item
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn truncate_item(item: &mut FeedbackItem, max_length: usize) {
    item.expected = truncate_field(&item.expected, max_length);
    item.obtained = truncate_field(&item.obtained, max_length);
}

fn truncate_entries(entries: &mut [FeedbackEntry], max_length: usize) {
    for entry in entries {
        match entry {
            FeedbackEntry::Item(item) => truncate_item(item, max_length),
            FeedbackEntry::Category(category) => {
                truncate_entries(&mut category.feedbacks, max_length)
            }
        }
    }
}
