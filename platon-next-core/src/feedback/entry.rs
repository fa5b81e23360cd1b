use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the platform colours a feedback block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackType::Info => write!(f, "info"),
            FeedbackType::Success => write!(f, "success"),
            FeedbackType::Warning => write!(f, "warning"),
            FeedbackType::Error => write!(f, "error"),
        }
    }
}

/// Single feedback line (e.g. one test case)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackItem {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub expected: String,

    #[serde(default)]
    pub obtained: String,

    #[serde(default)]
    pub arguments: String,

    /// Unfolded by default
    #[serde(default)]
    pub display: bool,

    #[serde(rename = "type", default)]
    pub feedback_type: FeedbackType,
}

impl FeedbackItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }

    pub fn with_obtained(mut self, obtained: impl Into<String>) -> Self {
        self.obtained = obtained.into();
        self
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = arguments.into();
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn with_type(mut self, feedback_type: FeedbackType) -> Self {
        self.feedback_type = feedback_type;
        self
    }
}

/// Foldable group of feedback entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackCategory {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub display: bool,

    #[serde(rename = "type", default)]
    pub feedback_type: FeedbackType,

    pub feedbacks: Vec<FeedbackEntry>,
}

impl FeedbackCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn with_type(mut self, feedback_type: FeedbackType) -> Self {
        self.feedback_type = feedback_type;
        self
    }

    pub fn with_feedbacks(mut self, feedbacks: impl Into<Vec<FeedbackEntry>>) -> Self {
        self.feedbacks = feedbacks.into();
        self
    }
}

/// Top-level element of the feedback list
///
/// Categories are recognised by their `feedbacks` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FeedbackEntry {
    Category(FeedbackCategory),
    Item(FeedbackItem),
}

impl From<FeedbackItem> for FeedbackEntry {
    fn from(item: FeedbackItem) -> Self {
        FeedbackEntry::Item(item)
    }
}

impl From<FeedbackCategory> for FeedbackEntry {
    fn from(category: FeedbackCategory) -> Self {
        FeedbackEntry::Category(category)
    }
}

/// Partial update of the last item; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub expected: Option<String>,
    pub obtained: Option<String>,
    pub arguments: Option<String>,
    pub display: Option<bool>,
    pub feedback_type: Option<FeedbackType>,
}

impl FeedbackUpdate {
    pub(crate) fn apply(self, item: &mut FeedbackItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(expected) = self.expected {
            item.expected = expected;
        }
        if let Some(obtained) = self.obtained {
            item.obtained = obtained;
        }
        if let Some(arguments) = self.arguments {
            item.arguments = arguments;
        }
        if let Some(display) = self.display {
            item.display = display;
        }
        if let Some(feedback_type) = self.feedback_type {
            item.feedback_type = feedback_type;
        }
    }
}

/// Partial update of the last category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub display: Option<bool>,
    pub feedback_type: Option<FeedbackType>,
}

impl CategoryUpdate {
    pub(crate) fn apply(self, category: &mut FeedbackCategory) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(display) = self.display {
            category.display = display;
        }
        if let Some(feedback_type) = self.feedback_type {
            category.feedback_type = feedback_type;
        }
    }
}
