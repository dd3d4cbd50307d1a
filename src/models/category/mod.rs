//! Category model and registry.
//!
//! Categories group events by operational area (health assessments, worker
//! check-ups, ...). The scheduling engine only needs key equality and
//! existence checks; label, color and icon are display metadata carried
//! along for the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CalendarError, Result};

/// A category events can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key referenced by `Event::category`
    pub key: String,
    /// Display name
    pub label: String,
    /// Presentation color token (hex code or style class)
    #[serde(default)]
    pub color: String,
    /// Optional icon name
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
            icon: None,
        }
    }

    pub fn with_icon(
        key: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::new(key, label, color)
        }
    }

    /// Validate the category data.
    pub fn validate(&self) -> std::result::Result<(), CategoryValidationError> {
        if self.key.trim().is_empty() {
            return Err(CategoryValidationError::EmptyKey);
        }

        let label = self.label.trim();
        if label.is_empty() {
            return Err(CategoryValidationError::EmptyLabel);
        }
        if label.chars().count() > 50 {
            return Err(CategoryValidationError::LabelTooLong);
        }

        Ok(())
    }
}

/// Validation errors for Category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyKey,
    EmptyLabel,
    LabelTooLong,
    DuplicateKey(String),
}

impl std::fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "Category key cannot be empty"),
            Self::EmptyLabel => write!(f, "Category label cannot be empty"),
            Self::LabelTooLong => write!(f, "Category label must be 50 characters or less"),
            Self::DuplicateKey(key) => write!(f, "Category '{}' is defined more than once", key),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Externally supplied mapping from category key to display metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: BTreeMap<String, Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting invalid or duplicate entries.
    pub fn from_categories(
        categories: impl IntoIterator<Item = Category>,
    ) -> std::result::Result<Self, CategoryValidationError> {
        let mut registry = Self::new();
        for category in categories {
            category.validate()?;
            if registry.contains(&category.key) {
                return Err(CategoryValidationError::DuplicateKey(category.key));
            }
            registry.categories.insert(category.key.clone(), category);
        }
        Ok(registry)
    }

    /// Insert or replace a category.
    pub fn insert(&mut self, category: Category) -> std::result::Result<(), CategoryValidationError> {
        category.validate()?;
        self.categories.insert(category.key.clone(), category);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    /// Look up a category, failing with `UnknownCategory` when absent.
    pub fn require(&self, key: &str) -> Result<&Category> {
        self.get(key)
            .ok_or_else(|| CalendarError::UnknownCategory(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Categories used by the agricultural health operations schedule.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::with_icon("health-assessment", "Health Assessments", "bg-emerald-500", "Activity"),
        Category::with_icon("worker-checkup", "Worker Check-ups", "bg-blue-500", "Users"),
        Category::with_icon("crop-inspection", "Crop Inspections", "bg-green-500", "Leaf"),
        Category::with_icon(
            "equipment-maintenance",
            "Equipment Maintenance",
            "bg-orange-500",
            "Settings",
        ),
    ]
}

/// Registry holding `default_categories()`.
pub fn default_registry() -> CategoryRegistry {
    let mut registry = CategoryRegistry::new();
    for category in default_categories() {
        registry.categories.insert(category.key.clone(), category);
    }
    registry
}
