// Filter selection model
// Category / member / location selections from the filter sidebar

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Three independent selection sets. An empty set places no restriction on
/// its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub members: BTreeSet<String>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations.extend(locations.into_iter().map(Into::into));
        self
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, key: &str) {
        toggle(&mut self.categories, key);
    }

    pub fn toggle_member(&mut self, member: &str) {
        toggle(&mut self.members, member);
    }

    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.locations, location);
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.members.clear();
        self.locations.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    /// Total number of selected keys across all dimensions.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.members.len() + self.locations.len()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
