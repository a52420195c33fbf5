//! Single-select choice groups for the composer.
//!
//! The composer offers three independent button groups: template, platform and
//! tone. Each group holds at most one active value at a time. Values are opaque
//! identifiers; the preset catalogues below are what the UI offers, but any
//! string is accepted so callers (CLI, config) can pass ids straight through.

use serde::Serialize;

/// A choice group in the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Template,
    Platform,
    Tone,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Category] {
        &[Category::Template, Category::Platform, Category::Tone]
    }

    /// Get display name for the category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Template => "Template",
            Category::Platform => "Platform",
            Category::Tone => "Tone",
        }
    }

    /// Preset options offered for this category
    pub fn presets(&self) -> &'static [Preset] {
        match self {
            Category::Template => TEMPLATES,
            Category::Platform => PLATFORMS,
            Category::Tone => TONES,
        }
    }
}

/// A preset option: wire id plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
}

const fn preset(id: &'static str, label: &'static str) -> Preset {
    Preset { id, label }
}

/// Post templates understood by the generation service
pub const TEMPLATES: &[Preset] = &[
    preset("suggested", "Suggested"),
    preset("rewrite", "Rewrite"),
    preset("edit", "Edit"),
    preset("summarize", "Summarize"),
    preset("promotional", "Promotional"),
    preset("company-related", "Company Related"),
    preset("explain", "Explain"),
];

/// Target platforms
pub const PLATFORMS: &[Preset] = &[
    preset("instagram", "Instagram"),
    preset("twitter", "X / Twitter"),
    preset("linkedin", "LinkedIn"),
    preset("facebook", "Facebook"),
    preset("pinterest", "Pinterest"),
    preset("youtube", "YouTube"),
    preset("google-business", "Google Business"),
    preset("ad", "Ad Copy"),
];

/// Tones of voice
pub const TONES: &[Preset] = &[
    preset("professional", "Professional"),
    preset("casual", "Casual"),
    preset("funny", "Funny"),
    preset("inspirational", "Inspirational"),
    preset("informative", "Informative"),
    preset("persuasive", "Persuasive"),
];

/// Look up the display label for an id, falling back to the id itself
pub fn label_for(category: Category, id: &str) -> String {
    category
        .presets()
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.label.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// The user's current template/platform/tone choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    template: Option<String>,
    platform: Option<String>,
    tone: Option<String>,
}

impl Selection {
    /// Make `value` the active choice in `category`, replacing any previous one
    pub fn select(&mut self, category: Category, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("Selected {} = {}", category.name(), value);
        *self.slot_mut(category) = Some(value);
    }

    /// Clear the active choice in `category`
    pub fn clear(&mut self, category: Category) {
        *self.slot_mut(category) = None;
    }

    /// Active value in `category`, if any
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Template => self.template.as_deref(),
            Category::Platform => self.platform.as_deref(),
            Category::Tone => self.tone.as_deref(),
        }
    }

    /// Check whether `value` is the active choice in `category`
    pub fn is_selected(&self, category: Category, value: &str) -> bool {
        self.get(category) == Some(value)
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn tone(&self) -> Option<&str> {
        self.tone.as_deref()
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Template => &mut self.template,
            Category::Platform => &mut self.platform,
            Category::Tone => &mut self.tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = Selection::default();
        for &category in Category::all() {
            assert_eq!(selection.get(category), None);
        }
    }

    #[test]
    fn test_select_replaces_previous_value() {
        let mut selection = Selection::default();
        selection.select(Category::Platform, "instagram");
        selection.select(Category::Platform, "twitter");

        assert_eq!(selection.platform(), Some("twitter"));
        assert!(selection.is_selected(Category::Platform, "twitter"));
        assert!(!selection.is_selected(Category::Platform, "instagram"));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut selection = Selection::default();
        selection.select(Category::Platform, "linkedin");
        selection.select(Category::Template, "promotional");
        selection.select(Category::Tone, "funny");
        selection.select(Category::Tone, "casual");

        assert_eq!(selection.platform(), Some("linkedin"));
        assert_eq!(selection.template(), Some("promotional"));
        assert_eq!(selection.tone(), Some("casual"));
    }

    #[test]
    fn test_unknown_values_are_accepted() {
        let mut selection = Selection::default();
        selection.select(Category::Tone, "sarcastic");
        assert_eq!(selection.tone(), Some("sarcastic"));
        assert_eq!(label_for(Category::Tone, "sarcastic"), "sarcastic");
    }

    #[test]
    fn test_clear_only_touches_one_category() {
        let mut selection = Selection::default();
        selection.select(Category::Platform, "youtube");
        selection.select(Category::Tone, "informative");
        selection.clear(Category::Tone);

        assert_eq!(selection.tone(), None);
        assert_eq!(selection.platform(), Some("youtube"));
    }

    #[test]
    fn test_preset_labels() {
        assert_eq!(label_for(Category::Platform, "google-business"), "Google Business");
        assert_eq!(label_for(Category::Template, "company-related"), "Company Related");
        assert_eq!(PLATFORMS.len(), 8);
    }
}
