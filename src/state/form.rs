//! Composer form state

use crate::config::ComposerConfig;
use crate::request::PostOptions;
use crate::selection::Selection;

/// Everything the user has typed or picked in the composer
#[derive(Debug, Clone)]
pub struct FormState {
    pub topic: String,
    pub selection: Selection,
    pub word_count: u32,
    pub include_hashtags: bool,
    pub include_emojis: bool,
    /// How many posts the next batch generates
    pub post_count: u32,
}

impl FormState {
    /// Create a form pre-filled from the composer settings
    pub fn from_config(config: &ComposerConfig) -> Self {
        Self {
            topic: String::new(),
            selection: Selection::default(),
            word_count: config.clamp_word_count(config.word_count),
            include_hashtags: config.include_hashtags,
            include_emojis: config.include_emojis,
            post_count: config.clamp_post_count(config.post_count),
        }
    }

    /// Per-post options for the request builder
    pub fn options(&self) -> PostOptions {
        PostOptions {
            word_count: self.word_count,
            include_hashtags: self.include_hashtags,
            include_emojis: self.include_emojis,
        }
    }
}
