//! Generation request payload and its validation

use serde::Serialize;
use thiserror::Error;

use crate::selection::Selection;

/// Body of a single `POST /generate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub platform: String,
    pub template: Option<String>,
    pub tone: Option<String>,
    pub word_count: u32,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

/// Input rejected before any network activity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a topic.")]
    MissingTopic,

    #[error("Please select a social media platform.")]
    MissingPlatform,

    #[error("Please enter a topic and select a social media platform.")]
    MissingTopicAndPlatform,
}

/// Form fields that accompany the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOptions {
    pub word_count: u32,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

impl GenerationRequest {
    /// Build a request from the current form state.
    ///
    /// The topic must contain something other than whitespace and a platform
    /// must be selected. Template and tone are forwarded as-is, including when
    /// unset.
    pub fn build(
        topic: &str,
        selection: &Selection,
        options: &PostOptions,
    ) -> Result<Self, ValidationError> {
        let topic = topic.trim();

        let platform = match (topic.is_empty(), selection.platform()) {
            (true, None) => return Err(ValidationError::MissingTopicAndPlatform),
            (true, Some(_)) => return Err(ValidationError::MissingTopic),
            (false, None) => return Err(ValidationError::MissingPlatform),
            (false, Some(platform)) => platform,
        };

        Ok(Self {
            topic: topic.to_string(),
            platform: platform.to_string(),
            template: selection.template().map(str::to_string),
            tone: selection.tone().map(str::to_string),
            word_count: options.word_count,
            include_hashtags: options.include_hashtags,
            include_emojis: options.include_emojis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Category;

    fn options() -> PostOptions {
        PostOptions {
            word_count: 50,
            include_hashtags: true,
            include_emojis: false,
        }
    }

    fn twitter() -> Selection {
        let mut selection = Selection::default();
        selection.select(Category::Platform, "twitter");
        selection
    }

    #[test]
    fn test_build_forwards_optional_fields() {
        let mut selection = twitter();
        selection.select(Category::Tone, "funny");

        let request = GenerationRequest::build("  coffee ", &selection, &options()).unwrap();
        assert_eq!(request.topic, "coffee");
        assert_eq!(request.platform, "twitter");
        assert_eq!(request.template, None);
        assert_eq!(request.tone.as_deref(), Some("funny"));
        assert_eq!(request.word_count, 50);
        assert!(request.include_hashtags);
        assert!(!request.include_emojis);
    }

    #[test]
    fn test_blank_topic_rejected() {
        let selection = twitter();
        assert_eq!(
            GenerationRequest::build("", &selection, &options()),
            Err(ValidationError::MissingTopic)
        );
        assert_eq!(
            GenerationRequest::build(" \t\n", &selection, &options()),
            Err(ValidationError::MissingTopic)
        );
    }

    #[test]
    fn test_missing_platform_rejected() {
        let mut selection = Selection::default();
        selection.select(Category::Template, "promotional");
        selection.select(Category::Tone, "professional");

        assert_eq!(
            GenerationRequest::build("coffee", &selection, &options()),
            Err(ValidationError::MissingPlatform)
        );
        assert_eq!(
            GenerationRequest::build("", &selection, &options()),
            Err(ValidationError::MissingTopicAndPlatform)
        );
    }

    #[test]
    fn test_wire_field_names() {
        let request = GenerationRequest::build("coffee", &twitter(), &options()).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "topic": "coffee",
                "platform": "twitter",
                "template": null,
                "tone": null,
                "wordCount": 50,
                "includeHashtags": true,
                "includeEmojis": false
            })
        );
    }
}
