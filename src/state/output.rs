//! Output panel state

/// What the output container currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputContent {
    /// Container hidden
    #[default]
    Hidden,
    /// One element per generated post, in request order
    Posts(Vec<String>),
    /// A single error message in place of posts
    Error(String),
}

/// Displayed output
#[derive(Debug, Default)]
pub struct OutputState {
    content: OutputContent,
}

impl OutputState {
    /// Replace whatever is displayed with `posts`
    pub fn render(&mut self, posts: Vec<String>) {
        self.content = OutputContent::Posts(posts);
    }

    /// Replace whatever is displayed with a single error message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.content = OutputContent::Error(message.into());
    }

    /// Hide the container and drop its contents
    pub fn clear(&mut self) {
        self.content = OutputContent::Hidden;
    }

    pub fn content(&self) -> &OutputContent {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.content != OutputContent::Hidden
    }

    /// Posts currently on screen; empty when hidden or showing an error
    pub fn posts(&self) -> &[String] {
        match &self.content {
            OutputContent::Posts(posts) => posts,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let output = OutputState::default();
        assert!(!output.is_visible());
        assert!(output.posts().is_empty());
    }

    #[test]
    fn test_render_replaces_previous_posts() {
        let mut output = OutputState::default();
        output.render(vec!["old 1".into(), "old 2".into(), "old 3".into()]);
        output.render(vec!["new".into()]);

        assert_eq!(output.posts(), ["new".to_string()]);
    }

    #[test]
    fn test_markup_is_kept_literal() {
        let mut output = OutputState::default();
        output.render(vec!["<b>bold</b> & **stars**".into()]);
        assert_eq!(output.posts()[0], "<b>bold</b> & **stars**");
    }

    #[test]
    fn test_error_hides_posts() {
        let mut output = OutputState::default();
        output.render(vec!["Post A".into()]);
        output.show_error("Error: nope");

        assert!(output.is_visible());
        assert!(output.posts().is_empty());
        assert_eq!(output.content(), &OutputContent::Error("Error: nope".into()));
    }

    #[test]
    fn test_clear() {
        let mut output = OutputState::default();
        output.render(vec!["Post A".into()]);
        output.clear();
        assert!(!output.is_visible());
    }
}
