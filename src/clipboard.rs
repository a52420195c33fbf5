//! Copying displayed posts to the system clipboard.
//!
//! Posts are joined in display order with a horizontal-rule separator so the
//! block pastes cleanly into a document or chat. Clipboard access goes through
//! `arboard` (NSPasteboard on macOS, X11/Wayland on Linux, Win32 on Windows).

use thiserror::Error;

/// Separator placed between posts in the copied block
pub const POST_SEPARATOR: &str = "\n\n---\n\n";

/// Clipboard write failures
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Join posts in order with [`POST_SEPARATOR`], trimming the ends of the result.
///
/// An empty slice yields an empty string.
pub fn aggregate<S: AsRef<str>>(posts: &[S]) -> String {
    posts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(POST_SEPARATOR)
        .trim()
        .to_string()
}

/// Place `text` on the system clipboard
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    tracing::debug!("Copied {} chars to clipboard", text.len());
    Ok(())
}

/// Aggregate and copy in one step.
///
/// Returns the number of posts copied. With no posts the clipboard is left
/// untouched and `Ok(0)` is returned.
pub fn copy_posts<S: AsRef<str>>(posts: &[S]) -> Result<usize, ClipboardError> {
    if posts.is_empty() {
        tracing::debug!("Nothing to copy");
        return Ok(0);
    }
    copy_text(&aggregate(posts))?;
    tracing::info!("Copied {} posts to clipboard", posts.len());
    Ok(posts.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_three_posts() {
        assert_eq!(
            aggregate(&["A", "B", "C"]),
            "A\n\n---\n\nB\n\n---\n\nC"
        );
    }

    #[test]
    fn test_aggregate_single_post_has_no_separator() {
        assert_eq!(aggregate(&["Only one"]), "Only one");
    }

    #[test]
    fn test_aggregate_empty() {
        let posts: [&str; 0] = [];
        assert_eq!(aggregate(&posts), "");
    }

    #[test]
    fn test_aggregate_trims_outer_whitespace_only() {
        let posts = vec!["\n  first".to_string(), "second  \n\n".to_string()];
        assert_eq!(aggregate(&posts), "first\n\n---\n\nsecond");

        let inner = vec!["line one\n\nline two".to_string(), "B".to_string()];
        assert_eq!(aggregate(&inner), "line one\n\nline two\n\n---\n\nB");
    }

    #[test]
    fn test_copy_posts_with_nothing_is_noop() {
        let posts: Vec<String> = Vec::new();
        assert_eq!(copy_posts(&posts).unwrap(), 0);
    }
}
