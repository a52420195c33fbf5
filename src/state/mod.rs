//! Application state modules
//!
//! Each state struct owns its related fields and poll methods. Poll methods
//! report back to ScribeApp through [`StateEvent`]s instead of reaching into
//! sibling state.

mod batch;
mod form;
mod output;
mod ui;

pub use batch::BatchState;
pub use form::FormState;
pub use output::{OutputContent, OutputState};
pub use ui::{Tab, UiState};

/// Events that state poll methods can return.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Show a transient alert
    Alert(String),

    /// Hide the output container and drop displayed posts
    ClearOutput,

    /// Replace the output with these posts
    ShowPosts(Vec<String>),

    /// Replace the output with a single error message
    ShowError(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
