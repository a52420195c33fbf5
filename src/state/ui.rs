//! UI-related application state

use std::time::{Duration, Instant};

use crate::ui::theme::Theme;

/// How long an alert stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Application tabs representing the main navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Composer: form, generate button, generated posts
    #[default]
    Composer,
    /// Settings: theme, service endpoint, composer defaults
    Settings,
}

/// A transient alert
#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// UI-related state
pub struct UiState {
    /// Current theme
    pub current_theme: Theme,
    /// Currently selected tab
    pub active_tab: Tab,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
    toast: Option<Toast>,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            active_tab: Tab::default(),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
            toast: None,
        }
    }

    /// Show an alert, replacing any alert already on screen
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.show_toast_for(message, TOAST_DURATION);
    }

    fn show_toast_for(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + duration,
        });
    }

    /// Current alert text and time left, dropping it once expired
    pub fn active_toast(&mut self) -> Option<(&str, Duration)> {
        let now = Instant::now();
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
        self.toast
            .as_ref()
            .map(|t| (t.message.as_str(), t.expires_at - now))
    }
}
