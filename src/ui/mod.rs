//! UI modules for Scribe
//!
//! Rendering code, organized by tab.

pub mod components;
mod composer_tab;
mod settings_tab;
pub mod theme;

pub use composer_tab::render_composer_tab;
pub use settings_tab::render_settings_tab;
