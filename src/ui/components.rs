//! Shared UI components for Scribe

use eframe::egui::{self, CornerRadius, RichText, Vec2};

use crate::app::ScribeApp;
use crate::selection::{Category, Selection};
use crate::state::Tab;
use crate::ui::theme::{Theme, platform_color};

/// Render a tab button
pub fn render_tab(app: &mut ScribeApp, ui: &mut egui::Ui, tab: Tab, label: &str) {
    let theme = &app.ui.current_theme;
    let is_active = app.ui.active_tab == tab;

    let (bg, text_color) = if is_active {
        (theme.bg_medium, theme.accent)
    } else {
        (egui::Color32::TRANSPARENT, theme.text_secondary)
    };

    let button = egui::Button::new(RichText::new(label).color(text_color))
        .fill(bg)
        .corner_radius(CornerRadius {
            nw: 6,
            ne: 6,
            sw: 0,
            se: 0,
        })
        .min_size(Vec2::new(80.0, 32.0));

    if ui.add(button).clicked() {
        app.ui.active_tab = tab;
    }
}

/// Render a titled section frame
pub fn section_frame<R>(
    theme: &Theme,
    ui: &mut egui::Ui,
    title: &str,
    content: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8.0)
        .inner_margin(16.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(theme.accent).size(13.0).strong());
            ui.add_space(12.0);
            content(ui)
        })
        .inner
}

/// Render a single-select button group for one category.
///
/// Clicking a button makes it the only active value in its group; right-clicking
/// the active button clears the group. The selected platform button takes the
/// platform's own colour, other groups use the theme accent.
pub fn choice_group(ui: &mut egui::Ui, theme: &Theme, selection: &mut Selection, category: Category) {
    ui.horizontal_wrapped(|ui| {
        for preset in category.presets() {
            let selected = selection.is_selected(category, preset.id);
            let (fill, text_color) = match (selected, category) {
                (true, Category::Platform) => (platform_color(preset.id), egui::Color32::WHITE),
                (true, _) => (theme.accent, theme.on_accent),
                (false, _) => (theme.bg_light, theme.text_secondary),
            };

            let button = egui::Button::new(RichText::new(preset.label).color(text_color))
                .fill(fill)
                .corner_radius(6.0)
                .min_size(Vec2::new(0.0, 28.0));

            let response = ui.add(button);
            if response.clicked() {
                selection.select(category, preset.id);
            } else if selected && response.secondary_clicked() {
                selection.clear(category);
            }
        }
    });
}

/// Render the transient alert, if one is active
pub fn render_toast(app: &mut ScribeApp, ctx: &egui::Context) {
    let theme = app.ui.current_theme.clone();
    let Some((message, remaining)) = app.ui.active_toast() else {
        return;
    };

    egui::Area::new(egui::Id::new("toast"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 48.0])
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.accent_muted)
                .corner_radius(8.0)
                .inner_margin(egui::vec2(16.0, 10.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(message).color(theme.text_primary).strong());
                });
        });

    // Wake up again to dismiss it
    ctx.request_repaint_after(remaining);
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut ScribeApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();
    let endpoint = app.client.endpoint().to_string();

    egui::Window::new("About Scribe")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 220.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(RichText::new("Scribe").size(24.0).strong().color(theme.accent));

                ui.add_space(4.0);
                ui.label(
                    RichText::new("Social Post Composer")
                        .size(14.0)
                        .color(theme.text_secondary),
                );

                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(RichText::new("Generation service").color(theme.text_secondary));
                ui.label(RichText::new(endpoint).size(11.0).color(theme.text_muted));

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });
}
