//! Settings tab UI rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::ScribeApp;
use crate::ui::components::section_frame;
use crate::ui::theme::ThemePreset;

/// Render the settings tab
pub fn render_settings_tab(app: &mut ScribeApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .show(ui, |ui| {
            ui.label(
                RichText::new("Settings")
                    .color(theme.text_primary)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(16.0);

            section_frame(&theme, ui, "Appearance", |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Theme:").color(theme.text_muted));

                    let current_name = app.config.appearance.theme.name();
                    egui::ComboBox::from_id_salt("theme_select")
                        .selected_text(current_name)
                        .show_ui(ui, |ui| {
                            for preset in ThemePreset::all() {
                                if ui
                                    .selectable_label(app.config.appearance.theme == *preset, preset.name())
                                    .clicked()
                                {
                                    app.config.appearance.theme = *preset;
                                    app.ui.current_theme = preset.theme();
                                    app.ui.theme_dirty = true;
                                    app.save_config();
                                }
                            }
                        });
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Preview:").color(theme.text_muted));
                    ui.add_space(8.0);

                    let swatch_size = Vec2::new(24.0, 24.0);
                    for color in [theme.bg_dark, theme.accent, theme.success, theme.error] {
                        let (rect, _) = ui.allocate_exact_size(swatch_size, egui::Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, color);
                        ui.add_space(4.0);
                    }
                });
            });

            ui.add_space(12.0);

            section_frame(&theme, ui, "Generation Service", |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Endpoint:").color(theme.text_muted));
                    ui.add(
                        egui::TextEdit::singleline(&mut app.config.service.endpoint)
                            .desired_width(320.0),
                    );
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let mut has_timeout = app.config.service.timeout_secs.is_some();
                    if ui.checkbox(&mut has_timeout, "Request timeout").changed() {
                        app.config.service.timeout_secs = has_timeout.then_some(60);
                    }
                    if let Some(secs) = app.config.service.timeout_secs.as_mut() {
                        ui.add(egui::DragValue::new(secs).range(1..=600).suffix(" s"));
                    }
                });
                ui.label(
                    RichText::new("  Without a timeout a stalled request keeps the batch running")
                        .color(theme.text_muted)
                        .size(11.0),
                );

                ui.add_space(8.0);
                if ui.button("Apply").clicked() {
                    app.reconnect();
                }
            });

            ui.add_space(12.0);

            section_frame(&theme, ui, "Composer Defaults", |ui| {
                let composer = &mut app.config.composer;
                let mut changed = false;

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Default length:").color(theme.text_muted));
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut composer.word_count)
                                .range(composer.min_word_count..=composer.max_word_count)
                                .suffix(" words"),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Default posts per batch:").color(theme.text_muted));
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut composer.post_count)
                                .range(1..=composer.max_post_count.max(1)),
                        )
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut composer.include_hashtags, "Include hashtags by default")
                    .changed();
                changed |= ui
                    .checkbox(&mut composer.include_emojis, "Include emojis by default")
                    .changed();

                if changed {
                    app.save_config();
                }
            });
        });
}
