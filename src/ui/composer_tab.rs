//! Composer tab UI rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::ScribeApp;
use crate::selection::Category;
use crate::state::OutputContent;
use crate::ui::components::{choice_group, section_frame};
use crate::ui::theme::Theme;

/// Render the composer tab content
pub fn render_composer_tab(app: &mut ScribeApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    egui::ScrollArea::vertical()
        .id_salt("composer_scroll")
        .show(ui, |ui| {
            section_frame(&theme, ui, "Topic", |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut app.form.topic)
                        .hint_text("What should the post be about?")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.add_space(12.0);

            for &category in Category::all() {
                section_frame(&theme, ui, category.name(), |ui| {
                    choice_group(ui, &theme, &mut app.form.selection, category);
                });
                ui.add_space(12.0);
            }

            section_frame(&theme, ui, "Options", |ui| {
                render_options(app, ui, &theme);
            });

            ui.add_space(16.0);
            render_generate_button(app, ui, &theme);

            if app.output.is_visible() {
                ui.add_space(16.0);
                render_output(app, ui, &theme);
            }
        });
}

fn render_options(app: &mut ScribeApp, ui: &mut egui::Ui, theme: &Theme) {
    let composer = &app.config.composer;
    let (min_words, max_words) = (composer.min_word_count, composer.max_word_count);
    let max_posts = composer.max_post_count.max(1);

    ui.horizontal(|ui| {
        ui.label(RichText::new("Length:").color(theme.text_muted));
        ui.add(egui::Slider::new(&mut app.form.word_count, min_words..=max_words).suffix(" words"));
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.checkbox(&mut app.form.include_hashtags, "Include hashtags");
        ui.add_space(16.0);
        ui.checkbox(&mut app.form.include_emojis, "Include emojis");
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Posts to generate:").color(theme.text_muted));
        ui.add(egui::DragValue::new(&mut app.form.post_count).range(1..=max_posts));
    });
}

fn render_generate_button(app: &mut ScribeApp, ui: &mut egui::Ui, theme: &Theme) {
    let busy = app.batch.is_busy();

    ui.horizontal(|ui| {
        let label = if busy { "Generating..." } else { "Generate Post" };
        let button = egui::Button::new(RichText::new(label).color(theme.on_accent).strong())
            .fill(theme.accent)
            .corner_radius(8.0)
            .min_size(Vec2::new(180.0, 40.0));

        if ui.add_enabled(!busy, button).clicked() {
            app.start_batch();
        }

        if busy {
            ui.add_space(8.0);
            ui.spinner();
        }
    });

    if busy && app.batch.progress.total > 1 {
        ui.add_space(8.0);
        let progress = &app.batch.progress;
        ui.add(
            egui::ProgressBar::new(progress.fraction())
                .text(progress.label())
                .fill(theme.accent_muted),
        );
    }
}

fn render_output(app: &mut ScribeApp, ui: &mut egui::Ui, theme: &Theme) {
    let mut copy_clicked = false;

    section_frame(theme, ui, "Generated Posts", |ui| match app.output.content() {
        OutputContent::Posts(posts) => {
            for post in posts {
                egui::Frame::new()
                    .fill(theme.bg_light)
                    .corner_radius(10.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        // Label renders text literally, no markup interpretation
                        ui.add(
                            egui::Label::new(RichText::new(post).color(theme.text_primary))
                                .wrap()
                                .selectable(true),
                        );
                    });
                ui.add_space(8.0);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(!posts.is_empty(), egui::Button::new("Copy All")).clicked() {
                    copy_clicked = true;
                }
            });
        }
        OutputContent::Error(message) => {
            ui.label(RichText::new(message).color(theme.error));
        }
        OutputContent::Hidden => {}
    });

    if copy_clicked {
        app.copy_all_posts();
    }
}
