use std::sync::Arc;

use eframe::egui;

use crate::batch::BatchPhase;
use crate::client::GenerationClient;
use crate::clipboard;
use crate::config::Config;
use crate::state::{BatchState, FormState, OutputState, StateEvent, Tab, UiState};
use crate::ui::components::{render_about_dialog, render_tab, render_toast};
use crate::ui::{render_composer_tab, render_settings_tab};

/// Main application state
pub struct ScribeApp {
    /// Application configuration
    pub config: Config,
    /// Status message for the status bar
    pub status_message: String,
    /// Generation service client
    pub client: Arc<GenerationClient>,

    /// Composer form
    pub form: FormState,
    /// Batch run state and task
    pub batch: BatchState,
    /// Displayed posts
    pub output: OutputState,
    /// UI-related state
    pub ui: UiState,
}

impl ScribeApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        let client = Arc::new(GenerationClient::new(&config.service)?);
        tracing::info!("Generation endpoint: {}", client.endpoint());

        let form = FormState::from_config(&config.composer);
        let ui = UiState::new(config.appearance.theme.theme());

        Ok(Self {
            config,
            status_message: "Ready".to_string(),
            client,
            form,
            batch: BatchState::default(),
            output: OutputState::default(),
            ui,
        })
    }

    /// Start a batch from the current form
    pub fn start_batch(&mut self) {
        let events = self.batch.start(&self.form, self.client.clone());
        self.handle_events(events);
    }

    /// Copy every displayed post to the clipboard
    pub fn copy_all_posts(&mut self) {
        match clipboard::copy_posts(self.output.posts()) {
            Ok(0) => {}
            Ok(_) => self.ui.show_toast("All posts copied to clipboard!"),
            Err(e) => {
                tracing::error!("Failed to copy posts: {}", e);
                self.ui.show_toast(format!("Copy failed: {}", e));
            }
        }
    }

    /// Rebuild the generation client after the service settings change
    pub fn reconnect(&mut self) {
        match GenerationClient::new(&self.config.service) {
            Ok(client) => {
                tracing::info!("Generation endpoint changed to {}", client.endpoint());
                self.client = Arc::new(client);
                self.status_message = format!("Using {}", self.config.service.endpoint);
                self.save_config();
            }
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {}", e);
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Save configuration to disk
    pub fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::Alert(msg) => self.ui.show_toast(msg),
                StateEvent::ClearOutput => self.output.clear(),
                StateEvent::ShowPosts(posts) => self.output.render(posts),
                StateEvent::ShowError(msg) => self.output.show_error(msg),
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
            }
        }
    }
}

impl eframe::App for ScribeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        let events = self.batch.poll(ctx);
        self.handle_events(events);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                        ui.close();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.batch.is_busy() {
                    ui.spinner();
                }
                if self.batch.phase() == BatchPhase::Failed {
                    let label = ui.label(
                        egui::RichText::new(&self.status_message)
                            .color(self.ui.current_theme.error),
                    );
                    if let Some(cause) = &self.batch.error {
                        label.on_hover_text(cause);
                    }
                } else {
                    ui.label(&self.status_message);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_tab(self, ui, Tab::Composer, "Composer");
                render_tab(self, ui, Tab::Settings, "Settings");
            });

            ui.separator();

            match self.ui.active_tab {
                Tab::Composer => render_composer_tab(self, ui),
                Tab::Settings => render_settings_tab(self, ui),
            }
        });

        render_about_dialog(self, ctx);
        render_toast(self, ctx);
    }
}
