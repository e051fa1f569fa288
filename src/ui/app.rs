use crate::config::AppConfig;
use crate::export::{self, CsvExporter};
use crate::generator::{compute, TableOutcome};
use crate::models::{Parameters, GOAL_CATALOG};
use crate::ui::table_view;
use crate::ui::themes;
use eframe::egui;
use tracing::error;

const MAX_LOG_ENTRIES: usize = 200;

pub struct ProteinApp {
    config: AppConfig,
    params: Parameters,
    outcome: TableOutcome,

    // Raw field contents, parsed into `params` on every edit
    min_text: String,
    max_text: String,
    rows_text: String,

    log_messages: Vec<LogEntry>,
    status_message: String,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    pub fn color(&self) -> egui::Color32 {
        match self {
            LogLevel::Info => egui::Color32::from_rgb(200, 200, 200),
            LogLevel::Success => egui::Color32::from_rgb(76, 175, 80),
            LogLevel::Error => themes::error_color(),
        }
    }
}

impl ProteinApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            error!("Failed to load config: {}", e);
            AppConfig::default()
        });

        themes::apply_theme(&cc.egui_ctx, &config.theme);

        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let params = Parameters::default();
        Self {
            config,
            outcome: compute(&params),
            min_text: params.min_weight.to_string(),
            max_text: params.max_weight.to_string(),
            rows_text: params.row_count.to_string(),
            params,
            log_messages: Vec::new(),
            status_message: "Prêt".to_string(),
        }
    }

    fn log(&mut self, message: String, level: LogLevel) {
        self.status_message = message.clone();
        self.log_messages.push(LogEntry {
            timestamp: chrono::Local::now(),
            message,
            level,
        });

        if self.log_messages.len() > MAX_LOG_ENTRIES {
            self.log_messages.remove(0);
        }
    }

    fn set_params(&mut self, params: Parameters) {
        if params != self.params {
            self.params = params;
            self.outcome = compute(&self.params);
        }
    }

    /// Rewrites the text fields from the parsed values (fallbacks, clamped rows).
    fn sync_texts(&mut self) {
        self.min_text = self.params.min_weight.to_string();
        self.max_text = self.params.max_weight.to_string();
        self.rows_text = self.params.row_count.to_string();
    }

    fn toggle_goal(&mut self, key: &str) {
        let params = self.params.clone().with_toggled_goal(key);
        self.set_params(params);
    }

    fn reset(&mut self) {
        self.set_params(Parameters::default());
        self.sync_texts();
        self.log("Paramètres réinitialisés".to_string(), LogLevel::Info);
    }

    fn export_csv(&mut self) {
        let dir = self.config.export_dir();
        match export::export_table(&CsvExporter::new(), &self.outcome, &self.params, &dir) {
            Ok(path) => {
                self.log(format!("CSV exporté : {}", path.display()), LogLevel::Success);
            }
            Err(e) => {
                error!("CSV export failed: {}", e);
                self.log(format!("Échec de l’export : {}", e), LogLevel::Error);
            }
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Paramètres");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let valid = self.outcome.is_valid();
                let hint = if valid {
                    "Exporter le tableau en CSV"
                } else {
                    "Corrige les erreurs avant d’exporter"
                };

                let export_btn = ui
                    .add_enabled(valid, egui::Button::new("Export CSV"))
                    .on_hover_text(hint)
                    .on_disabled_hover_text(hint);
                if export_btn.clicked() {
                    self.export_csv();
                }

                if ui.button("Réinitialiser").clicked() {
                    self.reset();
                }
            });
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Poids minimum (kg)");
                let field = ui.add(egui::TextEdit::singleline(&mut self.min_text).desired_width(100.0));
                if field.changed() {
                    let params = self.params.clone().with_min_weight_text(&self.min_text);
                    self.set_params(params);
                }
                if field.lost_focus() {
                    self.sync_texts();
                }
            });

            ui.vertical(|ui| {
                ui.label("Poids maximum (kg)");
                let field = ui.add(egui::TextEdit::singleline(&mut self.max_text).desired_width(100.0));
                if field.changed() {
                    let params = self.params.clone().with_max_weight_text(&self.max_text);
                    self.set_params(params);
                }
                if field.lost_focus() {
                    self.sync_texts();
                }
            });

            ui.vertical(|ui| {
                ui.label("Nombre de lignes (2–50)");
                let field = ui.add(egui::TextEdit::singleline(&mut self.rows_text).desired_width(100.0));
                if field.changed() {
                    let params = self.params.clone().with_row_count_text(&self.rows_text);
                    self.set_params(params);
                }
                if field.lost_focus() {
                    self.sync_texts();
                }
            });
        });
    }

    fn render_goals(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Objectifs").strong());

        let accent = themes::accent(&self.config.theme);
        let mut toggled = None;

        ui.horizontal_wrapped(|ui| {
            for goal in &GOAL_CATALOG {
                let on = self.params.selection.contains(goal.key);
                let text = egui::RichText::new(goal.chip_label());
                let text = if on { text.color(accent) } else { text };

                if ui.selectable_label(on, text).clicked() {
                    toggled = Some(goal.key);
                }
            }
        });

        if let Some(key) = toggled {
            self.toggle_goal(key);
        }
    }

    fn render_violations(&self, ui: &mut egui::Ui) {
        if self.outcome.violations.is_empty() {
            return;
        }

        ui.add_space(6.0);
        ui.group(|ui| {
            ui.colored_label(themes::error_color(), egui::RichText::new("À corriger :").strong());
            for violation in &self.outcome.violations {
                ui.colored_label(themes::error_color(), format!("• {}", violation));
            }
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let color = self
                .log_messages
                .last()
                .map(|entry| entry.level.color())
                .unwrap_or(LogLevel::Info.color());
            ui.colored_label(color, "●");
            ui.label(self.status_message.as_str());
        });

        if self.log_messages.is_empty() {
            return;
        }

        egui::CollapsingHeader::new("Journal")
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(120.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &self.log_messages {
                            ui.colored_label(
                                entry.level.color(),
                                format!("[{}] {}", entry.timestamp.format("%H:%M:%S"), entry.message),
                            );
                        }
                    });
            });
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (export, reset) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::E),
                i.modifiers.ctrl && i.key_pressed(egui::Key::R),
            )
        });

        if export && self.outcome.is_valid() {
            self.export_csv();
        }
        if reset {
            self.reset();
        }
    }
}

impl eframe::App for ProteinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_status_bar(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::top("parameters").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label("Génère dynamiquement un tableau de besoins journaliers en protéines selon le poids et l’objectif.");
            ui.add_space(4.0);
            self.render_toolbar(ui);
            ui.separator();
            self.render_form(ui);
            ui.add_space(6.0);
            self.render_goals(ui);
            self.render_violations(ui);
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.outcome.is_valid() {
                table_view::render(ui, &self.outcome.table);
            } else {
                ui.heading("Tableau généré");
                ui.weak("Le tableau s’affichera dès que les paramètres seront valides.");
            }
        });
    }
}
