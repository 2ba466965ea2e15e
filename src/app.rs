//! Calculator application
//!
//! Wires keypad events into the state machine and forwards completed
//! calculations to the history store. Persistence failures are logged and
//! otherwise ignored; the UI never shows an error indicator.

use tracing::error;

use crate::calculator::{CalculatorState, Key};
use crate::config::AppConfig;
use crate::storage::HistoryStore;
use crate::ui::{render_keypad, theme, HistoryView};

/// The main calculator application
pub struct CalculatorApp {
    /// Application configuration
    config: AppConfig,
    /// The calculator state machine
    state: CalculatorState,
    /// History persistence
    store: HistoryStore,
    /// Current display text
    display: String,
    /// Secondary history window
    history: HistoryView,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl CalculatorApp {
    /// Create a new calculator application
    pub fn new(config: AppConfig, store: HistoryStore) -> Self {
        Self {
            config,
            state: CalculatorState::new(),
            store,
            display: String::new(),
            history: HistoryView::default(),
            theme_applied: false,
        }
    }

    /// Create eframe options for the main window
    pub fn options(config: &AppConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.window.width, config.window.height])
                .with_min_inner_size([300.0, 420.0])
                .with_title("Calculator with History"),
            ..Default::default()
        }
    }

    /// Handle one keypad event
    fn handle_key(&mut self, key: Key) {
        let outcome = self.state.apply(key);

        if let Some(text) = outcome.display {
            self.display = text;
        }

        if let Some(done) = outcome.completed {
            if let Err(e) = self.store.append(&done.expression, &done.result) {
                error!("Failed to record calculation: {}", e);
            }
        }

        if matches!(key, Key::History) {
            self.refresh_history();
            self.history.open = true;
        }
    }

    /// Re-read the full history from the store
    fn refresh_history(&mut self) {
        match self.store.fetch_all() {
            Ok(records) => self.history.records = records,
            Err(e) => error!("Failed to load history: {}", e),
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(10.0).show(ui, |ui| {
                // Display line, right-aligned like a desk calculator
                egui::Frame::none()
                    .fill(theme::ThemeColors::BG_DISPLAY)
                    .inner_margin(12.0)
                    .rounding(6.0)
                    .show(ui, |ui| {
                        ui.set_min_height(48.0);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.heading(&self.display);
                        });
                    });

                ui.add_space(10.0);

                if let Some(key) = render_keypad(ui) {
                    self.handle_key(key);
                }
            });
        });

        if self.history.open {
            let size = self.config.history_window.clone();
            if self.history.show(ctx, &size) {
                self.refresh_history();
            }
        }
    }
}

/// Run the calculator application (blocking)
pub fn run(config: AppConfig, store: HistoryStore) -> Result<(), eframe::Error> {
    let options = CalculatorApp::options(&config);
    let app = CalculatorApp::new(config, store);
    eframe::run_native(
        "Calculator with History",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
