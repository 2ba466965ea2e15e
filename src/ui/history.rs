//! History window rendering
//!
//! A read-only scrollable list of past calculations, most recent first. The
//! backing records are re-fetched by the app every time the window is opened
//! or refreshed; this view never caches across openings.

use egui::RichText;

use crate::config::WindowSettings;
use crate::storage::CalculationRecord;
use crate::ui::theme::ThemeColors;

/// State of the secondary history window
#[derive(Default)]
pub struct HistoryView {
    /// Whether the window is currently shown
    pub open: bool,
    /// Records to display, already ordered most recent first
    pub records: Vec<CalculationRecord>,
}

impl HistoryView {
    /// Render the window. Returns true when the user asked for a refresh.
    pub fn show(&mut self, ctx: &egui::Context, size: &WindowSettings) -> bool {
        let mut refresh = false;
        let mut open = self.open;

        egui::Window::new("Calculation History")
            .open(&mut open)
            .default_size([size.width, size.height])
            .resizable(true)
            .show(ctx, |ui| {
                if ui.button("Refresh").clicked() {
                    refresh = true;
                }
                ui.separator();

                if self.records.is_empty() {
                    ui.label(RichText::new("No calculations yet").color(ThemeColors::TEXT_MUTED));
                    return;
                }

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for record in &self.records {
                            ui.label(RichText::new(format_line(record)).monospace());
                        }
                    });
            });

        self.open = open;
        refresh
    }
}

/// Format one history row the way the list displays it
pub fn format_line(record: &CalculationRecord) -> String {
    format!(
        "{} -> {} = {}",
        record.timestamp, record.expression, record.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let record = CalculationRecord {
            id: 1,
            expression: "7.0 + 3.0".to_string(),
            result: "10.0".to_string(),
            timestamp: "2026-08-25 12:00:00".to_string(),
        };
        assert_eq!(format_line(&record), "2026-08-25 12:00:00 -> 7.0 + 3.0 = 10.0");
    }
}
