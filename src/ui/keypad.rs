//! Keypad grid rendering
//!
//! A fixed grid of labeled buttons. Each button's label is both its display
//! text and its event identifier; clicking one emits the classified `Key`.

use egui::RichText;

use crate::calculator::keys::Key;
use crate::ui::theme::ThemeColors;

/// Keypad labels in grid order, four per row, History spanning the last row
pub const KEYPAD_LABELS: [&str; 17] = [
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "C", "0", "=", "+", //
    "History",
];

const COLUMNS: usize = 4;

/// Render the keypad grid. Returns the key clicked this frame, if any.
pub fn render_keypad(ui: &mut egui::Ui) -> Option<Key> {
    let mut clicked = None;

    let spacing = ui.spacing().item_spacing.x;
    let button_width = (ui.available_width() - spacing * (COLUMNS as f32 - 1.0)) / COLUMNS as f32;
    let button_size = egui::vec2(button_width, 48.0);

    let (grid, last_row) = KEYPAD_LABELS.split_at(COLUMNS * 4);

    for row in grid.chunks(COLUMNS) {
        ui.horizontal(|ui| {
            for &label in row {
                if keypad_button(ui, label, button_size) {
                    clicked = Key::from_label(label);
                }
            }
        });
    }

    // History spans the full keypad width.
    let wide = egui::vec2(ui.available_width(), 40.0);
    for &label in last_row {
        if keypad_button(ui, label, wide) {
            clicked = Key::from_label(label);
        }
    }

    clicked
}

/// Render one button, colored by what its label classifies to
fn keypad_button(ui: &mut egui::Ui, label: &str, size: egui::Vec2) -> bool {
    let (fill, text_color) = match Key::from_label(label) {
        Some(Key::Operator(_)) => (ThemeColors::ACCENT_OPERATOR, egui::Color32::WHITE),
        Some(Key::Equals) => (ThemeColors::ACCENT_EQUALS, egui::Color32::WHITE),
        Some(Key::Clear) => (ThemeColors::ACCENT_CLEAR, egui::Color32::WHITE),
        _ => (ThemeColors::BG_BUTTON, ThemeColors::TEXT_PRIMARY),
    };

    ui.add(
        egui::Button::new(RichText::new(label).color(text_color))
            .fill(fill)
            .min_size(size),
    )
    .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_label_classifies() {
        for label in KEYPAD_LABELS {
            assert!(
                Key::from_label(label).is_some(),
                "label {:?} must map to a key",
                label
            );
        }
    }

    #[test]
    fn test_keypad_has_all_digits_once() {
        for d in 0..=9u8 {
            let label = d.to_string();
            let count = KEYPAD_LABELS.iter().filter(|&&l| l == label).count();
            assert_eq!(count, 1, "digit {} must appear exactly once", d);
        }
    }
}
