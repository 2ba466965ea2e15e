//! Calculator theme and styling

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Light calculator color palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_WINDOW: Color32 = Color32::from_rgb(236, 236, 240);
    pub const BG_DISPLAY: Color32 = Color32::WHITE;
    pub const BG_BUTTON: Color32 = Color32::from_rgb(240, 240, 240);
    pub const BG_BUTTON_HOVER: Color32 = Color32::from_rgb(225, 225, 230);

    // Accent colors
    pub const ACCENT_OPERATOR: Color32 = Color32::from_rgb(88, 166, 255);
    pub const ACCENT_EQUALS: Color32 = Color32::from_rgb(46, 204, 113);
    pub const ACCENT_CLEAR: Color32 = Color32::from_rgb(231, 76, 60);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 30, 35);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 130);

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(200, 200, 208);
}

/// Apply the calculator theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::light();

    visuals.window_fill = ThemeColors::BG_WINDOW;
    visuals.panel_fill = ThemeColors::BG_WINDOW;
    visuals.extreme_bg_color = ThemeColors::BG_DISPLAY;

    visuals.widgets.inactive.bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.weak_bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_fill = ThemeColors::BG_BUTTON_HOVER;
    visuals.widgets.hovered.weak_bg_fill = ThemeColors::BG_BUTTON_HOVER;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = ThemeColors::ACCENT_OPERATOR;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    // Spacing
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(10.0);

    // Large monospace display, bold-ish buttons
    style.text_styles = [
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(26.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}
