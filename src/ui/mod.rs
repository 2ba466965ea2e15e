//! UI Layer
//!
//! egui rendering for the calculator display, the keypad grid, and the
//! secondary history window.

pub mod history;
pub mod keypad;
pub mod theme;

pub use history::HistoryView;
pub use keypad::render_keypad;
