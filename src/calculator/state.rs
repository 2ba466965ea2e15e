//! Calculator state and the event transition function
//!
//! State is a handful of fields mutated in place by one event at a time. Each
//! transition returns the new display text (when it changes) and, on a
//! completed "=" press, the expression and result to append to history.

use crate::calculator::keys::{Key, Operator};

/// Transient calculator state. One instance lives for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    /// Digits typed since the last operator/equals/clear
    pub buffer: String,
    /// Pending operator; `None` exactly when no binary operation is pending
    pub operator: Option<Operator>,
    /// First operand, committed when an operator is pressed
    pub first_operand: f64,
    /// Second operand, committed when "=" is pressed
    pub second_operand: f64,
    /// Result of the most recent "=" press
    pub last_result: f64,
}

/// A calculation completed by an "=" press, ready for the history store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCalculation {
    /// Rendered as "operand1 operator operand2"
    pub expression: String,
    /// String form of the numeric result
    pub result: String,
}

/// The observable effect of one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// New display text; `None` leaves the display unchanged
    pub display: Option<String>,
    /// Present only when an "=" press completed a calculation
    pub completed: Option<CompletedCalculation>,
}

impl Outcome {
    fn unchanged() -> Self {
        Self {
            display: None,
            completed: None,
        }
    }

    fn display(text: String) -> Self {
        Self {
            display: Some(text),
            completed: None,
        }
    }
}

impl CalculatorState {
    /// Create the all-empty startup state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one keypad event, mutating the state and reporting its effect.
    pub fn apply(&mut self, key: Key) -> Outcome {
        match key {
            Key::Digit(d) => {
                self.buffer.push((b'0' + d) as char);
                let text = match self.operator {
                    Some(op) => format!(
                        "{} {} {}",
                        format_number(self.first_operand),
                        op.symbol(),
                        self.buffer
                    ),
                    None => self.buffer.clone(),
                };
                Outcome::display(text)
            }
            Key::Operator(op) => {
                // Pressing an operator with nothing typed is ignored; any
                // previously pending operator stays in effect.
                if self.buffer.is_empty() {
                    return Outcome::unchanged();
                }
                self.first_operand = parse_buffer(&self.buffer);
                self.operator = Some(op);
                self.buffer.clear();
                Outcome::display(format!(
                    "{} {} ",
                    format_number(self.first_operand),
                    op.symbol()
                ))
            }
            Key::Equals => {
                let Some(op) = self.operator else {
                    return Outcome::unchanged();
                };
                if self.buffer.is_empty() {
                    return Outcome::unchanged();
                }
                self.second_operand = parse_buffer(&self.buffer);
                self.last_result = op.apply(self.first_operand, self.second_operand);

                let result_text = format_number(self.last_result);
                let expression = format!(
                    "{} {} {}",
                    format_number(self.first_operand),
                    op.symbol(),
                    format_number(self.second_operand)
                );
                let display = format!("{} = {}", expression, result_text);

                // The formatted result becomes the buffer so the next
                // operator press can chain on it.
                self.buffer = result_text.clone();
                self.operator = None;

                Outcome {
                    display: Some(display),
                    completed: Some(CompletedCalculation {
                        expression,
                        result: result_text,
                    }),
                }
            }
            Key::Clear => {
                self.buffer.clear();
                self.operator = None;
                self.first_operand = 0.0;
                self.second_operand = 0.0;
                self.last_result = 0.0;
                Outcome::display(String::new())
            }
            // History never touches calculator state; the app handles it.
            Key::History => Outcome::unchanged(),
        }
    }
}

/// Parse the input buffer as a number.
///
/// The buffer only ever holds keypad digits or a previously formatted result,
/// both of which parse cleanly; the fallback is unreachable in practice.
fn parse_buffer(buffer: &str) -> f64 {
    buffer.parse().unwrap_or_default()
}

/// Format a number for display and history.
///
/// Integral values render with one decimal place ("7.0", "10.0"); fractional
/// values use the shortest representation ("3.5").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
