//! Keypad events and button label classification
//!
//! Every control on the keypad carries a text label that doubles as its event
//! identifier. Classification of labels into events is total over the fixed
//! button set; anything else maps to `None`.

/// A binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The display symbol, identical to the keypad label
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by exactly zero yields 0, never infinity or NaN.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// One of the four arithmetic operators
    Operator(Operator),
    /// The "=" button
    Equals,
    /// The "C" button
    Clear,
    /// The "History" button
    History,
}

impl Key {
    /// Classify a button label into an event.
    ///
    /// Returns `None` for labels outside the fixed keypad set.
    pub fn from_label(label: &str) -> Option<Key> {
        match label {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                let digit = label.as_bytes()[0] - b'0';
                Some(Key::Digit(digit))
            }
            "+" => Some(Key::Operator(Operator::Add)),
            "-" => Some(Key::Operator(Operator::Subtract)),
            "*" => Some(Key::Operator(Operator::Multiply)),
            "/" => Some(Key::Operator(Operator::Divide)),
            "=" => Some(Key::Equals),
            "C" => Some(Key::Clear),
            "History" => Some(Key::History),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_labels_classify() {
        for d in 0..=9u8 {
            let label = d.to_string();
            assert_eq!(Key::from_label(&label), Some(Key::Digit(d)));
        }
    }

    #[test]
    fn test_operator_labels_classify() {
        assert_eq!(Key::from_label("+"), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_label("-"), Some(Key::Operator(Operator::Subtract)));
        assert_eq!(Key::from_label("*"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_label("/"), Some(Key::Operator(Operator::Divide)));
    }

    #[test]
    fn test_control_labels_classify() {
        assert_eq!(Key::from_label("="), Some(Key::Equals));
        assert_eq!(Key::from_label("C"), Some(Key::Clear));
        assert_eq!(Key::from_label("History"), Some(Key::History));
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(Key::from_label(""), None);
        assert_eq!(Key::from_label("42"), None);
        assert_eq!(Key::from_label("%"), None);
        assert_eq!(Key::from_label("history"), None);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_operator_arithmetic() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), 10.0);
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), 4.0);
        assert_eq!(Operator::Multiply.apply(7.0, 3.0), 21.0);
        assert_eq!(Operator::Divide.apply(7.0, 2.0), 3.5);
    }
}
