//! Calculator State Machine
//!
//! The pure core of the application: button events go in, display text and
//! optional completed calculations come out. No UI or storage code lives here,
//! so the whole state machine is unit-testable in isolation.

pub mod keys;
pub mod state;

pub use keys::{Key, Operator};
pub use state::{CalculatorState, CompletedCalculation, Outcome};
