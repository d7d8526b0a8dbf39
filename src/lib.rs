pub mod equation;
pub mod error;
pub mod history;
pub mod notation;

pub use equation::{Equation, Evaluation, ParseOutcome, NOT_AVAILABLE};
pub use error::{Error, HistoryError, NotBalanced, Result};
pub use history::{HistoryStack, RedoPolicy};

/// Evaluates an infix expression without recording it anywhere.
pub fn evaluate_expression(expression: &str) -> Result<f64, NotBalanced> {
    Equation::new(expression)
        .outcome()
        .as_ref()
        .map(|evaluation| evaluation.answer)
        .map_err(|fault| fault.clone())
}
