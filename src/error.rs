use thiserror::Error;

/// Every way an expression can fail to produce an answer.
///
/// A structurally balanced expression that faults during evaluation is
/// still reported as "not balanced"; the variant carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotBalanced {
    #[error("Equation is not valid (not balanced).")]
    Parentheses,
    #[error("Not enough operands.")]
    InsufficientOperands,
    #[error("Not enough numbers: '{0}' is not a number.")]
    NonNumericOperand(String),
    #[error("Divisor can't be zero.")]
    DivisionByZero,
    #[error("Nothing to evaluate.")]
    EmptyExpression,
    #[error("Unreadable expression: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Position {position} is out of range (history holds {size} equations).")]
    InvalidPosition { position: usize, size: usize },
    #[error("Calculator history is empty.")]
    EmptyHistory,
    #[error("No last undone equation.")]
    NoUndoneEquation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    NotBalanced(#[from] NotBalanced),
    #[error(transparent)]
    History(#[from] HistoryError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
