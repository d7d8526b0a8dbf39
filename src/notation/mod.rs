mod balance;
mod converter;
mod evaluator;
mod parser;
mod radix;
mod stack;

use crate::NotBalanced;

pub use balance::is_balanced;
pub use converter::{
    infix_to_postfix, infix_to_prefix, postfix_from_lexemes, prefix_from_lexemes,
};
pub use evaluator::{evaluate_postfix, Token};
pub use parser::{InfixParser, Lexeme};
pub use radix::{to_base, Radix};
pub use stack::TokenStack;

/// Precedence of a single character as used by both converters.
///
/// Returns -1 for anything that is not an operator or a parenthesis.
pub fn operator_precedence(ch: char) -> i8 {
    match ch {
        '^' => 3,
        '*' | '/' | '%' => 2,
        '+' | '-' => 1,
        '(' | ')' => 0,
        _ => -1,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
            Operator::Power => '^',
        }
    }

    pub fn precedence(&self) -> i8 {
        operator_precedence(self.symbol())
    }

    /// Only exponentiation groups right to left.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Power)
    }

    /// Computes `left OP right`.
    ///
    /// Division by an exact zero is rejected. Remainder by zero is not and
    /// yields NaN like any other float remainder.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, NotBalanced> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(NotBalanced::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Modulo => Ok(left % right),
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '%' => Ok(Operator::Modulo),
            '^' => Ok(Operator::Power),
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Operator::try_from(ch),
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(operator_precedence('^'), 3);
        assert_eq!(operator_precedence('%'), 2);
        assert_eq!(operator_precedence('/'), 2);
        assert_eq!(operator_precedence('-'), 1);
        assert_eq!(operator_precedence(')'), 0);
        assert_eq!(operator_precedence('x'), -1);
        assert_eq!(operator_precedence(' '), -1);
    }

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!(Operator::try_from("^"), Ok(Operator::Power));
        assert_eq!(Operator::try_from('%'), Ok(Operator::Modulo));
        assert!(Operator::try_from("**").is_err());
        assert!(Operator::try_from("").is_err());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Subtract.apply(2.0, 5.0), Ok(-3.0));
        assert_eq!(Operator::Power.apply(2.0, -1.0), Ok(0.5));
        assert_eq!(Operator::Modulo.apply(7.0, 4.0), Ok(3.0));
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(NotBalanced::DivisionByZero)
        );
        assert!(Operator::Modulo.apply(1.0, 0.0).unwrap().is_nan());
    }
}
