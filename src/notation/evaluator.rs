use crate::notation::{Operator, TokenStack};
use crate::NotBalanced;
use log::{debug, trace};

/// A postfix token. Numbers are parsed once, when the token is read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

impl TryFrom<&str> for Token {
    type Error = NotBalanced;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if let Ok(operator) = Operator::try_from(value) {
            return Ok(Token::Operator(operator));
        }
        value
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| NotBalanced::NonNumericOperand(value.to_string()))
    }
}

/// Evaluates a space separated postfix expression.
///
/// For every operator the first value popped is the right operand and the
/// second the left one. If several values are left once the input is
/// consumed, the most recently pushed one is the result.
///
/// An operand that is not a number only faults once it is popped, so the
/// operand count is checked first.
pub fn evaluate_postfix(postfix: &str) -> Result<f64, NotBalanced> {
    let mut values: TokenStack<Result<f64, NotBalanced>> = TokenStack::new();

    for raw in postfix.split(' ').filter(|raw| !raw.is_empty()) {
        match Token::try_from(raw) {
            Ok(Token::Operator(operator)) => {
                if values.size() < 2 {
                    return Err(NotBalanced::InsufficientOperands);
                }
                let right = values.pop().ok_or(NotBalanced::InsufficientOperands)??;
                let left = values.pop().ok_or(NotBalanced::InsufficientOperands)??;
                let result = operator.apply(left, right)?;
                trace!("{} {} {} = {}", left, operator, right, result);
                values.push(Ok(result));
            }
            Ok(Token::Number(value)) => values.push(Ok(value)),
            Err(fault) => values.push(Err(fault)),
        }
    }

    if values.size() > 1 {
        debug!(
            "{} values left after evaluating '{}', using the last one",
            values.size(),
            postfix
        );
    }

    let answer = values.pop().ok_or(NotBalanced::EmptyExpression)??;
    debug!("Postfix {} evaluates to {}", postfix, answer);
    Ok(answer)
}
