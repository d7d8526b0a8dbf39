use crate::notation::{is_balanced, InfixParser, Lexeme, Operator, TokenStack};
use crate::NotBalanced;
use log::debug;

/// What sits on the operator stack while converting.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    /// The parenthesis that opens a group in scan direction: `(` when
    /// reading left to right, `)` when reading right to left.
    GroupStart,
}

impl Pending {
    fn precedence(&self) -> i8 {
        match self {
            Pending::Operator(operator) => operator.precedence(),
            Pending::GroupStart => 0,
        }
    }

    fn emit(&self, output: &mut Vec<String>) {
        if let Pending::Operator(operator) = self {
            output.push(operator.to_string());
        }
    }
}

/// Converts an infix expression to space separated postfix.
///
/// Operators of equal precedence are emitted left to right, except `^`
/// which groups to the right.
pub fn infix_to_postfix(infix: &str) -> Result<String, NotBalanced> {
    if !is_balanced(infix) {
        return Err(NotBalanced::Parentheses);
    }
    Ok(postfix_from_lexemes(&InfixParser::tokenize(infix)?))
}

/// Converts an infix expression to space separated prefix.
///
/// The expression is read right to left with the roles of `(` and `)`
/// swapped, then the collected tokens are reversed. Any stacked operator of
/// equal or higher precedence is popped, so a chain of equal-precedence
/// operators comes out grouped to the right. The answer is always taken
/// from the postfix form.
pub fn infix_to_prefix(infix: &str) -> Result<String, NotBalanced> {
    if !is_balanced(infix) {
        return Err(NotBalanced::Parentheses);
    }
    Ok(prefix_from_lexemes(&InfixParser::tokenize(infix)?))
}

/// Postfix of lexemes whose parentheses are already known to balance.
pub fn postfix_from_lexemes(lexemes: &[Lexeme<'_>]) -> String {
    let mut stack = TokenStack::new();
    let mut output = Vec::new();

    for lexeme in lexemes.iter().copied() {
        match lexeme {
            Lexeme::Number(digits) => output.push(digits.to_string()),
            Lexeme::Open => stack.push(Pending::GroupStart),
            Lexeme::Close => close_group(&mut stack, &mut output),
            Lexeme::Operator(operator) => {
                while let Some(top) = stack.peek() {
                    let outranks = top.precedence() > operator.precedence()
                        || (top.precedence() == operator.precedence()
                            && !operator.is_right_associative());
                    if !outranks {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        top.emit(&mut output);
                    }
                }
                stack.push(Pending::Operator(operator));
            }
        }
    }

    while let Some(top) = stack.pop() {
        top.emit(&mut output);
    }

    let postfix = output.join(" ");
    debug!("Postfix: {}", postfix);
    postfix
}

/// Prefix of lexemes whose parentheses are already known to balance.
pub fn prefix_from_lexemes(lexemes: &[Lexeme<'_>]) -> String {
    let mut stack = TokenStack::new();
    let mut output = Vec::new();

    for lexeme in lexemes.iter().rev().copied() {
        match lexeme {
            Lexeme::Number(digits) => output.push(digits.to_string()),
            Lexeme::Close => stack.push(Pending::GroupStart),
            Lexeme::Open => close_group(&mut stack, &mut output),
            Lexeme::Operator(operator) => {
                while let Some(top) = stack.peek() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        top.emit(&mut output);
                    }
                }
                stack.push(Pending::Operator(operator));
            }
        }
    }

    while let Some(top) = stack.pop() {
        top.emit(&mut output);
    }

    output.reverse();
    let prefix = output.join(" ").trim().to_string();
    debug!("Prefix: {}", prefix);
    prefix
}

/// Pops operators until the group start, which is discarded.
fn close_group(stack: &mut TokenStack<Pending>, output: &mut Vec<String>) {
    while let Some(top) = stack.pop() {
        if top == Pending::GroupStart {
            break;
        }
        top.emit(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postfix_precedence() {
        assert_eq!(infix_to_postfix("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(infix_to_postfix("2*3+4").unwrap(), "2 3 * 4 +");
        assert_eq!(infix_to_postfix("(2+3)*4").unwrap(), "2 3 + 4 *");
    }

    #[test]
    fn test_postfix_associativity() {
        assert_eq!(infix_to_postfix("8-3-2").unwrap(), "8 3 - 2 -");
        assert_eq!(infix_to_postfix("8/4%3").unwrap(), "8 4 / 3 %");
        assert_eq!(infix_to_postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
    }

    #[test]
    fn test_prefix_precedence() {
        assert_eq!(infix_to_prefix("2+3*4").unwrap(), "+ 2 * 3 4");
        assert_eq!(infix_to_prefix("(2+3)*4").unwrap(), "* + 2 3 4");
    }

    #[test]
    fn test_prefix_associativity() {
        // ^ stays right associative: 2^(3^2)
        assert_eq!(infix_to_prefix("2^3^2").unwrap(), "^ 2 ^ 3 2");
        // equal-precedence chains group to the right in prefix form
        assert_eq!(infix_to_prefix("8-3-2").unwrap(), "- 8 - 3 2");
    }

    #[test]
    fn test_multi_digit_numbers_keep_their_order() {
        assert_eq!(infix_to_postfix("12+345").unwrap(), "12 345 +");
        assert_eq!(infix_to_prefix("12+345").unwrap(), "+ 12 345");
    }

    #[test]
    fn test_single_number() {
        assert_eq!(infix_to_postfix("5").unwrap(), "5");
        assert_eq!(infix_to_prefix("5").unwrap(), "5");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(infix_to_postfix(" ( 1 + 2 ) * 3 ").unwrap(), "1 2 + 3 *");
        assert_eq!(infix_to_prefix(" ( 1 + 2 ) * 3 ").unwrap(), "* + 1 2 3");
    }

    #[test]
    fn test_nested_groups() {
        let infix = "((1+2)*(3-4))^2";
        assert_eq!(infix_to_postfix(infix).unwrap(), "1 2 + 3 4 - * 2 ^");
        assert_eq!(infix_to_prefix(infix).unwrap(), "^ * + 1 2 - 3 4 2");
    }

    #[test]
    fn test_from_lexemes_matches_text_conversion() {
        let infix = "(12+3)*4-6/2^2";
        let lexemes = InfixParser::tokenize(infix).unwrap();
        assert_eq!(postfix_from_lexemes(&lexemes), "12 3 + 4 * 6 2 2 ^ / -");
        assert_eq!(prefix_from_lexemes(&lexemes), "- * + 12 3 4 / 6 ^ 2 2");
        assert_eq!(postfix_from_lexemes(&lexemes), infix_to_postfix(infix).unwrap());
        assert_eq!(prefix_from_lexemes(&lexemes), infix_to_prefix(infix).unwrap());
    }

    #[test]
    fn test_unbalanced_input_is_rejected() {
        assert_eq!(infix_to_postfix("(2+3"), Err(NotBalanced::Parentheses));
        assert_eq!(infix_to_prefix(")2+3("), Err(NotBalanced::Parentheses));
    }
}
