use crate::notation::Operator;
use crate::NotBalanced;
use log::debug;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression.pest"]
pub struct InfixParser;

/// One meaningful piece of an infix expression, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'a> {
    /// A maximal run of digits, kept as written.
    Number(&'a str),
    Operator(Operator),
    Open,
    Close,
}

impl InfixParser {
    /// Splits `input` into lexemes, dropping every character that is not a
    /// digit, an operator or a parenthesis.
    pub fn tokenize(input: &str) -> Result<Vec<Lexeme<'_>>, NotBalanced> {
        debug!("Scanning expression: {}", input);
        let infix = InfixParser::parse(Rule::infix, input)
            .map_err(|e| NotBalanced::Unreadable(e.to_string()))?
            .next()
            .ok_or_else(|| NotBalanced::Unreadable("no input matched".to_string()))?;

        let mut lexemes = Vec::new();
        for pair in infix.into_inner() {
            let lexeme = match pair.as_rule() {
                Rule::number => Lexeme::Number(pair.as_str()),
                Rule::operator => Lexeme::Operator(
                    Operator::try_from(pair.as_str()).map_err(NotBalanced::Unreadable)?,
                ),
                Rule::open => Lexeme::Open,
                Rule::close => Lexeme::Close,
                _ => continue,
            };
            lexemes.push(lexeme);
        }

        debug!("Lexemes: {:?}", lexemes);
        Ok(lexemes)
    }
}
