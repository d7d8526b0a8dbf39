use crate::notation::{
    evaluate_postfix, is_balanced, postfix_from_lexemes, prefix_from_lexemes, to_base,
    InfixParser, Radix,
};
use crate::NotBalanced;
use log::{debug, warn};
use std::fmt;

/// Shown in place of a notation that could not be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything derived from a successfully evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub prefix: String,
    pub postfix: String,
    pub answer: f64,
    pub binary: String,
    pub hex: String,
}

/// Result of running an expression through the pipeline, computed once.
pub type ParseOutcome = Result<Evaluation, NotBalanced>;

/// One entered expression with its notations and answer.
///
/// All derived values are computed when the equation is built and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    text: String,
    outcome: ParseOutcome,
}

impl Equation {
    /// Builds an equation from infix text.
    ///
    /// A faulty expression still produces an equation; it reports
    /// `balanced() == false` and sentinel values for every derived field.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let outcome = Self::process(&text);

        match &outcome {
            Ok(evaluation) => debug!("Equation '{}' = {}", text, evaluation.answer),
            Err(fault) => warn!("Equation '{}' was not evaluated: {}", text, fault),
        }

        Self { text, outcome }
    }

    fn process(text: &str) -> ParseOutcome {
        if !is_balanced(text) {
            return Err(NotBalanced::Parentheses);
        }

        let lexemes = InfixParser::tokenize(text)?;
        let postfix = postfix_from_lexemes(&lexemes);
        let prefix = prefix_from_lexemes(&lexemes);
        let answer = evaluate_postfix(&postfix)?;
        let rounded = round_half_up(answer);

        Ok(Evaluation {
            prefix,
            postfix,
            answer,
            binary: to_base(rounded, Radix::BINARY),
            hex: to_base(rounded, Radix::HEX),
        })
    }

    /// The expression exactly as entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// False when the parentheses do not match or evaluation faulted.
    pub fn balanced(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }

    /// Why the equation was not evaluated, if it wasn't.
    pub fn fault(&self) -> Option<&NotBalanced> {
        self.outcome.as_ref().err()
    }

    pub fn prefix(&self) -> &str {
        self.outcome
            .as_ref()
            .map_or(NOT_AVAILABLE, |evaluation| evaluation.prefix.as_str())
    }

    pub fn postfix(&self) -> &str {
        self.outcome
            .as_ref()
            .map_or(NOT_AVAILABLE, |evaluation| evaluation.postfix.as_str())
    }

    pub fn answer(&self) -> f64 {
        self.outcome
            .as_ref()
            .map_or(0.0, |evaluation| evaluation.answer)
    }

    pub fn binary(&self) -> &str {
        self.outcome
            .as_ref()
            .map_or("0", |evaluation| evaluation.binary.as_str())
    }

    pub fn hex(&self) -> &str {
        self.outcome
            .as_ref()
            .map_or("0", |evaluation| evaluation.hex.as_str())
    }
}

/// Table row: text, prefix, postfix, answer, binary, hex.
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<35}{:<35}{:<24}{:>16.3}{:>18}{:>17}",
            self.text(),
            self.prefix(),
            self.postfix(),
            self.answer(),
            self.binary(),
            self.hex()
        )
    }
}

/// Rounds halves towards positive infinity, saturating at the `i64` range.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}
