use crate::{Equation, HistoryError};
use log::debug;
use std::fmt;

const TABLE_RULE_WIDTH: usize = 149;

/// What a `push` does to equations that were undone before it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RedoPolicy {
    /// Undone equations stay available to `redo` after a push, even though
    /// the new entry was not derived from them.
    #[default]
    Retain,
    /// A push discards every undone equation.
    ClearOnPush,
}

/// Every equation entered in the session, newest on top, plus the
/// equations taken off by `undo`.
///
/// Positions count from the top: the newest equation is position 1 and the
/// oldest is position `size()`. Rendering uses the same numbering.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<Equation>,
    undone: Vec<Equation>,
    size: usize,
    policy: RedoPolicy,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::with_policy(RedoPolicy::default())
    }

    pub fn with_policy(policy: RedoPolicy) -> Self {
        Self {
            entries: Vec::new(),
            undone: Vec::new(),
            size: 0,
            policy,
        }
    }

    pub fn policy(&self) -> RedoPolicy {
        self.policy
    }

    pub fn push(&mut self, equation: Equation) {
        debug!("Pushing equation '{}'", equation.text());
        if self.policy == RedoPolicy::ClearOnPush && !self.undone.is_empty() {
            debug!("Discarding {} undone equations", self.undone.len());
            self.undone.clear();
        }
        self.entries.push(equation);
        self.size += 1;
    }

    pub fn pop(&mut self) -> Result<Equation, HistoryError> {
        let equation = self.entries.pop().ok_or(HistoryError::EmptyHistory)?;
        self.size -= 1;
        Ok(equation)
    }

    pub fn peek(&self) -> Result<&Equation, HistoryError> {
        self.entries.last().ok_or(HistoryError::EmptyHistory)
    }

    /// Moves the newest equation aside so `redo` can bring it back.
    ///
    /// Returns the equation that was undone.
    pub fn undo(&mut self) -> Result<&Equation, HistoryError> {
        let equation = self.pop()?;
        debug!("Undoing equation '{}'", equation.text());
        self.undone.push(equation);
        Ok(&self.undone[self.undone.len() - 1])
    }

    /// Puts the most recently undone equation back on top.
    ///
    /// Returns the restored equation.
    pub fn redo(&mut self) -> Result<&Equation, HistoryError> {
        let equation = self.undone.pop().ok_or(HistoryError::NoUndoneEquation)?;
        debug!("Redoing equation '{}'", equation.text());
        // Reinserted directly: a redo must not trigger the push policy.
        self.entries.push(equation);
        self.size += 1;
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Returns a copy of the equation at `position`, counted from the top.
    pub fn get_equation(&self, position: usize) -> Result<Equation, HistoryError> {
        if position < 1 || position > self.size {
            return Err(HistoryError::InvalidPosition {
                position,
                size: self.size,
            });
        }

        self.entries
            .iter()
            .rev()
            .nth(position - 1)
            .cloned()
            .ok_or(HistoryError::InvalidPosition {
                position,
                size: self.size,
            })
    }

    /// Drops every equation, including the undone ones.
    pub fn clear(&mut self) {
        debug!("Clearing {} equations from history", self.size);
        *self = Self::with_policy(self.policy);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    /// Equations paired with their position, newest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Equation)> {
        self.entries
            .iter()
            .rev()
            .enumerate()
            .map(|(index, equation)| (index + 1, equation))
    }

    /// Table with only the newest equation.
    pub fn render_latest(&self) -> Result<String, HistoryError> {
        let latest = self.peek()?;
        Ok(format!("{}{:<4}{}\n", table_header(), 1, latest))
    }
}

fn table_header() -> String {
    format!(
        "{:<4}{:<35}{:<35}{:<34}{:<18}{:<12}{:<12}\n{}\n",
        "#",
        "Equation",
        "Pre-Fix",
        "Post-Fix",
        "Answer",
        "Binary",
        "Hexadecimal",
        "-".repeat(TABLE_RULE_WIDTH)
    )
}

impl fmt::Display for HistoryStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&table_header())?;
        for (position, equation) in self.iter() {
            writeln!(f, "{:<4}{}", position, equation)?;
        }
        Ok(())
    }
}
