//! Interactive rating collection
//!
//! The prompter only gathers values. It shows the scale for each category,
//! re-asks until the answer is a valid rating, and hands the full set back
//! to the caller, who submits it to the store in one batch.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::models::{Criteria, Rating};
use crate::output::capitalize;

/// Errors that end an interactive session
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user quit or input ended before every category was rated
    #[error("rating cancelled")]
    Cancelled,

    /// Reading input or writing the prompt failed
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Asks for ratings over any line-based input and output
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading from `input` and writing to `output`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for one rating per category, in configured order
    pub fn collect(
        &mut self,
        exchange: &str,
        criteria: &Criteria,
    ) -> Result<Vec<(String, Rating)>, PromptError> {
        writeln!(self.output, "\nRating '{exchange}' using the Leveson-Based Trade Assessment Scale")?;
        writeln!(self.output, "{}", "=".repeat(60))?;

        let mut answers = Vec::with_capacity(criteria.len());
        for criterion in criteria.iter() {
            let rating = self.ask(criterion)?;
            answers.push((criterion.to_string(), rating));
        }
        Ok(answers)
    }

    /// Ask for a single rating until a valid one is entered
    pub fn ask(&mut self, criterion: &str) -> Result<Rating, PromptError> {
        let title = capitalize(criterion);
        writeln!(self.output, "\nRate {title}:")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        for level in Rating::all().rev() {
            writeln!(self.output, " {:>2}: {} - {}", level, level.label(), level.description())?;
        }
        writeln!(self.output, "{}", "=".repeat(50))?;

        loop {
            write!(self.output, "Enter your rating for {title} (-1 to 4, q to quit): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::Cancelled);
            }
            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                return Err(PromptError::Cancelled);
            }

            match answer.parse::<Rating>() {
                Ok(rating) => return Ok(rating),
                Err(_) => writeln!(self.output, "Please enter a whole number between -1 and 4.")?,
            }
        }
    }
}
