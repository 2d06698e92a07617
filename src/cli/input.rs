//! Interactive input sources.
//!
//! Flows ask for input through [`InputProvider`] so the same code runs
//! against a terminal or a fixed script of answers.

use crate::error::{PlannerError, Result};
use console::style;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A source of answers to interactive prompts.
pub trait InputProvider {
    /// Ask for free text.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask the user to pick one of `choices`, returning its index.
    fn select(&mut self, prompt: &str, choices: &[&str]) -> Result<usize>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Reads answers from a terminal (or any buffered reader).
pub struct TerminalInput<R> {
    reader: R,
}

impl TerminalInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Result<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PlannerError::InvalidInput("input closed".to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Resolve a menu answer given as a 1-based number or the choice text.
fn match_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| n - 1);
    }
    choices.iter().position(|c| c.eq_ignore_ascii_case(answer))
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

impl<R: BufRead> InputProvider for TerminalInput<R> {
    fn text(&mut self, prompt: &str) -> Result<String> {
        print!("{} {} ", style("?").cyan(), prompt);
        self.read_line()
    }

    fn select(&mut self, prompt: &str, choices: &[&str]) -> Result<usize> {
        loop {
            println!("{} {}", style("?").cyan(), prompt);
            for (idx, choice) in choices.iter().enumerate() {
                println!("  {} {}", style(format!("{})", idx + 1)).cyan(), choice);
            }
            print!("{} ", style(format!("[1-{}]", choices.len())).dim());

            let answer = self.read_line()?;
            if let Some(idx) = match_choice(&answer, choices) {
                return Ok(idx);
            }
            println!("{} Please pick one of the listed options.", style(">>").yellow().bold());
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            print!("{} {} {} ", style("?").cyan(), prompt, style("[y/N]").dim());
            if let Some(answer) = parse_yes_no(&self.read_line()?) {
                return Ok(answer);
            }
        }
    }
}

/// Answers prompts from a prepared list, recording each prompt asked.
///
/// `select` answers are matched like terminal answers (number or choice text);
/// `confirm` answers are `y`/`yes`/`n`/`no`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PlannerError::InvalidInput(format!("no scripted answer for '{}'", prompt)))
    }
}

impl InputProvider for ScriptedInput {
    fn text(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }

    fn select(&mut self, prompt: &str, choices: &[&str]) -> Result<usize> {
        let answer = self.next(prompt)?;
        match_choice(&answer, choices).ok_or_else(|| {
            PlannerError::InvalidInput(format!("'{}' is not one of {:?}", answer, choices))
        })
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.next(prompt)?;
        parse_yes_no(&answer)
            .ok_or_else(|| PlannerError::InvalidInput(format!("'{}' is not yes or no", answer)))
    }
}
