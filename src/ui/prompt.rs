use std::{
    cell::RefCell,
    collections::VecDeque,
    io::{self, BufRead, IsTerminal, StdinLock, Write},
};

use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// Operator interaction used by the commands.
pub trait Prompter {
    /// Ask a yes/no question. Anything but an explicit yes is a no.
    ///
    /// # Errors
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Ask for a free-form line. May return an empty string.
    ///
    /// # Errors
    /// Returns an error if the answer cannot be read.
    fn input(&self, question: &str) -> Result<String>;
}

/// `y` or `yes` in any case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompts on the controlling terminal, or reads answers line by line from
/// stdin when it is not a terminal.
pub enum TerminalPrompter {
    Dialog(ColorfulTheme),
    Lines(LinePrompter<StdinLock<'static>>),
}

impl TerminalPrompter {
    pub fn detect() -> Self {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            Self::Dialog(ColorfulTheme::default())
        } else {
            tracing::debug!("stdin is not a terminal; reading answers line by line");
            Self::Lines(LinePrompter::new(io::stdin().lock()))
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> Result<bool> {
        match self {
            Self::Dialog(theme) => Confirm::with_theme(theme)
                .with_prompt(question)
                .default(false)
                .wait_for_newline(true)
                .interact()
                .context("failed to read confirmation"),
            Self::Lines(lines) => lines.confirm(question),
        }
    }

    fn input(&self, question: &str) -> Result<String> {
        match self {
            Self::Dialog(theme) => Input::<String>::with_theme(theme)
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .context("failed to read input"),
            Self::Lines(lines) => lines.input(question),
        }
    }
}

/// Writes the question to stderr and reads one line per answer. End of input
/// reads as an empty answer.
pub struct LinePrompter<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> LinePrompter<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }

    fn read_answer(&self, prompt: &str) -> Result<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;

        let mut line = String::new();
        let n = self
            .reader
            .borrow_mut()
            .read_line(&mut line)
            .context("failed to read answer from stdin")?;
        if n == 0 {
            writeln!(stderr)?;
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn confirm(&self, question: &str) -> Result<bool> {
        let answer = self.read_answer(&format!("{question} (y/n): "))?;
        Ok(is_affirmative(&answer))
    }

    fn input(&self, question: &str) -> Result<String> {
        self.read_answer(&format!("{question}: "))
    }
}

/// Replays a fixed queue of answers and records the questions asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, question: &str) -> Result<String> {
        self.asked.borrow_mut().push(question.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer left for: {question}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str) -> Result<bool> {
        Ok(is_affirmative(&self.next(question)?))
    }

    fn input(&self, question: &str) -> Result<String> {
        self.next(question)
    }
}
