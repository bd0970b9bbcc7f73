//! Line-oriented user input.
//!
//! Every interactive flow reads through the [`Prompt`] trait. The console
//! implementation delegates to dialoguer; [`ScriptedPrompt`] replays a fixed
//! list of answers so whole menu sessions can run unattended.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Password, Select};
use std::collections::VecDeque;

pub trait Prompt {
    /// Reads one line of free text. Empty answers are allowed.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Reads one line of free text, answering `default` when left blank.
    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Reads a secret without echoing it.
    fn password(&mut self, prompt: &str) -> Result<String>;

    /// Lets the user pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Lets the user pick any number of `items`, returning their indices.
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;
}

#[derive(Default)]
pub struct ConsolePrompt {
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for ConsolePrompt {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme).with_prompt(prompt).allow_empty(true).interact_text()?;
        Ok(value)
    }

    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(value)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        let value = Password::with_theme(&self.theme).with_prompt(prompt).allow_empty_password(true).interact()?;
        Ok(value)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let selection = Select::with_theme(&self.theme).with_prompt(prompt).items(items).default(0).interact()?;
        Ok(selection)
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let selection = MultiSelect::with_theme(&self.theme).with_prompt(prompt).items(items).interact()?;
        Ok(selection)
    }
}

/// Replays queued answers in order.
///
/// A `select` answer may be the exact item label or its zero-based index; a
/// `multi_select` answer is a comma-separated list of those, blank for none.
/// Running out of answers is an error, which ends any re-prompt loop.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
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

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| msg_error_anyhow!(Message::InputExhausted(prompt.to_string())))
    }
}

fn choice_index(answer: &str, items: &[String]) -> Result<usize> {
    if let Some(index) = items.iter().position(|item| item == answer) {
        return Ok(index);
    }
    match answer.trim().parse::<usize>() {
        Ok(index) if index < items.len() => Ok(index),
        _ => Err(msg_error_anyhow!(Message::InvalidChoice)),
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }

    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.next(prompt)?;
        Ok(if answer.trim().is_empty() { default.to_string() } else { answer })
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let answer = self.next(prompt)?;
        choice_index(&answer, items)
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let answer = self.next(prompt)?;
        answer
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| choice_index(part, items))
            .collect()
    }
}
