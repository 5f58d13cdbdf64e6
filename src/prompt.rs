use crate::error::{Result, ScaffoldError};
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal};

pub const SUB_FEATURE_PROMPT: &str = "Enter the name of the new feature to add: ";

/// Supplies the sub-feature name when the requested feature already exists
pub trait NameProvider {
    fn next_name(&mut self, prompt: &str) -> Result<String>;
}

/// Blocking prompt on the operator's terminal.
///
/// Falls back to reading a single line from stdin when stdin is not a tty.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl NameProvider for TerminalPrompt {
    fn next_name(&mut self, prompt: &str) -> Result<String> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            let answer = Input::<String>::new()
                .with_prompt(prompt.trim_end().trim_end_matches(':'))
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        print!("{}", prompt);
        std::io::Write::flush(&mut std::io::stdout())
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(ScaffoldError::Prompt("stdin closed before a name was entered".into()));
        }
        println!();
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Canned answers, consumed front to back
#[derive(Debug, Default, Clone)]
pub struct ScriptedNames {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedNames {
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

    /// Prompts that were shown so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl NameProvider for ScriptedNames {
    fn next_name(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| ScaffoldError::Prompt("no scripted answer left".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_names_in_order() {
        let mut names = ScriptedNames::new(["invoices", "refunds"]);

        assert_eq!(names.next_name(SUB_FEATURE_PROMPT).unwrap(), "invoices");
        assert_eq!(names.next_name(SUB_FEATURE_PROMPT).unwrap(), "refunds");
        assert_eq!(names.remaining(), 0);
        assert_eq!(names.asked().len(), 2);
    }

    #[test]
    fn test_scripted_names_exhausted() {
        let mut names = ScriptedNames::default();
        let err = names.next_name(SUB_FEATURE_PROMPT).unwrap_err();
        assert!(matches!(err, ScaffoldError::Prompt(_)));
    }
}
