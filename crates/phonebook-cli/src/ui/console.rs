//! Line-oriented input and output for the interactive session.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

/// Where prompts are answered and messages are printed.
pub trait Console {
    /// Show `prompt` and read one line without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line.
    fn say(&mut self, line: &str);
}

/// Console over the process stdin/stdout.
///
/// On a TTY prompts go through dialoguer; otherwise lines are read from
/// buffered stdin so the menu can be scripted through a pipe.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.interactive {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map(Some)
                .map_err(io::Error::other);
        }

        let mut stdout = io::stdout();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Console fed from a fixed list of answers, recording everything shown.
#[cfg(test)]
pub struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    /// True when some printed line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript
            .iter()
            .any(|line| !line.starts_with("> ") && line.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(format!("> {}", prompt));
        Ok(self.answers.pop_front())
    }

    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}
