//! Application context for the Phonebook CLI.
//!
//! Bundles the console with the resolved UI settings so command handlers
//! take one parameter for all terminal interaction.

use crate::ui::render::notice;
use crate::ui::{Badge, Console, UiContext};

pub struct AppContext<'a> {
    console: &'a mut dyn Console,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    pub fn new(console: &'a mut dyn Console, ui: UiContext) -> Self {
        Self { console, ui }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Prompt for one line; `None` once input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.console
            .read_line(prompt)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
    }

    pub fn say(&mut self, line: &str) {
        self.console.say(line);
    }

    pub fn say_all(&mut self, lines: &[String]) {
        for line in lines {
            self.console.say(line);
        }
    }

    pub fn success(&mut self, message: &str) {
        let line = notice(&self.ui, Badge::Ok, message);
        self.console.say(&line);
    }

    pub fn info(&mut self, message: &str) {
        let line = notice(&self.ui, Badge::Info, message);
        self.console.say(&line);
    }

    pub fn warn(&mut self, message: &str) {
        let line = notice(&self.ui, Badge::Warn, message);
        self.console.say(&line);
    }

    pub fn error(&mut self, message: &str) {
        let line = notice(&self.ui, Badge::Err, message);
        self.console.say(&line);
    }
}
