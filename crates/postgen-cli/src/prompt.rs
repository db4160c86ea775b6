//! Terminal implementation of the core `Prompter` port.

use std::io;

use console::Term;
use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use owo_colors::OwoColorize;
use tracing::debug;

use postgen_core::{
    application::{ApplicationError, ports::Prompter},
    error::{PostgenError, PostgenResult},
};

/// Reason recorded when the user presses Ctrl-C inside a prompt.
pub const INTERRUPTED: &str = "interrupted";

/// Asks questions on stderr with `dialoguer`.
pub struct TerminalPrompter {
    theme: Box<dyn Theme + Send + Sync>,
    term: Term,
    no_color: bool,
}

impl TerminalPrompter {
    pub fn new(no_color: bool) -> Self {
        let theme: Box<dyn Theme + Send + Sync> = if no_color {
            Box::new(SimpleTheme)
        } else {
            Box::new(ColorfulTheme::default())
        };
        Self {
            theme,
            term: Term::stderr(),
            no_color,
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&self, prompt: &str) -> PostgenResult<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(prompt_failed)
    }

    fn ask_choice(&self, prompt: &str, options: &[String]) -> PostgenResult<String> {
        let index = Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_on(&self.term)
            .map_err(prompt_failed)?;

        debug!(prompt, index, "Choice made");
        options
            .get(index)
            .cloned()
            .ok_or_else(|| PostgenError::Internal {
                message: format!("selection {index} outside {} options", options.len()),
            })
    }

    fn notify(&self, message: &str) {
        let line = if self.no_color {
            format!("! {message}")
        } else {
            format!("{} {}", "!".yellow().bold(), message.yellow())
        };
        let _ = self.term.write_line(&line);
    }
}

fn prompt_failed(err: dialoguer::Error) -> PostgenError {
    let reason = match &err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => INTERRUPTED.to_string(),
        _ => err.to_string(),
    };
    ApplicationError::PromptFailed { reason }.into()
}
