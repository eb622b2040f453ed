use std::borrow::Cow;
use std::io::{self, Write};

use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{ColorMode, Config, DefaultEditor, Editor, Helper};

use crate::ui::dialog::{Dialog, Notice};

/// Alerts go to the terminal, confirmations are read with rustyline.
pub struct TerminalDialog {
    assume_yes: bool,
}

impl TerminalDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialog for TerminalDialog {
    fn alert(&self, notice: Notice) {
        match notice {
            Notice::Info(message) => println!("{message}"),
            Notice::Error(message) => eprintln!("error: {message}"),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match prompt(&format!("{question} [y/N] ")) {
            Ok(answer) => is_yes(&answer),
            Err(error) => {
                tracing::warn!(error = %error, "confirmation aborted");
                false
            }
        }
    }
}

pub fn prompt(message: &str) -> Result<String, ReadlineError> {
    io::stdout().flush()?;
    let mut editor = DefaultEditor::new()?;
    editor.readline(message)
}

/// Reads a line while echoing one `*` per typed character.
pub fn prompt_hidden(message: &str) -> Result<String, ReadlineError> {
    io::stdout().flush()?;
    let config = Config::builder()
        .color_mode(ColorMode::Forced)
        .auto_add_history(false)
        .build();
    let mut editor = Editor::<Masked, DefaultHistory>::with_config(config)?;
    editor.set_helper(Some(Masked));
    editor.readline(message)
}

struct Masked;

impl Highlighter for Masked {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Completer for Masked {
    type Candidate = String;
}

impl Hinter for Masked {
    type Hint = String;
}

impl Validator for Masked {}

impl Helper for Masked {}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("y", true)]
    #[case(" YES ", true)]
    #[case("", false)]
    #[case("no", false)]
    #[case("yep", false)]
    fn test_is_yes(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_yes(answer), expected);
    }

    #[rstest]
    #[case("secret", "******")]
    #[case("pässwörd", "********")]
    #[case("", "")]
    fn test_masked_line(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(Masked.highlight(line, line.len()), expected);
    }

    #[test]
    fn test_assume_yes() {
        assert!(TerminalDialog::new(true).confirm("Delete everything?"));
    }
}
