//! Interactive prompts
//!
//! Drives the [`Wizard`] from a line-oriented terminal and answers the
//! overwrite question. Prompts are written to stderr so stdout stays
//! clean for `--json` output.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::defaults::{NO_BOARD_LABEL, PROJECT_FILE_EXT};
use crate::core::create::{ConflictResolver, Resolution};
use crate::core::project::{validate_name, ProjectInfo};
use crate::core::wizard::{Wizard, WizardTab};

/// Line-based prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter reading stdin and writing stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question; `None` means end of input
    fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<Option<String>> {
        match default {
            Some(d) if !d.is_empty() => write!(self.output, "{question} [{d}]: ")?,
            _ => write!(self.output, "{question}: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(Some(default.unwrap_or_default().to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Run the wizard until it finishes
    ///
    /// Returns `None` if the user cancels or input ends.
    pub fn run_wizard(&mut self, wizard: &mut Wizard) -> io::Result<Option<ProjectInfo>> {
        loop {
            let step = match wizard.tab() {
                WizardTab::Location => self.location_step(wizard)?,
                WizardTab::Board => self.board_step(wizard)?,
            };

            match step {
                Step::Continue => {}
                Step::Cancel => {
                    wizard.cancel();
                    return Ok(None);
                }
                Step::Finish(info) => return Ok(Some(info)),
            }
        }
    }

    fn location_step(&mut self, wizard: &mut Wizard) -> io::Result<Step> {
        let current_name = wizard.name().to_string();
        let Some(name) = self.ask("Project name", Some(&current_name))? else {
            return Ok(Step::Cancel);
        };
        if let Err(e) = validate_name(&name) {
            self.say(&format!("  {e}"))?;
            return Ok(Step::Continue);
        }
        wizard.set_name(name);

        let current_location = wizard.location().display().to_string();
        let Some(location) = self.ask("Location", Some(&current_location))? else {
            return Ok(Step::Cancel);
        };
        // Keep the stored path when the displayed default is accepted
        if location != current_location {
            wizard.set_location(location);
        }

        if let Err(e) = wizard.next() {
            self.say(&format!("  {e}"))?;
        }
        Ok(Step::Continue)
    }

    fn board_step(&mut self, wizard: &mut Wizard) -> io::Result<Step> {
        self.say(&format!("  0) {NO_BOARD_LABEL}"))?;
        let lines: Vec<String> = wizard
            .catalog()
            .entries()
            .iter()
            .enumerate()
            .map(|(i, b)| format!("  {}) {} ({})", i + 1, b.name, b.family))
            .collect();
        for line in lines {
            self.say(&line)?;
        }

        let current = wizard.board_index().to_string();
        let Some(answer) = self.ask("Board (b = back, q = cancel)", Some(&current))? else {
            return Ok(Step::Cancel);
        };

        match answer.as_str() {
            "b" | "back" => {
                wizard.back();
                return Ok(Step::Continue);
            }
            "q" | "quit" | "cancel" => return Ok(Step::Cancel),
            _ => {}
        }

        match wizard.catalog().resolve(&answer) {
            Ok(index) => wizard.select_board(index),
            Err(e) => {
                wizard.select_board(0);
                self.say(&format!("  {e}"))?;
            }
        }

        match wizard.finish() {
            Ok(info) => Ok(Step::Finish(info)),
            Err(_) => Ok(Step::Continue),
        }
    }
}

enum Step {
    Continue,
    Cancel,
    Finish(ProjectInfo),
}

impl<R: BufRead, W: Write> ConflictResolver for Prompter<R, W> {
    fn resolve(&mut self, apf_path: &Path) -> Resolution {
        let file_name = apf_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("project{PROJECT_FILE_EXT}"));

        let question = format!(
            "Project \"{file_name}\" already exists\nDo you want to overwrite it? (y = overwrite, n = go back, Enter = dismiss)"
        );
        match self.ask(&question, None) {
            Ok(Some(answer)) => match answer.to_lowercase().as_str() {
                "y" | "yes" => Resolution::Overwrite,
                "n" | "no" => Resolution::Abort,
                _ => Resolution::Dismiss,
            },
            Ok(None) => Resolution::Dismiss,
            Err(e) => {
                tracing::warn!("Failed to read overwrite answer: {e}");
                Resolution::Dismiss
            }
        }
    }
}
