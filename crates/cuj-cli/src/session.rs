//! Interactive authoring session.
//!
//! One process is one session: a [`JourneyStore`] lives for as long as the
//! session reads input and nothing is kept afterwards except exported files.
//! Each input line is one intent. Lines are split on whitespace and the
//! command words are parsed with clap, so the session gets the same help and
//! error messages as the top-level CLI:
//!
//! ```text
//! set title Signup flow          -> update_journey_field
//! add                            -> add_step
//! edit 2 pain-points Slow load   -> update_step
//! toggle 2                       -> toggle_step
//! remove 2                       -> remove_step
//! export                         -> writes "Signup flow.md"
//! ```
//!
//! For `set` and `edit`, every word after the field name is the value, taken
//! as typed (`-h` and `--` included) and joined with single spaces.

use std::{
    borrow::Cow,
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cuj_core::{
    export::{export_markdown, MarkdownDocument},
    params, CujError, JourneyStore, OperationStatus, StepCards, StepId,
};
use log::{debug, warn};

use crate::renderer::TerminalRenderer;

/// One line of session input.
#[derive(Parser, Debug)]
#[command(
    name = "cuj",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}\n"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands understood inside a session
#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Set a journey field: title, description, persona, goal or platform.
    /// The rest of the line is the value
    Set(SetArgs),
    /// Append a new, expanded step
    #[command(alias = "a")]
    Add,
    /// Remove a step (the last remaining step is kept)
    #[command(alias = "rm")]
    Remove(StepIdArgs),
    /// Set a step field: action, screen, input, response, outcome,
    /// pain-points or notes. The rest of the line is the value
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Expand or collapse a step card
    #[command(alias = "t")]
    Toggle(StepIdArgs),
    /// Show the journey as step cards
    #[command(alias = "ls")]
    Show,
    /// Print the journey as JSON
    Json,
    /// Show the Markdown document without saving it
    Preview,
    /// Save the journey as Markdown
    Export(ExportArgs),
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug)]
struct SetArgs {
    /// Journey field to set
    field: String,
    #[arg(skip)]
    value: String,
}

impl TryFrom<SetArgs> for params::UpdateJourneyField {
    type Error = CujError;

    fn try_from(val: SetArgs) -> Result<Self, Self::Error> {
        Ok(params::UpdateJourneyField {
            field: val.field.parse()?,
            value: val.value,
        })
    }
}

#[derive(Args, Debug)]
struct EditArgs {
    /// Id of the step to edit (shown on its card)
    id: u64,
    /// Step field to set
    field: String,
    #[arg(skip)]
    value: String,
}

impl TryFrom<EditArgs> for params::UpdateStep {
    type Error = CujError;

    fn try_from(val: EditArgs) -> Result<Self, Self::Error> {
        Ok(params::UpdateStep {
            id: StepId(val.id),
            field: val.field.parse()?,
            value: val.value,
        })
    }
}

#[derive(Args, Debug)]
struct StepIdArgs {
    /// Id of the step (shown on its card)
    id: u64,
}

impl From<StepIdArgs> for params::Id {
    fn from(val: StepIdArgs) -> Self {
        params::Id {
            id: StepId(val.id),
        }
    }
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Print the document instead of writing it to the output directory
    #[arg(long)]
    stdout: bool,
}

impl SessionCommand {
    fn set_value(&mut self, value: String) {
        match self {
            SessionCommand::Set(args) => args.value = value,
            SessionCommand::Edit(args) => args.value = value,
            _ => {}
        }
    }
}

/// Splits a line's words into the part clap parses and the free-text value.
///
/// `set <field>` and `edit <id> <field>` are followed by a value that clap
/// never sees, so words like `-h` or `--` stay part of it.
fn split_value<'a>(words: &[&'a str]) -> (Vec<&'a str>, String) {
    let head_len = match words.first().copied() {
        Some("set") => 2,
        Some("edit" | "e") => 3,
        _ => words.len(),
    }
    .min(words.len());

    let (head, value) = words.split_at(head_len);
    (head.to_vec(), value.join(" "))
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session writing its output to `W`.
pub struct Session<W: Write> {
    store: JourneyStore,
    renderer: TerminalRenderer,
    output_dir: PathBuf,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(renderer: TerminalRenderer, output_dir: PathBuf, out: W) -> Self {
        Self {
            store: JourneyStore::new(),
            renderer,
            output_dir,
            out,
        }
    }

    #[cfg(test)]
    fn store(&self) -> &JourneyStore {
        &self.store
    }

    /// Processes `input` line by line until it ends or `quit` is read.
    ///
    /// With `prompt` set, a prompt is printed before each line.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily rather than ending
    /// the session.
    pub fn run(&mut self, mut input: impl BufRead, prompt: bool) -> Result<()> {
        if prompt {
            self.render(&self.store.snapshot().to_string())?;
            writeln!(self.out, "Type 'help' for the list of commands.")?;
        }

        let mut buf = Vec::new();
        loop {
            if prompt {
                write!(self.out, "cuj> ")?;
                self.out.flush()?;
            }

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read session input")?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                warn!("session input is not valid UTF-8, decoding lossily");
            }
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Runs one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let (head, value) = split_value(&words);
        match SessionLine::try_parse_from(head) {
            Ok(SessionLine { mut command }) => {
                command.set_value(value);
                self.dispatch(command)
            }
            Err(err) => {
                write!(self.out, "{}", err.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Flow> {
        debug!("session command: {command:?}");

        let status = match command {
            SessionCommand::Set(args) => {
                match params::UpdateJourneyField::try_from(args)
                    .and_then(|request| request.apply_to(&mut self.store))
                {
                    Ok(update) => OperationStatus::success(format!("Set {}", update.field())),
                    Err(e) => OperationStatus::failure(e.to_string()),
                }
            }
            SessionCommand::Add => {
                let id = self.store.add_step();
                OperationStatus::success(format!(
                    "Added step {} (id {id})",
                    self.store.journey().steps.len()
                ))
            }
            SessionCommand::Remove(args) => {
                let params::Id { id } = args.into();
                let removed = self.store.remove_step(id);
                let reason = if self.store.journey().steps.len() == 1 && !removed {
                    "a journey keeps at least one step".to_string()
                } else {
                    format!("no step with id {id}")
                };
                OperationStatus::from_outcome(removed, format!("Removed step with id {id}"), reason)
            }
            SessionCommand::Edit(args) => match params::UpdateStep::try_from(args) {
                Ok(request) => {
                    let (id, field) = (request.id, request.field);
                    OperationStatus::from_outcome(
                        request.apply_to(&mut self.store),
                        format!("Set {field} on step with id {id}"),
                        format!("no step with id {id}"),
                    )
                }
                Err(e) => OperationStatus::failure(e.to_string()),
            },
            SessionCommand::Toggle(args) => {
                let params::Id { id } = args.into();
                let state = if self.store.toggle_step(id) {
                    "expanded"
                } else {
                    "collapsed"
                };
                OperationStatus::success(format!("Step with id {id} {state}"))
            }
            SessionCommand::Show => {
                let snapshot = self.store.snapshot();
                self.render(&StepCards(&snapshot).to_string())?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Json => {
                match self.store.snapshot().to_json() {
                    Ok(json) => writeln!(self.out, "{json}")?,
                    Err(e) => self.render(&OperationStatus::failure(e.to_string()).to_string())?,
                }
                return Ok(Flow::Continue);
            }
            SessionCommand::Preview => {
                let markdown = MarkdownDocument(self.store.journey()).to_string();
                self.render(&markdown)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Export(ExportArgs { stdout: true }) => {
                let export = export_markdown(self.store.journey());
                self.out.write_all(export.as_bytes())?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Export(ExportArgs { stdout: false }) => {
                match export_markdown(self.store.journey()).save_in(&self.output_dir) {
                    Ok(path) => {
                        OperationStatus::success(format!("Exported journey to {}", path.display()))
                    }
                    Err(e) => OperationStatus::failure(e.to_string()),
                }
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        };

        self.render(&status.to_string())?;
        Ok(Flow::Continue)
    }

    fn render(&mut self, markdown: &str) -> Result<()> {
        self.renderer
            .render(&mut self.out, markdown)
            .context("Failed to write session output")
    }
}
