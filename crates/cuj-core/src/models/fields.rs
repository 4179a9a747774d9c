//! Field selectors for journey and step edits.
//!
//! Presentation layers name fields with strings ("userPersona",
//! "pain-points", ...). These enums are the typed form the store works with;
//! parsing is forgiving about case and separators so the same names work on
//! the command line and over JSON.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Platform;
use crate::error::{CujError, Result};

/// Lowercases and strips `-`, `_` and spaces so `user-persona`,
/// `user_persona` and `userPersona` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Top-level journey field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum JourneyField {
    Title,
    Description,
    UserPersona,
    Goal,
    Platform,
}

impl JourneyField {
    pub const ALL: [JourneyField; 5] = [
        JourneyField::Title,
        JourneyField::Description,
        JourneyField::UserPersona,
        JourneyField::Goal,
        JourneyField::Platform,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyField::Title => "title",
            JourneyField::Description => "description",
            JourneyField::UserPersona => "userPersona",
            JourneyField::Goal => "goal",
            JourneyField::Platform => "platform",
        }
    }
}

impl FromStr for JourneyField {
    type Err = CujError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "title" => Ok(JourneyField::Title),
            "description" => Ok(JourneyField::Description),
            "userpersona" | "persona" => Ok(JourneyField::UserPersona),
            "goal" | "usergoal" => Ok(JourneyField::Goal),
            "platform" => Ok(JourneyField::Platform),
            _ => Err(CujError::invalid_input("field").with_reason(format!(
                "unknown journey field '{s}' (expected title, description, persona, goal or platform)"
            ))),
        }
    }
}

impl fmt::Display for JourneyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text field of a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum StepField {
    Action,
    Screen,
    UserInput,
    SystemResponse,
    ExpectedOutcome,
    PainPoints,
    Notes,
}

impl StepField {
    pub const ALL: [StepField; 7] = [
        StepField::Action,
        StepField::Screen,
        StepField::UserInput,
        StepField::SystemResponse,
        StepField::ExpectedOutcome,
        StepField::PainPoints,
        StepField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepField::Action => "action",
            StepField::Screen => "screen",
            StepField::UserInput => "userInput",
            StepField::SystemResponse => "systemResponse",
            StepField::ExpectedOutcome => "expectedOutcome",
            StepField::PainPoints => "painPoints",
            StepField::Notes => "notes",
        }
    }

    /// Human-readable label, as used in exported documents.
    pub fn label(&self) -> &'static str {
        match self {
            StepField::Action => "Action",
            StepField::Screen => "Screen",
            StepField::UserInput => "User Input",
            StepField::SystemResponse => "System Response",
            StepField::ExpectedOutcome => "Expected Outcome",
            StepField::PainPoints => "Pain Points",
            StepField::Notes => "Notes",
        }
    }
}

impl FromStr for StepField {
    type Err = CujError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "action" | "title" => Ok(StepField::Action),
            "screen" | "view" => Ok(StepField::Screen),
            "userinput" | "input" => Ok(StepField::UserInput),
            "systemresponse" | "response" => Ok(StepField::SystemResponse),
            "expectedoutcome" | "outcome" => Ok(StepField::ExpectedOutcome),
            "painpoints" | "pain" => Ok(StepField::PainPoints),
            "notes" | "note" => Ok(StepField::Notes),
            _ => Err(CujError::invalid_input("field").with_reason(format!(
                "unknown step field '{s}' (expected action, screen, input, response, outcome, pain-points or notes)"
            ))),
        }
    }
}

impl fmt::Display for StepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed edit of one journey header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyUpdate {
    Title(String),
    Description(String),
    UserPersona(String),
    Goal(String),
    Platform(Platform),
}

impl JourneyUpdate {
    /// Builds an update from a field and its string value.
    ///
    /// # Errors
    ///
    /// Returns `CujError::InvalidInput` when `field` is
    /// [`JourneyField::Platform`] and `value` is not a known platform.
    pub fn new(field: JourneyField, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Ok(match field {
            JourneyField::Title => JourneyUpdate::Title(value),
            JourneyField::Description => JourneyUpdate::Description(value),
            JourneyField::UserPersona => JourneyUpdate::UserPersona(value),
            JourneyField::Goal => JourneyUpdate::Goal(value),
            JourneyField::Platform => JourneyUpdate::Platform(value.parse()?),
        })
    }

    /// Parses both the field name and the value.
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self> {
        Self::new(field.parse()?, value)
    }

    /// The field this update targets.
    pub fn field(&self) -> JourneyField {
        match self {
            JourneyUpdate::Title(_) => JourneyField::Title,
            JourneyUpdate::Description(_) => JourneyField::Description,
            JourneyUpdate::UserPersona(_) => JourneyField::UserPersona,
            JourneyUpdate::Goal(_) => JourneyField::Goal,
            JourneyUpdate::Platform(_) => JourneyField::Platform,
        }
    }
}
