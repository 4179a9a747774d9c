//! Step model definition and related functionality.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StepField;

/// Stable identity of a step within a journey.
///
/// Ids are handed out in increasing order and never reused, so they stay
/// valid handles across removals even though step numbers shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct StepId(pub u64);

impl StepId {
    /// The id that follows this one.
    pub fn next(self) -> Self {
        StepId(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(id: u64) -> Self {
        StepId(id)
    }
}

/// One interaction within a journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique identifier for the step
    pub id: StepId,

    /// 1-based position of the step in its journey
    pub step_number: usize,

    /// What the user does; used as the step title
    pub action: String,

    /// Screen or view the step happens on
    pub screen: String,

    pub user_input: String,
    pub system_response: String,
    pub expected_outcome: String,

    /// Known problems or edge cases, exported only when filled in
    pub pain_points: String,

    /// Free-form notes, exported only when filled in
    pub notes: String,
}

impl Step {
    /// Creates a step with every text field empty.
    pub fn empty(id: StepId, step_number: usize) -> Self {
        Self {
            id,
            step_number,
            action: String::new(),
            screen: String::new(),
            user_input: String::new(),
            system_response: String::new(),
            expected_outcome: String::new(),
            pain_points: String::new(),
            notes: String::new(),
        }
    }

    /// Title shown for the step, falling back to "Untitled Step".
    pub fn title(&self) -> &str {
        if self.action.is_empty() {
            "Untitled Step"
        } else {
            &self.action
        }
    }

    /// Reads a text field.
    pub fn field(&self, field: StepField) -> &str {
        match field {
            StepField::Action => &self.action,
            StepField::Screen => &self.screen,
            StepField::UserInput => &self.user_input,
            StepField::SystemResponse => &self.system_response,
            StepField::ExpectedOutcome => &self.expected_outcome,
            StepField::PainPoints => &self.pain_points,
            StepField::Notes => &self.notes,
        }
    }

    /// Mutable access to a text field.
    pub(crate) fn field_mut(&mut self, field: StepField) -> &mut String {
        match field {
            StepField::Action => &mut self.action,
            StepField::Screen => &mut self.screen,
            StepField::UserInput => &mut self.user_input,
            StepField::SystemResponse => &mut self.system_response,
            StepField::ExpectedOutcome => &mut self.expected_outcome,
            StepField::PainPoints => &mut self.pain_points,
            StepField::Notes => &mut self.notes,
        }
    }
}
