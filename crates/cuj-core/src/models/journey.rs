//! Journey model definition.

use serde::{Deserialize, Serialize};

use super::{JourneyUpdate, Platform, Step, StepId};

/// A Customer User Journey document: header fields plus ordered steps.
///
/// Card expansion state is kept next to the journey in
/// [`crate::store::Snapshot`] and is never serialized or exported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub title: String,
    pub description: String,
    pub user_persona: String,
    pub goal: String,
    pub platform: Platform,

    /// Steps in display and export order
    pub steps: Vec<Step>,
}

impl Journey {
    /// Creates a blank journey holding a single empty step with id 1.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            user_persona: String::new(),
            goal: String::new(),
            platform: Platform::default(),
            steps: vec![Step::empty(StepId(1), 1)],
        }
    }

    /// Title used for the document heading.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Customer User Journey"
        } else {
            &self.title
        }
    }

    /// Looks up a step by id.
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Largest id currently in use, if any.
    pub fn max_step_id(&self) -> Option<StepId> {
        self.steps.iter().map(|step| step.id).max()
    }

    pub(crate) fn apply(&mut self, update: JourneyUpdate) {
        match update {
            JourneyUpdate::Title(value) => self.title = value,
            JourneyUpdate::Description(value) => self.description = value,
            JourneyUpdate::UserPersona(value) => self.user_persona = value,
            JourneyUpdate::Goal(value) => self.goal = value,
            JourneyUpdate::Platform(platform) => self.platform = platform,
        }
    }

    /// Reassigns every step number from its position.
    pub(crate) fn renumber(&mut self) {
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.step_number = index + 1;
        }
    }
}

impl Default for Journey {
    fn default() -> Self {
        Self::new()
    }
}
