//! Parameter structures for journey intents.
//!
//! These are the interface-neutral forms of the store operations that
//! presentation layers forward. They carry no framework derives beyond serde;
//! JSON schemas are generated only when the `schema` feature is enabled (the
//! MCP server needs them, the library does not).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Session Args   │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  -> JourneyStore│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers convert their own argument types into these with
//! `From`/`TryFrom`, then hand them to [`crate::JourneyStore`] via the
//! `apply_to` methods.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{JourneyField, JourneyUpdate, StepField, StepId},
    store::JourneyStore,
};

/// Parameters for operations addressing one step (remove, toggle).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The id of the step to operate on
    pub id: StepId,
}

/// Parameters for setting one journey header field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateJourneyField {
    /// Field to set: title, description, userPersona, goal or platform
    pub field: JourneyField,
    /// New value. For platform one of "iOS", "Android", "Both"
    #[serde(default)]
    pub value: String,
}

impl UpdateJourneyField {
    /// Validates the value and applies the update.
    ///
    /// # Errors
    ///
    /// * `CujError::InvalidInput` - When the platform value is not a known
    ///   platform
    pub fn apply_to(self, store: &mut JourneyStore) -> Result<JourneyUpdate> {
        let update = JourneyUpdate::new(self.field, self.value)?;
        store.update_journey_field(update.clone());
        Ok(update)
    }
}

/// Parameters for setting one text field of a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStep {
    /// Id of the step to edit
    pub id: StepId,
    /// Field to set: action, screen, userInput, systemResponse,
    /// expectedOutcome, painPoints or notes
    pub field: StepField,
    /// New value; an empty string clears the field
    #[serde(default)]
    pub value: String,
}

impl UpdateStep {
    /// Applies the edit and returns whether the step exists.
    pub fn apply_to(self, store: &mut JourneyStore) -> bool {
        store.update_step(self.id, self.field, self.value)
    }
}
