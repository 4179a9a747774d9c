//! Journey store: the single owner of the document being authored.
//!
//! The store holds the [`Journey`] together with the [`ExpansionSet`] (which
//! step cards are shown expanded). Every mutation replaces the stored values
//! copy-on-write, so a [`Snapshot`] handed out earlier never observes later
//! edits.
//!
//! ```text
//! ┌─────────────────┐  intents   ┌─────────────────┐  snapshot  ┌─────────────────┐
//! │  Presentation   │───────────▶│  JourneyStore   │───────────▶│    Renderer /   │
//! │ (session, MCP)  │            │                 │            │    Exporter     │
//! └─────────────────┘            └─────────────────┘            └─────────────────┘
//! ```
//!
//! All operations are total. Ids that match no step are ignored; the boolean
//! results only tell the caller whether anything changed.
//!
//! # Examples
//!
//! ```rust
//! use cuj_core::{JourneyStore, StepField, StepId};
//!
//! let mut store = JourneyStore::new();
//! let second = store.add_step();
//! assert_eq!(second, StepId(2));
//!
//! store.update_step(second, StepField::Action, "Tap button");
//! assert!(store.remove_step(StepId(1)));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.journey().steps[0].step_number, 1);
//! assert_eq!(snapshot.journey().steps[0].action, "Tap button");
//! ```

use std::{collections::BTreeSet, sync::Arc};

use log::debug;

use crate::{
    error::Result,
    models::{Journey, JourneyUpdate, Step, StepField, StepId},
};


/// Ids of the step cards currently shown expanded.
///
/// This is view state only; it has no effect on exported documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet(BTreeSet<StepId>);

impl ExpansionSet {
    pub fn contains(&self, id: StepId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = StepId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, id: StepId) {
        self.0.insert(id);
    }

    fn remove(&mut self, id: StepId) -> bool {
        self.0.remove(&id)
    }
}

impl FromIterator<StepId> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = StepId>>(iter: I) -> Self {
        ExpansionSet(iter.into_iter().collect())
    }
}

/// Immutable view of the store at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    journey: Arc<Journey>,
    expanded: Arc<ExpansionSet>,
}

impl Snapshot {
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    /// Whether the card for `id` is shown expanded.
    pub fn is_expanded(&self, id: StepId) -> bool {
        self.expanded.contains(id)
    }

    /// Pretty JSON of the journey. The expansion set is not included.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.journey())?)
    }
}

/// Owner of the journey being authored and its view state.
#[derive(Debug, Clone)]
pub struct JourneyStore {
    journey: Arc<Journey>,
    expanded: Arc<ExpansionSet>,
    /// Highest id ever handed out, so removed ids are never issued again.
    last_issued: StepId,
}

impl JourneyStore {
    /// Creates a store holding a blank journey whose single step is
    /// expanded.
    pub fn new() -> Self {
        let journey = Journey::new();
        let expanded = journey.steps.iter().map(|step| step.id).collect();
        let last_issued = journey.max_step_id().unwrap_or(StepId(0));
        Self {
            journey: Arc::new(journey),
            expanded: Arc::new(expanded),
            last_issued,
        }
    }

    /// Returns the current snapshot. Cloning the snapshot is cheap.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            journey: Arc::clone(&self.journey),
            expanded: Arc::clone(&self.expanded),
        }
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    /// Sets one header field of the journey.
    pub fn update_journey_field(&mut self, update: JourneyUpdate) {
        debug!("update_journey_field: {}", update.field());
        Arc::make_mut(&mut self.journey).apply(update);
    }

    /// Appends an empty step, expands it and returns its id.
    pub fn add_step(&mut self) -> StepId {
        let highest = self
            .journey
            .max_step_id()
            .map_or(self.last_issued, |max| max.max(self.last_issued));
        let id = highest.next();
        self.last_issued = id;

        let journey = Arc::make_mut(&mut self.journey);
        let step_number = journey.steps.len() + 1;
        journey.steps.push(Step::empty(id, step_number));
        Arc::make_mut(&mut self.expanded).insert(id);

        debug!("add_step: id={id} step_number={step_number}");
        id
    }

    /// Removes a step and renumbers the rest.
    ///
    /// The last remaining step is never removed. Returns whether a step was
    /// removed.
    pub fn remove_step(&mut self, id: StepId) -> bool {
        if self.journey.steps.len() == 1 {
            debug!("remove_step: id={id} ignored, journey keeps at least one step");
            return false;
        }

        let removed = self.journey.step(id).is_some();
        if removed {
            let journey = Arc::make_mut(&mut self.journey);
            journey.steps.retain(|step| step.id != id);
            journey.renumber();
        }
        if self.expanded.contains(id) {
            Arc::make_mut(&mut self.expanded).remove(id);
        }

        debug!("remove_step: id={id} removed={removed}");
        removed
    }

    /// Sets a text field on the step with `id`. Returns whether the step
    /// exists.
    pub fn update_step(&mut self, id: StepId, field: StepField, value: impl Into<String>) -> bool {
        let Some(index) = self.journey.steps.iter().position(|step| step.id == id) else {
            debug!("update_step: id={id} not found");
            return false;
        };

        let journey = Arc::make_mut(&mut self.journey);
        *journey.steps[index].field_mut(field) = value.into();
        debug!("update_step: id={id} field={field}");
        true
    }

    /// Flips whether the card for `id` is expanded and returns the new
    /// state.
    pub fn toggle_step(&mut self, id: StepId) -> bool {
        let expanded = Arc::make_mut(&mut self.expanded);
        let now_expanded = if expanded.remove(id) {
            false
        } else {
            expanded.insert(id);
            true
        };
        debug!("toggle_step: id={id} expanded={now_expanded}");
        now_expanded
    }
}

impl Default for JourneyStore {
    fn default() -> Self {
        Self::new()
    }
}
