//! MCP tool handlers implementation
//!
//! The handlers hold the session's one [`JourneyStore`] behind an async
//! mutex, so tool calls are applied one at a time in arrival order. They
//! return plain Markdown text; turning that into protocol results is left to
//! the server in [`super`].

use std::{path::PathBuf, sync::Arc};

use cuj_core::{
    export::{export_markdown, to_markdown},
    params as core, JourneyStore, OperationStatus, Result, StepCards,
};
use log::debug;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The wrapper adds the MCP-side derives (Deserialize, JsonSchema) to core
// parameter types without the core crate knowing about the protocol.
// `#[serde(transparent)]` keeps the wire format identical to the core type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type UpdateJourneyField = McpParams<core::UpdateJourneyField>;
pub type UpdateStep = McpParams<core::UpdateStep>;

/// Handler implementations for the MCP server
#[derive(Clone)]
pub struct McpHandlers {
    store: Arc<Mutex<JourneyStore>>,
    output_dir: PathBuf,
}

impl McpHandlers {
    pub fn new(store: JourneyStore, output_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            output_dir,
        }
    }

    /// Step cards followed by the journey as JSON.
    pub async fn show_journey(&self) -> Result<String> {
        let snapshot = self.store.lock().await.snapshot();
        let json = snapshot.to_json()?;
        Ok(format!("{}\n```json\n{json}\n```\n", StepCards(&snapshot)))
    }

    pub async fn update_journey_field(&self, params: UpdateJourneyField) -> Result<String> {
        let params = params.into_inner();
        debug!("update_journey_field: {:?}", params);

        let update = params.apply_to(&mut *self.store.lock().await)?;
        Ok(OperationStatus::success(format!("Set {}", update.field())).to_string())
    }

    pub async fn add_step(&self) -> Result<String> {
        debug!("add_step");

        let mut store = self.store.lock().await;
        let id = store.add_step();
        let step_number = store.journey().steps.len();
        Ok(OperationStatus::success(format!("Added step {step_number} with id {id}")).to_string())
    }

    pub async fn remove_step(&self, params: Id) -> Result<String> {
        let core::Id { id } = params.into_inner();
        debug!("remove_step: {id}");

        let mut store = self.store.lock().await;
        let removed = store.remove_step(id);
        let reason = if !removed && store.journey().steps.len() == 1 {
            "a journey keeps at least one step".to_string()
        } else {
            format!("no step with id {id}")
        };
        Ok(OperationStatus::from_outcome(removed, format!("Removed step with id {id}"), reason)
            .to_string())
    }

    pub async fn update_step(&self, params: UpdateStep) -> Result<String> {
        let params = params.into_inner();
        debug!("update_step: {:?}", params);

        let (id, field) = (params.id, params.field);
        let found = params.apply_to(&mut *self.store.lock().await);
        Ok(OperationStatus::from_outcome(
            found,
            format!("Set {field} on step with id {id}"),
            format!("no step with id {id}"),
        )
        .to_string())
    }

    pub async fn toggle_step(&self, params: Id) -> Result<String> {
        let core::Id { id } = params.into_inner();
        debug!("toggle_step: {id}");

        let state = if self.store.lock().await.toggle_step(id) {
            "expanded"
        } else {
            "collapsed"
        };
        Ok(OperationStatus::success(format!("Step with id {id} {state}")).to_string())
    }

    pub async fn preview_markdown(&self) -> Result<String> {
        let snapshot = self.store.lock().await.snapshot();
        Ok(to_markdown(snapshot.journey()))
    }

    pub async fn export_markdown(&self) -> Result<String> {
        let snapshot = self.store.lock().await.snapshot();
        let path = export_markdown(snapshot.journey()).save_in(&self.output_dir)?;
        Ok(OperationStatus::success(format!("Exported journey to {}", path.display())).to_string())
    }
}
