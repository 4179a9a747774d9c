//! Core library for authoring Customer User Journey (CUJ) documents.
//!
//! A journey is a header (title, description, persona, goal, platform) plus
//! an ordered list of steps. This crate provides the document model, the
//! [`JourneyStore`] that owns a journey while it is being edited, and the
//! Markdown exporter that turns a journey into a downloadable document.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): plain data, serializable with serde
//! - **Store** ([`store`]): the only writer; total operations producing
//!   copy-on-write [`Snapshot`]s
//! - **Export** ([`export`]): pure Markdown projection plus the file save
//! - **Display** ([`display`]): step-card preview and status lines for
//!   presentation layers
//!
//! # Quick Start
//!
//! ```rust
//! use cuj_core::{export::export_markdown, JourneyStore, JourneyUpdate, StepField, StepId};
//!
//! let mut store = JourneyStore::new();
//! store.update_journey_field(JourneyUpdate::Title("Signup".to_string()));
//! store.update_step(StepId(1), StepField::Action, "Tap button");
//! store.update_step(StepId(1), StepField::PainPoints, "Slow load");
//!
//! let export = export_markdown(store.snapshot().journey());
//! assert_eq!(export.file_name, "Signup.md");
//! assert!(export.contents.contains("**Pain Points:** Slow load"));
//! assert!(!export.contents.contains("**Notes:**"));
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{OperationStatus, StepCards};
pub use error::{CujError, Result};
pub use export::{export_markdown, MarkdownDocument, MarkdownExport};
pub use models::{Journey, JourneyField, JourneyUpdate, Platform, Step, StepField, StepId};
pub use store::{ExpansionSet, JourneyStore, Snapshot};
