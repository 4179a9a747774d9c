//! Display wrappers for the authoring view.
//!
//! The exported document has its own projection in [`crate::export`]; this
//! module holds what presentation layers show while a journey is being
//! edited. Everything formats as Markdown so the terminal renderer and MCP
//! clients can present it directly.
//!
//! - [`cards`]: step-card preview of a [`crate::store::Snapshot`], honoring
//!   the expansion set
//! - [`status`]: one-line outcome of an intent ([`OperationStatus`])

pub mod cards;
pub mod status;

pub use cards::StepCards;
pub use status::OperationStatus;
