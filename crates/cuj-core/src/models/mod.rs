//! Data models for journeys and steps.
//!
//! This module contains the document types that make up a Customer User
//! Journey. The Markdown projection of these types lives in
//! [`crate::export`] and the step-card preview in [`crate::display`], keeping
//! data structures apart from presentation.
//!
//! # Examples
//!
//! ```rust
//! use cuj_core::models::{Journey, JourneyUpdate, Platform, StepField};
//!
//! let journey = Journey::new();
//! assert_eq!(journey.platform, Platform::Ios);
//! assert_eq!(journey.display_title(), "Customer User Journey");
//!
//! let update = JourneyUpdate::parse("platform", "android").unwrap();
//! assert_eq!(update, JourneyUpdate::Platform(Platform::Android));
//!
//! let field: StepField = "pain-points".parse().unwrap();
//! assert_eq!(field.label(), "Pain Points");
//! ```

pub mod fields;
pub mod journey;
pub mod platform;
pub mod step;

#[cfg(test)]
mod tests;

pub use fields::{JourneyField, JourneyUpdate, StepField};
pub use journey::Journey;
pub use platform::Platform;
pub use step::{Step, StepId};
