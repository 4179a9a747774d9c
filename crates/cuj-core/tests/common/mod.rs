use cuj_core::{JourneyStore, JourneyUpdate, StepField, StepId};

/// Store holding the "Signup" journey: one step tapping a button on the home
/// screen, with a known pain point and no notes.
pub fn signup_store() -> JourneyStore {
    let mut store = JourneyStore::new();
    store.update_journey_field(JourneyUpdate::Title("Signup".to_string()));
    store.update_step(StepId(1), StepField::Action, "Tap button");
    store.update_step(StepId(1), StepField::Screen, "Home");
    store.update_step(StepId(1), StepField::PainPoints, "Slow load");
    store
}
