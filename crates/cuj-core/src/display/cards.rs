//! Step-card preview of a snapshot.
//!
//! This is the authoring view rather than the exported document: every card
//! shows its id so it can be addressed, expanded cards list all their fields
//! (including empty ones), and collapsed cards show only their heading.

use std::fmt;

use crate::{
    models::{Step, StepField},
    store::Snapshot,
};

const EXPANDED_ICON: &str = "▾";
const COLLAPSED_ICON: &str = "▸";

/// Display wrapper rendering a snapshot as step cards.
pub struct StepCards<'a>(pub &'a Snapshot);

fn field_line(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        writeln!(f, "- **{label}**: _empty_")
    } else {
        writeln!(f, "- **{label}**: {value}")
    }
}

impl StepCards<'_> {
    fn fmt_card(f: &mut fmt::Formatter<'_>, step: &Step, expanded: bool) -> fmt::Result {
        let icon = if expanded { EXPANDED_ICON } else { COLLAPSED_ICON };
        writeln!(
            f,
            "### {icon} Step {}: {} (id {})",
            step.step_number,
            step.title(),
            step.id
        )?;
        writeln!(f)?;

        if expanded {
            for field in StepField::ALL {
                field_line(f, field.label(), step.field(field))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for StepCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let journey = self.0.journey();

        writeln!(f, "# {}", journey.display_title())?;
        writeln!(f)?;
        field_line(f, "Description", &journey.description)?;
        field_line(f, "User Persona", &journey.user_persona)?;
        field_line(f, "Goal", &journey.goal)?;
        field_line(f, "Platform", journey.platform.as_str())?;

        writeln!(f, "\n## Journey Steps")?;
        writeln!(f)?;
        for step in &journey.steps {
            Self::fmt_card(f, step, self.0.is_expanded(step.id))?;
        }

        Ok(())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", StepCards(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        models::{JourneyUpdate, StepField, StepId},
        store::JourneyStore,
    };

    #[test]
    fn test_expanded_card_lists_all_fields() {
        let mut store = JourneyStore::new();
        store.update_journey_field(JourneyUpdate::Title("Signup".to_string()));
        store.update_step(StepId(1), StepField::Action, "Tap button");
        store.update_step(StepId(1), StepField::Screen, "Home");

        let output = store.snapshot().to_string();

        assert!(output.starts_with("# Signup\n"));
        assert!(output.contains("### ▾ Step 1: Tap button (id 1)"));
        assert!(output.contains("- **Screen**: Home"));
        assert!(output.contains("- **Notes**: _empty_"));
        assert!(output.contains("- **Platform**: iOS"));
    }

    #[test]
    fn test_collapsed_card_shows_heading_only() {
        let mut store = JourneyStore::new();
        let second = store.add_step();
        store.update_step(second, StepField::Notes, "hidden while collapsed");
        store.toggle_step(second);

        let output = store.snapshot().to_string();

        assert!(output.contains("### ▸ Step 2: Untitled Step (id 2)"));
        assert!(!output.contains("hidden while collapsed"));
        assert!(output.contains("### ▾ Step 1: Untitled Step (id 1)"));
    }

    #[test]
    fn test_cards_follow_renumbering() {
        let mut store = JourneyStore::new();
        let second = store.add_step();
        store.update_step(second, StepField::Action, "Confirm email");
        store.remove_step(StepId(1));

        let output = store.snapshot().to_string();

        assert!(output.contains("### ▾ Step 1: Confirm email (id 2)"));
        assert!(!output.contains("(id 1)"));
    }
}
