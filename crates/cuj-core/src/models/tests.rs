use crate::models::{Journey, JourneyField, JourneyUpdate, Platform, Step, StepField, StepId};

fn create_test_step() -> Step {
    Step {
        id: StepId(7),
        step_number: 2,
        action: "Tap button".to_string(),
        screen: "Home".to_string(),
        user_input: "Tap".to_string(),
        system_response: "Spinner".to_string(),
        expected_outcome: "Form shown".to_string(),
        pain_points: "Slow load".to_string(),
        notes: String::new(),
    }
}

#[test]
fn test_new_journey_has_one_empty_step() {
    let journey = Journey::new();

    assert_eq!(journey.steps.len(), 1);
    assert_eq!(journey.steps[0], Step::empty(StepId(1), 1));
    assert_eq!(journey.platform, Platform::Ios);
    assert!(journey.title.is_empty());
    assert_eq!(Journey::default(), journey);
}

#[test]
fn test_display_title_falls_back() {
    let mut journey = Journey::new();
    assert_eq!(journey.display_title(), "Customer User Journey");

    journey.title = "Signup".to_string();
    assert_eq!(journey.display_title(), "Signup");
}

#[test]
fn test_step_title_falls_back() {
    let mut step = create_test_step();
    assert_eq!(step.title(), "Tap button");

    step.action.clear();
    assert_eq!(step.title(), "Untitled Step");
}

#[test]
fn test_step_field_accessors_cover_every_field() {
    let mut step = Step::empty(StepId(1), 1);
    for field in StepField::ALL {
        *step.field_mut(field) = field.label().to_string();
    }
    for field in StepField::ALL {
        assert_eq!(step.field(field), field.label());
    }
    assert_eq!(step.pain_points, "Pain Points");
    assert_eq!(step.user_input, "User Input");
}

#[test]
fn test_platform_parsing() {
    assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
    assert_eq!("IOS".parse::<Platform>().unwrap(), Platform::Ios);
    assert_eq!(" android ".parse::<Platform>().unwrap(), Platform::Android);
    assert_eq!("Both".parse::<Platform>().unwrap(), Platform::Both);

    let err = "Windows".parse::<Platform>().unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("Windows"));
}

#[test]
fn test_platform_display_matches_offered_choices() {
    let labels: Vec<String> = Platform::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["iOS", "Android", "Both"]);
}

#[test]
fn test_journey_field_parsing_accepts_cli_and_json_names() {
    for name in ["userPersona", "user-persona", "user_persona", "persona", "USER PERSONA"] {
        assert_eq!(name.parse::<JourneyField>().unwrap(), JourneyField::UserPersona);
    }
    for field in JourneyField::ALL {
        assert_eq!(field.as_str().parse::<JourneyField>().unwrap(), field);
    }
    assert!("steps".parse::<JourneyField>().is_err());
}

#[test]
fn test_step_field_parsing_accepts_short_names() {
    assert_eq!("input".parse::<StepField>().unwrap(), StepField::UserInput);
    assert_eq!("response".parse::<StepField>().unwrap(), StepField::SystemResponse);
    assert_eq!("outcome".parse::<StepField>().unwrap(), StepField::ExpectedOutcome);
    assert_eq!("pain-points".parse::<StepField>().unwrap(), StepField::PainPoints);
    for field in StepField::ALL {
        assert_eq!(field.as_str().parse::<StepField>().unwrap(), field);
    }
    assert!("stepNumber".parse::<StepField>().is_err());
    assert!("id".parse::<StepField>().is_err());
}

#[test]
fn test_journey_update_validates_platform_only() {
    assert_eq!(
        JourneyUpdate::new(JourneyField::Title, "").unwrap(),
        JourneyUpdate::Title(String::new())
    );
    assert_eq!(
        JourneyUpdate::parse("goal", "Complete signup").unwrap().field(),
        JourneyField::Goal
    );
    assert!(JourneyUpdate::new(JourneyField::Platform, "Symbian").is_err());
    assert!(JourneyUpdate::parse("colour", "blue").is_err());
}

#[test]
fn test_journey_json_uses_camel_case_keys() {
    let mut journey = Journey::new();
    journey.user_persona = "New User".to_string();
    journey.steps[0] = create_test_step();

    let value = serde_json::to_value(&journey).unwrap();
    assert_eq!(value["userPersona"], "New User");
    assert_eq!(value["platform"], "iOS");
    assert_eq!(value["steps"][0]["id"], 7);
    assert_eq!(value["steps"][0]["stepNumber"], 2);
    assert_eq!(value["steps"][0]["painPoints"], "Slow load");
    assert!(value.get("expanded").is_none());
}

#[test]
fn test_field_enums_serialize_as_camel_case() {
    assert_eq!(
        serde_json::to_value(JourneyField::UserPersona).unwrap(),
        "userPersona"
    );
    assert_eq!(
        serde_json::from_value::<StepField>(serde_json::json!("expectedOutcome")).unwrap(),
        StepField::ExpectedOutcome
    );
}
