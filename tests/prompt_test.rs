use voxform::domain::{FieldDescriptor, FieldType, FormSchema};
use voxform::infrastructure::llm::prompt::build_mapping_prompt;

fn sample_schema() -> FormSchema {
    FormSchema {
        fields: vec![
            FieldDescriptor::new("firstName", "First Name", FieldType::Text),
            FieldDescriptor::new("email", "Email Address", FieldType::Email),
            FieldDescriptor::new("newsletter", "Subscribe", FieldType::Checkbox),
        ],
    }
}

#[test]
fn given_transcript_and_schema_when_building_prompt_then_both_are_embedded() {
    let prompt = build_mapping_prompt("my name is john", &sample_schema());

    assert!(prompt.contains("my name is john"));
    assert!(prompt.contains("firstName"));
    assert!(prompt.contains("Email Address"));
    assert!(prompt.contains("newsletter"));
}

#[test]
fn given_any_schema_when_building_prompt_then_extraction_rules_are_present() {
    let prompt = build_mapping_prompt("hello", &sample_schema());

    // Mentioned-fields-only contract
    assert!(prompt.contains("ONLY include fields the user explicitly mentioned"));
    // Type formatting contract
    assert!(prompt.contains("digits only"));
    assert!(prompt.contains("YYYY-MM-DD"));
    assert!(prompt.contains("\"true\""));
    assert!(prompt.contains("\"false\""));
    // Mishear correction contract
    assert!(prompt.contains("\"at the rate\" -> \"@\""));
    assert!(prompt.contains("\"dot com\" -> \".com\""));
    // Empty-object contract
    assert!(prompt.contains("empty object"));
}

#[test]
fn given_any_schema_when_building_prompt_then_output_shape_is_declared() {
    let prompt = build_mapping_prompt("hello", &sample_schema());

    assert!(prompt.contains("mapped_fields"));
}

#[test]
fn given_empty_transcript_when_building_prompt_then_prompt_is_still_well_formed() {
    let prompt = build_mapping_prompt("", &sample_schema());

    assert!(prompt.contains("USER'S SPEECH"));
    assert!(prompt.contains("\"\""));
}
