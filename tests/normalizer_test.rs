use voxform::domain::RawFieldMapping;
use voxform::domain::normalizer::normalize;

fn mapping(pairs: &[(&str, &str)]) -> RawFieldMapping {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_any_input_when_normalizing_then_output_keys_are_subset_of_input_keys() {
    let raw = mapping(&[
        ("firstName", "John"),
        ("email", "JOHN@EXAMPLE.COM"),
        ("note", "n/a"),
        ("phone", "555-0123"),
    ]);

    let normalized = normalize(&raw);

    for key in normalized.keys() {
        assert!(raw.contains_key(key), "unexpected key: {}", key);
    }
}

#[test]
fn given_normalized_output_when_normalizing_again_then_result_is_unchanged() {
    let raw = mapping(&[
        ("firstName", "  John "),
        ("userEmail", "John Doe@Example.com"),
        ("phoneNumber", "(555) 012-3456"),
        ("gender", "M"),
        ("city", "Boston"),
    ]);

    let once = normalize(&raw);
    let twice = normalize(&once);

    assert_eq!(once, twice);
}

#[test]
fn given_email_field_when_normalizing_then_value_is_lowercase_without_whitespace() {
    let raw = mapping(&[("contactEmail", "  John Smith@Example.COM ")]);

    let normalized = normalize(&raw);

    let value = &normalized["contactEmail"];
    assert_eq!(value, "johnsmith@example.com");
    assert!(!value.chars().any(char::is_whitespace));
    assert_eq!(value.to_lowercase(), *value);
}

#[test]
fn given_phone_field_when_normalizing_then_only_digits_remain() {
    let raw = mapping(&[("phoneNumber", "+1 (555) 012-3456")]);

    let normalized = normalize(&raw);

    assert_eq!(normalized["phoneNumber"], "15550123456");
}

#[test]
fn given_phone_field_with_no_digits_when_normalizing_then_key_is_dropped() {
    let raw = mapping(&[("phone", "one two three")]);

    let normalized = normalize(&raw);

    assert!(normalized.is_empty());
}

#[test]
fn given_male_gender_variants_when_normalizing_then_value_is_male() {
    for input in ["M", "man", "Boy", "m", "MAN"] {
        let normalized = normalize(&mapping(&[("gender", input)]));
        assert_eq!(normalized["gender"], "male", "input: {}", input);
    }
}

#[test]
fn given_female_gender_variants_when_normalizing_then_value_is_female() {
    for input in ["f", "Woman", "GIRL", "F"] {
        let normalized = normalize(&mapping(&[("gender", input)]));
        assert_eq!(normalized["gender"], "female", "input: {}", input);
    }
}

#[test]
fn given_unrecognized_gender_value_when_normalizing_then_value_passes_through_lowercased() {
    let normalized = normalize(&mapping(&[("gender", "Nonbinary")]));

    assert_eq!(normalized["gender"], "nonbinary");
}

#[test]
fn given_sentinel_values_when_normalizing_then_keys_are_dropped() {
    let raw = mapping(&[("a", "None"), ("b", " null "), ("c", "N/A"), ("d", "  ")]);

    let normalized = normalize(&raw);

    assert!(normalized.is_empty());
}

#[test]
fn given_plain_field_when_normalizing_then_value_is_trimmed_but_unmodified() {
    let raw = mapping(&[("streetAddress", "  123 Main Street  ")]);

    let normalized = normalize(&raw);

    assert_eq!(normalized["streetAddress"], "123 Main Street");
}

#[test]
fn given_field_id_with_phone_substring_when_normalizing_then_phone_rule_applies() {
    // Substring dispatch is deliberate: "telephoneNote" hits the phone rule.
    let raw = mapping(&[("telephoneNote", "call 555 after 5pm")]);

    let normalized = normalize(&raw);

    assert_eq!(normalized["telephoneNote"], "5555");
}

#[test]
fn given_email_rule_before_phone_rule_when_both_substrings_match_then_first_wins() {
    let raw = mapping(&[("emailPhone", "John@Example.com 123")]);

    let normalized = normalize(&raw);

    assert_eq!(normalized["emailPhone"], "john@example.com123");
}

#[test]
fn given_mixed_valid_and_sentinel_fields_when_normalizing_then_only_valid_survive() {
    let raw = mapping(&[("phone", "one two three"), ("note", "n/a")]);

    let normalized = normalize(&raw);

    assert!(normalized.is_empty());
}
