//! Deterministic cleanup of the raw field mapping. Pure functions only:
//! no I/O, no failure mode. The rules mirror what clients expect to land
//! in the form verbatim, so changes here are behavioral changes.

use crate::domain::{NormalizedFieldMapping, RawFieldMapping};

/// Tokens that semantically mean "no value"; matched case-insensitively
/// after trimming.
const SENTINELS: [&str; 3] = ["none", "null", "n/a"];

type ValueTransform = fn(&str) -> String;

/// Per-field transforms keyed by a substring of the (lowercased) field id,
/// first match wins. Substring matching is a deliberate compatibility
/// heuristic: `telephoneNote` hits the phone rule. Swapping this table for
/// typed dispatch on `FieldDescriptor::field_type` is a local change.
const FIELD_TRANSFORMS: [(&str, ValueTransform); 3] = [
    ("email", normalize_email),
    ("phone", normalize_phone),
    ("gender", normalize_gender),
];

/// Apply the cleanup rules to every entry of `raw`. The output key set is
/// always a subset of the input key set, and normalizing twice gives the
/// same result as normalizing once.
pub fn normalize(raw: &RawFieldMapping) -> NormalizedFieldMapping {
    let mut normalized = NormalizedFieldMapping::new();

    for (field_id, value) in raw {
        let trimmed = value.trim();
        if is_blank(trimmed) {
            continue;
        }

        let transformed = transform_for_field(field_id, trimmed);

        // A transform can empty a value out (e.g. a phone field holding no
        // digits); such entries are dropped, not kept as empty strings.
        if is_blank(transformed.trim()) {
            continue;
        }

        normalized.insert(field_id.clone(), transformed);
    }

    normalized
}

fn transform_for_field(field_id: &str, value: &str) -> String {
    let id_lower = field_id.to_lowercase();
    for (marker, transform) in FIELD_TRANSFORMS {
        if id_lower.contains(marker) {
            return transform(value);
        }
    }
    value.to_string()
}

fn is_blank(value: &str) -> bool {
    value.is_empty() || SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s))
}

fn normalize_email(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn normalize_phone(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn normalize_gender(value: &str) -> String {
    let value = value.trim().to_lowercase();
    match value.as_str() {
        "m" | "man" | "boy" => "male".to_string(),
        "f" | "woman" | "girl" => "female".to_string(),
        _ => value,
    }
}
