use crate::domain::FormSchema;

/// Build the instruction prompt shared by every mapping provider. The
/// numbered rules are a behavioral contract with the client extension:
/// unmentioned fields stay absent, values arrive pre-formatted per field
/// type, and an empty object means nothing was extractable.
pub fn build_mapping_prompt(transcript: &str, schema: &FormSchema) -> String {
    let fields_json =
        serde_json::to_string_pretty(&schema.fields).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"You are an intelligent form-filling assistant. Extract information from the user's voice input and map it to the form fields below. Correct spelling errors, mishears, and typos in the transcription using each field's label and type as context.

FORM FIELDS:
{fields_json}

USER'S SPEECH (RAW TRANSCRIPTION):
"{transcript}"

RULES:
1. ONLY include fields the user explicitly mentioned. Never fill in a field that was not spoken about, and never use placeholder values.
2. Format every value by its field type:
   - names: proper capitalization ("jon smoth" -> "John Smith")
   - emails: lowercase with no spaces ("john at gmail dot com" -> "john@gmail.com")
   - phone numbers: digits only ("won too three" -> "123")
   - dates: YYYY-MM-DD ("january fifteenth nineteen eighty five" -> "1985-01-15")
   - checkboxes and radio buttons: the string "true" for yes/agree/check/enable, "false" for no/disagree/uncheck/disable
3. Correct speech recognition artifacts: "at the rate" -> "@", "dot com" -> ".com", "gmial" -> "gmail", and similar phonetic mistakes.
4. If nothing in the speech matches any field, return an empty object for mapped_fields.

Respond with a single JSON object of the shape {{"mapped_fields": {{"<field_id>": "<value>"}}}} and nothing else."#
    )
}
