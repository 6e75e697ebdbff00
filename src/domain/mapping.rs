use std::collections::BTreeMap;

/// Field-id to extracted-value pairs as returned by the language model,
/// before any cleanup. Keys are always a subset of the schema's id set;
/// hallucinated ids are filtered at the mapper boundary.
pub type RawFieldMapping = BTreeMap<String, String>;

/// The mapping after normalization: never contains empty or sentinel
/// values, same key space as the raw mapping it came from.
pub type NormalizedFieldMapping = BTreeMap<String, String>;
