use serde::Deserialize;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A line of input from the user
    TextInput(String),
    /// A spawned lookup finished
    LookupCompleted { seq: u64, outcome: LookupOutcome },
    /// Render a definition
    ShowDefinition(Definition),
    /// Render the error banner
    ShowError(String),
    /// Input stream closed (EOF)
    InputClosed,
}

/// Result of a single lookup request, with the failure cause already
/// logged at the call site
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Resolved(Definition),
    Failed,
}

/// Response payload of the dictionary service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    /// A missing `definition` array deserializes as empty
    #[serde(default, rename = "definition")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    pub definition: String,
}
