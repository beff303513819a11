use crate::types::{Definition, LookupOutcome};

/// The one user-facing failure message; causes are logged, not surfaced
pub const LOOKUP_ERROR_MESSAGE: &str = "Word not found or an error occurred!";

/// Mutually exclusive interaction state of a lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Idle,
    Loading,
    Success(Definition),
    Failure(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }
}

impl Default for LookupState {
    fn default() -> Self {
        LookupState::Idle
    }
}

/// A submission accepted by the controller, to be issued by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    /// Trimmed word to look up
    pub word: String,
    /// Sequence number for discarding stale completions
    pub seq: u64,
}

/// Owns the query text and lookup state; performs no I/O itself.
///
/// The caller issues the request for each accepted submission and reports
/// back through [`LookupController::complete`]. Overlapping submissions are
/// allowed; only the completion matching the latest sequence number is
/// applied, so a slow earlier response cannot overwrite a later one.
#[derive(Debug, Default)]
pub struct LookupController {
    query: String,
    seq: u64,
    state: LookupState,
}

impl LookupController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text. No validation, no side effect.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Accept the current query for lookup.
    ///
    /// Returns `None` without touching state when the trimmed query is
    /// empty. Otherwise clears any prior result or error, transitions to
    /// `Loading` and hands back the trimmed word with a fresh sequence
    /// number.
    pub fn begin_submit(&mut self) -> Option<Pending> {
        let word = self.query.trim();
        if word.is_empty() {
            return None;
        }

        self.seq += 1;
        self.state = LookupState::Loading;

        Some(Pending {
            word: word.to_string(),
            seq: self.seq,
        })
    }

    /// Apply a lookup outcome. Returns `false` for stale completions,
    /// which leave state untouched.
    pub fn complete(&mut self, seq: u64, outcome: LookupOutcome) -> bool {
        if seq != self.seq {
            return false;
        }

        self.state = match outcome {
            LookupOutcome::Resolved(def) => LookupState::Success(def),
            LookupOutcome::Failed => LookupState::Failure(LOOKUP_ERROR_MESSAGE.to_string()),
        };

        true
    }
}
