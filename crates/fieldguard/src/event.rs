//! Host events

/// Something happened to a bound field.
///
/// Every event triggers a (gated) validation; only `TextChanged` reformats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The raw widget text changed.
    TextChanged(String),
    /// The field lost focus.
    FocusLost,
    /// The user asked to submit, e.g. pressed return.
    SubmitRequested,
}

impl FieldEvent {
    /// Returns the event name used in log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TextChanged(_) => "text_changed",
            Self::FocusLost => "focus_lost",
            Self::SubmitRequested => "submit_requested",
        }
    }
}
