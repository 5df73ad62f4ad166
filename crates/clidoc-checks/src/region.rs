//! The harness-facing view of a documentation region.

/// A span of documentation text subject to one check.
///
/// The harness owns the region; checks only read its text and set the
/// label it is reported under.
pub trait Region: Send {
    fn text(&self) -> &str;
    fn name(&mut self, label: &str);
}

/// Region backed by an owned string, for callers that have no richer
/// harness type of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRegion {
    pub text: String,
    pub label: Option<String>,
}

impl TextRegion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
        }
    }
}

impl Region for TextRegion {
    fn text(&self) -> &str {
        &self.text
    }

    fn name(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }
}
