//! Outcomes as presented in the tree designer.

/// A named exit of a node plus its localized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Identifier the engine matches against [`crate::Action::Goto`].
    pub id: String,
    pub display_name: String,
}

impl Outcome {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Language tags in the order the administrator prefers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferredLocales(Vec<String>);

impl PreferredLocales {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Candidate lookup keys: each tag as given, then its primary subtag.
    ///
    /// `["fr-CA", "de"]` yields `fr-CA`, `fr`, `de`.
    pub fn candidates(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for tag in &self.0 {
            let tag = tag.as_str();
            if !out.contains(&tag) {
                out.push(tag);
            }
            if let Some((primary, _)) = tag.split_once(|c: char| c == '-' || c == '_') {
                if !out.contains(&primary) {
                    out.push(primary);
                }
            }
        }
        out
    }
}

/// Supplies the outcomes a node can produce.
///
/// Labels are for display only; they never influence routing.
pub trait OutcomeProvider {
    fn outcomes(&self, locales: &PreferredLocales) -> Vec<Outcome>;
}
