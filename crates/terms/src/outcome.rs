//! The node's outcomes and their localized labels.

use std::fmt;

use nodes::{Outcome, OutcomeProvider, PreferredLocales};

/// Where the tree goes after this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermsOutcome {
    /// Nothing to accept.
    Continue,
    Accepted,
    Canceled,
}

impl TermsOutcome {
    pub const ALL: [TermsOutcome; 3] = [
        TermsOutcome::Continue,
        TermsOutcome::Accepted,
        TermsOutcome::Canceled,
    ];

    /// Identifier the engine routes on.
    pub fn id(self) -> &'static str {
        match self {
            TermsOutcome::Continue => "CONTINUE",
            TermsOutcome::Accepted => "ACCEPTED",
            TermsOutcome::Canceled => "CANCELED",
        }
    }

    /// Key of the display label in the message bundle.
    pub fn bundle_key(self) -> &'static str {
        match self {
            TermsOutcome::Continue => "okOutcome",
            TermsOutcome::Accepted => "acceptOutcome",
            TermsOutcome::Canceled => "cancelOutcome",
        }
    }
}

impl fmt::Display for TermsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Message bundle
// ---------------------------------------------------------------------------

type Bundle = &'static [(&'static str, &'static str)];

const DEFAULT_BUNDLE: Bundle = EN;

const EN: Bundle = &[
    ("okOutcome", "Continue"),
    ("acceptOutcome", "Accepted"),
    ("cancelOutcome", "Canceled"),
];

const FR: Bundle = &[
    ("okOutcome", "Continuer"),
    ("acceptOutcome", "Accepté"),
    ("cancelOutcome", "Annulé"),
];

const DE: Bundle = &[
    ("okOutcome", "Weiter"),
    ("acceptOutcome", "Akzeptiert"),
    ("cancelOutcome", "Abgebrochen"),
];

fn bundle(locale: &str) -> Option<Bundle> {
    match locale.to_ascii_lowercase().as_str() {
        "en" => Some(EN),
        "fr" => Some(FR),
        "de" => Some(DE),
        _ => None,
    }
}

fn lookup(bundle: Bundle, key: &str) -> Option<&'static str> {
    bundle.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Label for `key` in the first preferred locale that has one.
fn localized(locales: &PreferredLocales, key: &'static str) -> &'static str {
    locales
        .candidates()
        .into_iter()
        .filter_map(bundle)
        .find_map(|b| lookup(b, key))
        .or_else(|| lookup(DEFAULT_BUNDLE, key))
        .unwrap_or(key)
}

/// Lists `CONTINUE`, `ACCEPTED` and `CANCELED` for the tree designer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermsOutcomeProvider;

impl OutcomeProvider for TermsOutcomeProvider {
    fn outcomes(&self, locales: &PreferredLocales) -> Vec<Outcome> {
        TermsOutcome::ALL
            .iter()
            .map(|o| Outcome::new(o.id(), localized(locales, o.bundle_key())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(locales: &PreferredLocales) -> Vec<(String, String)> {
        TermsOutcomeProvider
            .outcomes(locales)
            .into_iter()
            .map(|o| (o.id, o.display_name))
            .collect()
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(
            labels(&PreferredLocales::default()),
            vec![
                ("CONTINUE".to_string(), "Continue".to_string()),
                ("ACCEPTED".to_string(), "Accepted".to_string()),
                ("CANCELED".to_string(), "Canceled".to_string()),
            ]
        );
    }

    #[test]
    fn regional_tag_falls_back_to_language() {
        let names: Vec<String> = labels(&PreferredLocales::new(["fr-CA"]))
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(names, vec!["Continuer", "Accepté", "Annulé"]);
    }

    #[test]
    fn unknown_locales_are_skipped() {
        let outcomes = TermsOutcomeProvider.outcomes(&PreferredLocales::new(["ja", "DE"]));
        assert_eq!(outcomes[0].display_name, "Weiter");
    }

    #[test]
    fn ids_do_not_change_with_locale() {
        let ids: Vec<String> = TermsOutcomeProvider
            .outcomes(&PreferredLocales::new(["de"]))
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["CONTINUE", "ACCEPTED", "CANCELED"]);
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(TermsOutcome::Canceled.to_string(), "CANCELED");
    }
}
