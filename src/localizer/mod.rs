// SPDX-License-Identifier: MPL-2.0
//! The core translation table and its lookup engine.
//!
//! A [`Localizer`] is built once from a source→translation mapping (or
//! two parallel lists) and then queried any number of times with
//! [`Localizer::localize_string`]. Lookups never fail: a missing
//! translation degrades to the source text, so localization can never
//! crash the caller.
//!
//! # Examples
//!
//! ```
//! use loclens::localizer::Localizer;
//!
//! let loc = Localizer::from_pairs(
//!     ["Cancel", "Launch", "Build"],
//!     ["Annuler", "Démarrer", "Construire"],
//! )
//! .expect("lists have equal length");
//!
//! assert_eq!(loc.localize_string("Launch"), "Démarrer");
//! assert_eq!(loc.localize_string("Unknown"), "Unknown");
//! ```

pub mod normalize;

use crate::error::{Error, Result};
use self::normalize::lowercase_no_accents;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lookup options recognized by [`Localizer::set_options`].
///
/// `None` fields leave the corresponding setting unchanged, so an
/// options value carrying no decision is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// `Some(false)` switches lookups to case- and accent-insensitive
    /// fallback matching. The default mode is case-sensitive.
    pub case_sensitive: Option<bool>,
}

/// A source→translation table with optional normalized fallback lookup.
///
/// The table is immutable after construction. The normalized shadow
/// table used by case-insensitive matching is built on the first
/// fallback lookup and memoized for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct Localizer {
    values: HashMap<String, String>,
    folded_values: OnceLock<HashMap<String, String>>,
    case_sensitive: bool,
}

impl Localizer {
    /// Builds a localizer from a ready source→translation mapping.
    pub fn from_table(values: HashMap<String, String>) -> Self {
        Self {
            values,
            folded_values: OnceLock::new(),
            case_sensitive: true,
        }
    }

    /// Builds a localizer by zipping two parallel lists positionally:
    /// `sources[i]` is translated as `translations[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTable`] when the lists have different
    /// lengths, or when both are empty.
    pub fn from_pairs<K, V>(
        sources: impl IntoIterator<Item = K>,
        translations: impl IntoIterator<Item = V>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let sources: Vec<String> = sources.into_iter().map(Into::into).collect();
        let translations: Vec<String> = translations.into_iter().map(Into::into).collect();

        if sources.is_empty() && translations.is_empty() {
            return Err(Error::InvalidTable("no translation data supplied".to_string()));
        }
        if sources.len() != translations.len() {
            return Err(Error::InvalidTable(format!(
                "{} source values for {} translations",
                sources.len(),
                translations.len()
            )));
        }

        Ok(Self::from_table(sources.into_iter().zip(translations).collect()))
    }

    /// Version of the localizer component.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Whether lookups currently require an exact match.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Applies `options`, leaving any `None` field as it was.
    ///
    /// Switching modes does not rebuild an already-memoized shadow
    /// table; with an immutable translation table the shadow can never
    /// diverge from it.
    pub fn set_options(&mut self, options: Options) {
        if let Some(case_sensitive) = options.case_sensitive {
            self.case_sensitive = case_sensitive;
        }
    }

    /// Returns the translation for `key`, or `key` itself when no
    /// translation matches.
    ///
    /// An empty key short-circuits to an empty string. In
    /// case-insensitive mode a failed exact lookup is retried against
    /// the normalized shadow table, which is built on first use.
    pub fn localize_string(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        if let Some(translated) = self.values.get(key) {
            return translated.clone();
        }
        if self.case_sensitive {
            return key.to_string();
        }

        let folded = self.folded_values.get_or_init(|| {
            self.values
                .iter()
                .map(|(source, translated)| (lowercase_no_accents(source), translated.clone()))
                .collect()
        });
        match folded.get(&lowercase_no_accents(key)) {
            Some(translated) => translated.clone(),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> HashMap<String, String> {
        [
            ("Cancel", "Annuler"),
            ("Launch", "Démarrer"),
            ("Build", "Construire"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn pairs_translate_positionally() {
        let sources = ["Cancel", "Launch", "Build"];
        let translations = ["Annuler", "Démarrer", "Construire"];
        let loc = Localizer::from_pairs(sources, translations).expect("valid pair lists");

        for (source, translated) in sources.iter().zip(translations.iter()) {
            assert_eq!(loc.localize_string(source), *translated);
        }
    }

    #[test]
    fn mismatched_list_lengths_are_rejected() {
        let err = Localizer::from_pairs(["Cancel", "Launch"], ["Annuler"]).unwrap_err();
        match err {
            Error::InvalidTable(message) => assert!(message.contains("2 source values")),
            _ => panic!("expected InvalidTable"),
        }
    }

    #[test]
    fn empty_pair_lists_are_rejected() {
        let err = Localizer::from_pairs(Vec::<String>::new(), Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidTable(_)));
    }

    #[test]
    fn empty_table_is_a_valid_mapping() {
        let loc = Localizer::from_table(HashMap::new());
        assert_eq!(loc.localize_string("Cancel"), "Cancel");
    }

    #[test]
    fn empty_key_short_circuits_to_empty_string() {
        let loc = Localizer::from_table(sample_table());
        assert_eq!(loc.localize_string(""), "");
    }

    #[test]
    fn known_key_returns_translation() {
        let loc = Localizer::from_table(sample_table());
        assert_eq!(loc.localize_string("Launch"), "Démarrer");
    }

    #[test]
    fn unknown_key_is_echoed_back() {
        let loc = Localizer::from_table(sample_table());
        assert_eq!(loc.localize_string("Unknown"), "Unknown");
    }

    #[test]
    fn empty_translation_counts_as_present() {
        let table = [("Spacer".to_string(), String::new())].into_iter().collect();
        let loc = Localizer::from_table(table);
        assert_eq!(loc.localize_string("Spacer"), "");
    }

    #[test]
    fn default_mode_is_case_sensitive() {
        let loc = Localizer::from_table(sample_table());
        assert!(loc.is_case_sensitive());
        assert_eq!(loc.localize_string("cancel"), "cancel");
    }

    #[test]
    fn case_insensitive_mode_matches_folded_keys() {
        let table = [("Café".to_string(), "Coffee".to_string())].into_iter().collect();
        let mut loc = Localizer::from_table(table);
        loc.set_options(Options {
            case_sensitive: Some(false),
        });

        assert_eq!(loc.localize_string("CAFE"), "Coffee");
        assert_eq!(loc.localize_string("café"), "Coffee");
    }

    #[test]
    fn case_insensitive_miss_is_echoed_back() {
        let mut loc = Localizer::from_table(sample_table());
        loc.set_options(Options {
            case_sensitive: Some(false),
        });
        assert_eq!(loc.localize_string("Unknown"), "Unknown");
    }

    #[test]
    fn exact_match_wins_in_case_insensitive_mode() {
        let table = [
            ("Café".to_string(), "Coffee".to_string()),
            ("cafe".to_string(), "Diner".to_string()),
        ]
        .into_iter()
        .collect();
        let mut loc = Localizer::from_table(table);
        loc.set_options(Options {
            case_sensitive: Some(false),
        });
        assert_eq!(loc.localize_string("cafe"), "Diner");
    }

    #[test]
    fn empty_options_leave_mode_unchanged() {
        let mut loc = Localizer::from_table(sample_table());
        loc.set_options(Options::default());
        assert!(loc.is_case_sensitive());

        loc.set_options(Options {
            case_sensitive: Some(false),
        });
        loc.set_options(Options::default());
        assert!(!loc.is_case_sensitive());
    }

    #[test]
    fn mode_can_be_toggled_back() {
        let table = [("Café".to_string(), "Coffee".to_string())].into_iter().collect();
        let mut loc = Localizer::from_table(table);

        loc.set_options(Options {
            case_sensitive: Some(false),
        });
        assert_eq!(loc.localize_string("CAFE"), "Coffee");

        loc.set_options(Options {
            case_sensitive: Some(true),
        });
        assert_eq!(loc.localize_string("CAFE"), "CAFE");
    }

    #[test]
    fn shadow_table_survives_repeated_fallbacks() {
        let mut loc = Localizer::from_table(sample_table());
        loc.set_options(Options {
            case_sensitive: Some(false),
        });

        assert_eq!(loc.localize_string("LAUNCH"), "Démarrer");
        assert_eq!(loc.localize_string("launch"), "Démarrer");
        assert_eq!(loc.localize_string("BUILD"), "Construire");
    }

    #[test]
    fn version_matches_package_version() {
        assert_eq!(Localizer::version(), env!("CARGO_PKG_VERSION"));
    }
}
