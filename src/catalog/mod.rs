// SPDX-License-Identifier: MPL-2.0
//! Per-locale translation tables loaded from disk.
//!
//! A [`Catalog`] scans a directory for `<locale>.toml` files, builds one
//! [`Localizer`] per locale, and resolves the active locale from an
//! explicit request, the user configuration, or the OS locale, in that
//! order. Each table file is a flat TOML map:
//!
//! ```toml
//! Cancel = "Annuler"
//! Launch = "Démarrer"
//! "First name" = "Prénom"
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::localizer::{Localizer, Options};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

const TABLE_EXTENSION: &str = "toml";
const DEFAULT_LOCALE: &str = "en-US";

pub struct Catalog {
    localizers: HashMap<LanguageIdentifier, Localizer>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Catalog {
    /// Loads every translation table in `dir` whose file stem parses as
    /// a language identifier. Other files are skipped.
    ///
    /// `requested` takes precedence over `config.language`, which takes
    /// precedence over the OS locale; when none of those matches a
    /// loaded table the catalog falls back to `en-US`. The configured
    /// case sensitivity is applied to every table.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be read or a table file is not
    /// valid TOML.
    pub fn from_dir(dir: &Path, requested: Option<String>, config: &Config) -> Result<Self> {
        let mut localizers = HashMap::new();
        let mut available_locales = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TABLE_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(locale) = stem.parse::<LanguageIdentifier>() {
                let content = fs::read_to_string(&path)?;
                let table: HashMap<String, String> = toml::from_str(&content)?;
                let mut localizer = Localizer::from_table(table);
                localizer.set_options(Options {
                    case_sensitive: config.case_sensitive,
                });
                localizers.insert(locale.clone(), localizer);
                available_locales.push(locale);
            }
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(requested, config, &available_locales).unwrap_or(default_locale);

        Ok(Self {
            localizers,
            available_locales,
            current_locale,
        })
    }

    /// Switches the active locale. Locales without a loaded table are
    /// ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.localizers.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// The localizer for the active locale, if a table was loaded for it.
    pub fn localizer(&self) -> Option<&Localizer> {
        self.localizers.get(&self.current_locale)
    }

    /// Applies `options` to every loaded table.
    pub fn set_options(&mut self, options: Options) {
        for localizer in self.localizers.values_mut() {
            localizer.set_options(options);
        }
    }

    /// Localizes `key` against the active locale's table. With no table
    /// for the active locale the key comes back unchanged.
    pub fn localize_string(&self, key: &str) -> String {
        match self.localizer() {
            Some(localizer) => localizer.localize_string(key),
            None => key.to_string(),
        }
    }
}

fn resolve_locale(
    requested: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit request (e.g. a CLI argument)
    if let Some(lang_str) = requested {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
