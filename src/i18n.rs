//! Locale resources: flat key→string maps, one JSON file per language,
//! embedded at compile time. Lookups fall back to English so a key missing
//! from a translation degrades to the English text instead of failing the
//! whole page.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

const EN_JSON: &str = include_str!("../locales/en.json");
const UK_JSON: &str = include_str!("../locales/uk.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Uk,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Uk];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Uk => "uk",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Uk => "Українська",
        }
    }

    /// File name of the rendered page for this language.
    pub fn page_file(self) -> &'static str {
        match self {
            Lang::En => "cv_en.html",
            Lang::Uk => "cv_uk.html",
        }
    }

    fn raw_json(self) -> &'static str {
        match self {
            Lang::En => EN_JSON,
            Lang::Uk => UK_JSON,
        }
    }
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to parse {lang} locale resources: {source}")]
    Parse {
        lang: &'static str,
        source: serde_json::Error,
    },
    #[error("locale key {key:?} missing from {lang} and from the en fallback")]
    MissingKey { lang: &'static str, key: String },
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Strings(HashMap<String, String>);

/// Resolved strings for one language, with the English map kept alongside
/// as the fallback.
pub struct Locale {
    lang: Lang,
    strings: Strings,
    fallback: Strings,
}

impl Locale {
    pub fn load(lang: Lang) -> Result<Self, LocaleError> {
        let strings = parse(lang)?;
        let fallback = if lang == Lang::En {
            Strings(HashMap::new())
        } else {
            parse(Lang::En)?
        };
        Ok(Self {
            lang,
            strings,
            fallback,
        })
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Looks up `key`, falling back to English. A key absent from both maps
    /// is a data error and refuses to resolve.
    pub fn get(&self, key: &str) -> Result<&str, LocaleError> {
        self.strings
            .0
            .get(key)
            .or_else(|| self.fallback.0.get(key))
            .map(String::as_str)
            .ok_or_else(|| LocaleError::MissingKey {
                lang: self.lang.code(),
                key: key.to_string(),
            })
    }

    #[cfg(test)]
    fn from_pairs(lang: Lang, strings: &[(&str, &str)], fallback: &[(&str, &str)]) -> Self {
        let to_map = |pairs: &[(&str, &str)]| {
            Strings(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        };
        Self {
            lang,
            strings: to_map(strings),
            fallback: to_map(fallback),
        }
    }
}

fn parse(lang: Lang) -> Result<Strings, LocaleError> {
    serde_json::from_str(lang.raw_json()).map_err(|source| LocaleError::Parse {
        lang: lang.code(),
        source,
    })
}
