use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_LANG: &str = "en";

/// Language tags the built-in labels are written in.
pub const SUPPORTED_LANGS: &[&str] = &["en", "zh-cn"];

/// Text keyed by language tag (`en`, `zh-cn`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Multilingual(BTreeMap<String, String>);

impl Multilingual {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (normalize_lang(&k.into()), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(&normalize_lang(lang)).map(|s| s.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.0.values().next().map(|s| s.as_str())
    }
}

/// A label handed to a translator: either literal text or a language-keyed mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Multilingual(Multilingual),
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl From<Multilingual> for Label {
    fn from(value: Multilingual) -> Self {
        Label::Multilingual(value)
    }
}

/// Resolves a label to display text in the caller's current language.
pub trait Translate {
    fn t(&self, label: &Label) -> String;
}

impl<F> Translate for F
where
    F: Fn(&Label) -> String,
{
    fn t(&self, label: &Label) -> String {
        self(label)
    }
}

/// Language-keyed translator. Falls back to `fallback`, then to whatever
/// entry the mapping has.
#[derive(Clone, Debug)]
pub struct Translator {
    lang: String,
    fallback: String,
}

impl Translator {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: normalize_lang(lang),
            fallback: DEFAULT_LANG.to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: &str) -> Self {
        self.fallback = normalize_lang(fallback);
        self
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Translate for Translator {
    fn t(&self, label: &Label) -> String {
        match label {
            Label::Text(text) => text.clone(),
            Label::Multilingual(m) => m
                .get(&self.lang)
                .or_else(|| m.get(&self.fallback))
                .or_else(|| m.first())
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// `zh_CN`, `ZH-cn` and `zh-cn` all name the same language.
pub fn normalize_lang(lang: &str) -> String {
    lang.trim().to_lowercase().replace('_', "-")
}

pub fn is_supported(lang: &str) -> bool {
    let lang = normalize_lang(lang);
    SUPPORTED_LANGS.iter().any(|l| *l == lang)
}
