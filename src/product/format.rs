use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

const BADGE_CLASS: &str = "text-xs font-medium px-2.5 py-0.5 rounded";

pub const DEFAULT_YES: &str = "Yes";
pub const DEFAULT_NO: &str = "No";
pub const DEFAULT_EMPTY: &str = "-";

/// Anchor to a service page. Name and URL are embedded as given, unescaped.
pub fn product_name(name: &str, url: &str) -> String {
    format!(
        "<a href=\"{url}\" title=\"{name}\n{url}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-500 dark:text-blue-300 hover:underline\">{name}</a>"
    )
}

/// Badge words. Either key may be left out and keeps its default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default)]
    pub yes: Option<String>,
    #[serde(default)]
    pub no: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolTextOptions {
    #[serde(default)]
    pub reverse: Option<bool>,
    #[serde(default)]
    pub translations: Option<Translations>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBoolText {
    pub reverse: bool,
    pub yes: String,
    pub no: String,
}

impl BoolTextOptions {
    pub fn reversed() -> Self {
        Self {
            reverse: Some(true),
            translations: None,
        }
    }

    pub fn straight() -> Self {
        Self {
            reverse: Some(false),
            translations: None,
        }
    }

    /// Shallow merge over the defaults; `translations` merges key by key.
    pub fn merged(&self) -> ResolvedBoolText {
        let translations = self.translations.clone().unwrap_or_default();
        ResolvedBoolText {
            reverse: self.reverse.unwrap_or(false),
            yes: translations.yes.unwrap_or_else(|| DEFAULT_YES.to_string()),
            no: translations.no.unwrap_or_else(|| DEFAULT_NO.to_string()),
        }
    }
}

/// Yes/No badge. Colour follows the reversed polarity, the word follows the raw value.
pub fn bool_text(value: bool, options: Option<&BoolTextOptions>) -> String {
    let opts = options.map(BoolTextOptions::merged).unwrap_or_else(|| {
        BoolTextOptions::default().merged()
    });

    let is_positive = if opts.reverse { !value } else { value };
    let (bg_color, text_color) = if is_positive {
        ("bg-green-100", "text-green-800")
    } else {
        ("bg-red-100", "text-red-800")
    };
    let word = if value { &opts.yes } else { &opts.no };
    format!("<span class=\"{bg_color} {text_color} {BADGE_CLASS}\">{word}</span>")
}

pub fn array_text<S: AsRef<str>>(values: &[S], default_value: Option<&str>) -> String {
    if values.is_empty() {
        let default_value = default_value.unwrap_or(DEFAULT_EMPTY);
        return format!("<span class=\" text-gray-500 dark:text-gray-400 text-xs\">{default_value}</span>");
    }
    values
        .iter()
        .map(|v| {
            format!(
                "<span class=\"bg-blue-100 text-blue-800 {BADGE_CLASS}\">{}</span>",
                v.as_ref()
            )
        })
        .join(" ")
}

pub fn test_result(short: bool, medium: bool, long: bool) -> String {
    [("short", short), ("medium", medium), ("long", long)]
        .iter()
        .map(|(label, passed)| {
            let glyph = if *passed { "✅" } else { "❌" };
            format!("<span title=\"{label}\">{glyph}</span> ")
        })
        .join(" ")
}
