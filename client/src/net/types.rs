//! Shape of the static `404.json` consumed by the not-found page.
//!
//! DESIGN
//! ======
//! Every field is optional on the wire; [`NotFoundContent::resolve`] fills
//! gaps with literal fallback text so a missing or partial file still
//! renders a complete page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const FALLBACK_CODE: &str = "404";
pub const FALLBACK_TITLE: &str = "Page not found";
pub const FALLBACK_SUBTITLE: &str = "We couldn't find what you were looking for.";
pub const FALLBACK_DESCRIPTION: &str = "The page may have been moved or deleted, or the address may be mistyped.";
pub const FALLBACK_BUTTON_HREF: &str = "/";
pub const FALLBACK_BUTTON_LABEL: &str = "Back to home";

/// Call-to-action link on the not-found page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundButton {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Raw `404.json` document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundContent {
    /// Status code as displayed; the file may use a number or a string.
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub button: Option<NotFoundButton>,
}

/// Not-found page text with every gap filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFoundView {
    pub code: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_href: String,
    pub button_label: String,
}

impl Default for NotFoundView {
    fn default() -> Self {
        NotFoundContent::default().resolve()
    }
}

impl NotFoundContent {
    #[must_use]
    pub fn resolve(&self) -> NotFoundView {
        let button = self.button.clone().unwrap_or_default();
        NotFoundView {
            code: or_fallback(self.code.as_deref(), FALLBACK_CODE),
            title: or_fallback(self.title.as_deref(), FALLBACK_TITLE),
            subtitle: or_fallback(self.subtitle.as_deref(), FALLBACK_SUBTITLE),
            description: or_fallback(self.description.as_deref(), FALLBACK_DESCRIPTION),
            button_href: or_fallback(button.href.as_deref(), FALLBACK_BUTTON_HREF),
            button_label: or_fallback(button.label.as_deref(), FALLBACK_BUTTON_LABEL),
        }
    }
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
