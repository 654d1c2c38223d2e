//! Localized fallback strings shown in place of a reply.

use serde::{Deserialize, Serialize};

/// Language used for the widget's fixed fallback messages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Shown when the responder answered without any text
    pub const fn empty_reply(self) -> &'static str {
        match self {
            Self::En => "Sorry, an error occurred.",
            Self::Ru => "Извините, произошла ошибка.",
        }
    }

    /// Shown when the request failed or the body was unreadable
    pub const fn transport_failure(self) -> &'static str {
        match self {
            Self::En => "Sorry, could not get a response from the server.",
            Self::Ru => "Извините, не удалось получить ответ от сервера.",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Parse a language tag such as `ru`, `ru-RU` or `EN`.
    ///
    /// Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ru") {
            Self::Ru
        } else {
            Self::En
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
