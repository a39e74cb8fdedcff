//! System-language matching.
//!
//! A `systemLanguage` attribute lists language tags; an element passes when
//! the user's first preferred language matches any listed tag. The
//! comparison is directional and must not be simplified into a symmetric
//! "same language family" equality: the preferred language is always the
//! left operand, the listed tag always the right.

use crate::split_list;
use std::env;

/// Ordered list of the user's preferred language tags, most preferred first.
///
/// An empty list means "no preference is available"; every `systemLanguage`
/// check then fails closed.
///
/// # Example
///
/// ```
/// use svitch::LanguagePreferences;
///
/// let prefs = LanguagePreferences::new(["en-US", "fr"]);
/// assert_eq!(prefs.primary(), Some("en-US"));
/// assert_eq!(LanguagePreferences::default().primary(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePreferences {
    tags: Vec<String>,
}

impl LanguagePreferences {
    /// Build a preference list from explicit tags, most preferred first.
    pub fn new<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Read the preference list from the process environment.
    ///
    /// `LANGUAGE` (a colon-separated list) takes priority; otherwise the
    /// first set variable of `LC_ALL`, `LC_MESSAGES`, `LANG` contributes a
    /// single entry. Raw locale names are normalized to language tags:
    /// codeset and modifier suffixes are stripped (`en_US.UTF-8@euro`
    /// becomes `en-US`), and the `C`/`POSIX` locales contribute nothing.
    ///
    /// This is a cheap read of external state; callers that need to honor
    /// late locale changes simply call it again.
    #[must_use]
    pub fn from_env() -> Self {
        if let Some(list) = non_empty_var("LANGUAGE") {
            return Self {
                tags: list.split(':').filter_map(normalize_locale).collect(),
            };
        }

        let tags = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|name| non_empty_var(name))
            .and_then(|raw| normalize_locale(&raw))
            .into_iter()
            .collect();
        Self { tags }
    }

    /// The most preferred tag, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// All tags, most preferred first.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` when no preference is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Normalize a raw locale name to a language tag, or `None` when the locale
/// carries no language preference.
fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next().unwrap_or("").trim();
    if base.is_empty() || base == "C" || base.eq_ignore_ascii_case("POSIX") {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Directional language-tag comparison.
///
/// `preferred` is the user's language; `tag` is a candidate from a
/// `systemLanguage` list. The operands are not interchangeable:
///
/// 1. If the first `tag.len()` bytes of `preferred` equal `tag`
///    ASCII-case-insensitively, match. A preference of `en-US` therefore
///    matches a listed `en`.
/// 2. Otherwise, if `tag` contains a hyphen, compare both strings up to the
///    hyphen position. A preference of `en` therefore matches a listed
///    `en-GB`.
/// 3. Otherwise, no match.
///
/// # Example
///
/// ```
/// use svitch::locale_matches;
///
/// assert!(locale_matches("en-US", "en"));
/// assert!(locale_matches("en", "en-GB"));
/// assert!(!locale_matches("fr", "en"));
/// assert!(!locale_matches("e", "en-GB"));
/// ```
#[must_use]
pub fn locale_matches(preferred: &str, tag: &str) -> bool {
    if prefix_eq_ignore_ascii_case(preferred, tag, tag.len()) {
        return true;
    }
    match tag.find('-') {
        Some(hyphen) => prefix_eq_ignore_ascii_case(preferred, tag, hyphen),
        None => false,
    }
}

/// First `n` bytes of both strings, ASCII-case-insensitive. `false` when
/// either string is shorter than `n`.
fn prefix_eq_ignore_ascii_case(a: &str, b: &str, n: usize) -> bool {
    match (a.as_bytes().get(..n), b.as_bytes().get(..n)) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Returns `true` when the first preferred language matches any tag listed
/// in `value`.
///
/// A value that yields no tokens fails, and so does an empty preference
/// list; only the most preferred language is ever consulted.
///
/// # Example
///
/// ```
/// use svitch::{matches_system_language, LanguagePreferences};
///
/// let prefs = LanguagePreferences::new(["en-US"]);
/// assert!(matches_system_language("en, fr", &prefs));
/// assert!(!matches_system_language("de, fr", &prefs));
/// assert!(!matches_system_language("en", &LanguagePreferences::default()));
/// ```
#[must_use]
pub fn matches_system_language(value: &str, preferences: &LanguagePreferences) -> bool {
    let Some(lang) = preferences.primary() else {
        return false;
    };
    split_list(value).any(|tag| locale_matches(lang, tag))
}
