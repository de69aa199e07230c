use crate::constants::FALLBACK_LANGUAGE;

/// A language-specific row attached to a base entity.
pub trait Translation {
    fn language_code(&self) -> &str;
}

/// Picks the translation to serve for `language_code`.
///
/// Resolution order: exact (case-sensitive) match, then the fallback
/// language, then the first row in insertion order. `None` only when the
/// entity has no translations at all.
pub fn resolve_translation<'a, T: Translation>(
    translations: &'a [T],
    language_code: &str,
) -> Option<&'a T> {
    translations
        .iter()
        .find(|t| t.language_code() == language_code)
        .or_else(|| translations.iter().find(|t| t.language_code() == FALLBACK_LANGUAGE))
        .or_else(|| translations.first())
}
