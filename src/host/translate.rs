/// Localization hook owned by the host framework. The directive only asks it
/// for fixed phrases; loading catalogs and picking the locale is host business.
pub trait Translator {
    fn translate(&self, phrase: &str) -> String;
}

/// Identity translator used when the host provides no catalog.
#[derive(Debug, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
    fn translate(&self, phrase: &str) -> String {
        phrase.to_string()
    }
}
