use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    EnUs,
    EsEs,
}

pub const LANGUAGES: &[Language] = &[Language::EsEs, Language::EnUs];

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::EsEs => "Español",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        LANGUAGES.iter().copied().find(|lang| lang.tag() == tag)
    }

    /// Map a system locale like "es-MX" onto a supported language.
    pub fn from_locale(locale: &str) -> Language {
        if locale.starts_with("es") {
            Language::EsEs
        } else {
            Language::EnUs
        }
    }
}

#[derive(Clone)]
pub struct I18nService {
    current: Language,
    translations: HashMap<&'static str, HashMap<String, String>>,
}

impl I18nService {
    pub fn new(lang: Language) -> Self {
        let mut translations = HashMap::new();

        let es_content = include_str!("../../locales/es-ES/main.ftl");
        let en_content = include_str!("../../locales/en-US/main.ftl");

        translations.insert(Language::EsEs.tag(), parse_ftl(es_content));
        translations.insert(Language::EnUs.tag(), parse_ftl(en_content));

        I18nService {
            current: lang,
            translations,
        }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, lang: Language) {
        self.current = lang;
    }

    /// Look the key up in the current language, then in the en-US fallback.
    /// Unknown keys echo back so a missing entry stays visible in the UI.
    pub fn translate(&self, key: &str) -> String {
        if let Some(lang_map) = self.translations.get(self.current.tag()) {
            if let Some(val) = lang_map.get(key) {
                return val.clone();
            }
        }

        if let Some(lang_map) = self.translations.get(Language::EnUs.tag()) {
            if let Some(val) = lang_map.get(key) {
                return val.clone();
            }
        }

        key.to_string()
    }

    /// Translate and substitute `{name}` placeholders.
    pub fn translate_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}
