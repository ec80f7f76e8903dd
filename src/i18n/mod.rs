//! String translation keyed by dotted identifiers.
//!
//! Locale tables are bundled JSON, one file per language. Lookups fall back
//! to English, then to the key itself, so a missing translation never panics
//! at render time. The active language is persisted write-through like the
//! theme.

use std::sync::LazyLock;

use enum_assoc::Assoc;
use gpui::{App, Global, SharedString};
use serde_json::Value;

use crate::prefs::{self, PrefsHandle};

static EN: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../locales/en.json")).unwrap()
});

static JA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../locales/ja.json")).unwrap()
});

static ZH_TW: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../locales/zh-TW.json")).unwrap()
});

/// The supported languages.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn code(&self) -> &'static str)]
#[func(pub fn native_name(&self) -> &'static str)]
#[func(fn table(&self) -> &'static Value)]
pub enum Language {
    #[default]
    #[assoc(code = "en")]
    #[assoc(native_name = "English")]
    #[assoc(table = &EN)]
    En,
    #[assoc(code = "ja")]
    #[assoc(native_name = "日本語")]
    #[assoc(table = &JA)]
    Ja,
    #[assoc(code = "zh-TW")]
    #[assoc(native_name = "繁體中文")]
    #[assoc(table = &ZH_TW)]
    ZhTw,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ja, Language::ZhTw];

    /// Parses a language code. Unrecognized codes yield `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Global translation state.
pub struct I18n {
    language: Language,
    prefs: Option<PrefsHandle>,
}

impl Global for I18n {}

impl I18n {
    /// Installs the global, resolving the initial language from the
    /// preference store (unrecognized or absent codes fall back to English).
    pub fn init(prefs: Option<PrefsHandle>, cx: &mut App) {
        let language = prefs
            .as_ref()
            .and_then(|prefs| {
                let store = prefs.borrow();
                store.get(prefs::LANGUAGE_KEY).and_then(Language::from_code)
            })
            .unwrap_or_default();

        cx.set_global(I18n { language, prefs });
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the language, persisting the code write-through.
    pub fn change_language(&mut self, language: Language) {
        if let Some(prefs) = &self.prefs {
            // In-memory state still changes when the disk write fails.
            let _ = prefs.borrow_mut().set(prefs::LANGUAGE_KEY, language.code());
        }

        self.language = language;
    }

    /// Resolves a dotted key, e.g. `"onboarding.letsGo"`.
    pub fn translate(&self, key: &str) -> SharedString {
        lookup(self.language, key)
            .or_else(|| lookup(Language::En, key))
            .map(SharedString::new)
            .unwrap_or_else(|| SharedString::new(key.to_string()))
    }

    /// Resolves a dotted key and substitutes `{{name}}` placeholders.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> SharedString {
        let mut resolved = self.translate(key).to_string();

        for (name, value) in params {
            resolved = resolved.replace(&format!("{{{{{name}}}}}"), value);
        }

        SharedString::new(resolved)
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let mut node = language.table();

    for segment in key.split('.') {
        node = node.get(segment)?;
    }

    node.as_str()
}

/// Extension trait for accessing translation state.
///
/// Reading before [`I18n::init`] has run is a programmer error and panics.
pub trait I18nExt {
    fn i18n(&self) -> &I18n;

    fn translate(&self, key: &str) -> SharedString;

    fn change_language(&mut self, language: Language);
}

impl I18nExt for App {
    fn i18n(&self) -> &I18n {
        self.global()
    }

    fn translate(&self, key: &str) -> SharedString {
        self.i18n().translate(key)
    }

    fn change_language(&mut self, language: Language) {
        self.global_mut::<I18n>().change_language(language);
        self.refresh_windows();
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::prefs::PreferenceStore;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_language_code_round_trip(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            for lang in Language::ALL {
                assert_eq!(Language::from_code(lang.code()), Some(lang));
            }

            assert_eq!(Language::from_code("fr"), None);
            assert_eq!(Language::from_code("zh-tw"), None);
        });
    }

    #[gpui::test]
    fn test_translate_dotted_keys_per_language(cx: &mut TestAppContext) {
        cx.update(|cx| {
            I18n::init(None, cx);

            assert_eq!(cx.translate("onboarding.letsGo").as_ref(), "Let's go");

            cx.change_language(Language::Ja);
            assert_eq!(cx.translate("onboarding.letsGo").as_ref(), "はじめる");

            cx.change_language(Language::ZhTw);
            assert_eq!(cx.translate("onboarding.letsGo").as_ref(), "開始吧");
        });
    }

    #[gpui::test]
    fn test_missing_key_falls_back_to_key(cx: &mut TestAppContext) {
        cx.update(|cx| {
            I18n::init(None, cx);
            assert_eq!(
                cx.translate("no.such.key").as_ref(),
                "no.such.key",
                "Unresolvable keys fall back to the key itself"
            );
        });
    }

    #[gpui::test]
    fn test_interpolation(cx: &mut TestAppContext) {
        cx.update(|cx| {
            I18n::init(None, cx);
            let resolved = cx
                .i18n()
                .translate_with("aria.languageChanged", &[("lang", "日本語")]);
            assert_eq!(resolved.as_ref(), "Language changed to 日本語");
        });
    }

    #[gpui::test]
    fn test_change_language_persists(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let prefs = PreferenceStore::in_memory().into_handle();
            I18n::init(Some(prefs.clone()), cx);

            cx.change_language(Language::Ja);

            assert_eq!(prefs.borrow().get(prefs::LANGUAGE_KEY), Some("ja"));
            assert_eq!(cx.i18n().language(), Language::Ja);
        });
    }

    #[gpui::test]
    fn test_initial_language_from_store_with_fallback(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let prefs = PreferenceStore::in_memory().into_handle();
            prefs.borrow_mut().set(prefs::LANGUAGE_KEY, "zh-TW").unwrap();
            I18n::init(Some(prefs), cx);
            assert_eq!(cx.i18n().language(), Language::ZhTw);

            let corrupt = PreferenceStore::in_memory().into_handle();
            corrupt.borrow_mut().set(prefs::LANGUAGE_KEY, "klingon").unwrap();
            I18n::init(Some(corrupt), cx);
            assert_eq!(
                cx.i18n().language(),
                Language::En,
                "Unrecognized codes recover to the default"
            );
        });
    }
}
