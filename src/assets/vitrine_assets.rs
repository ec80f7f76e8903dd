#![allow(missing_docs)] // Derive macros generate undocumented methods.

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Embedded assets bundled with the vitrine crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct VitrineAssets;

        impl AssetProvider for VitrineAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(VitrineAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

use enum_assoc::Assoc;
use gpui::SharedString;

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn path(&self) -> SharedString)]
pub enum VitrineIconKind {
    /// Checkmark for selected chips.
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,

    /// Downward caret for accordion expand indicators.
    #[assoc(path = "icons/caret_down.svg".into())]
    CaretDown,

    /// Cross for dialog close buttons.
    #[assoc(path = "icons/close.svg".into())]
    Close,

    /// Globe for the language switcher.
    #[assoc(path = "icons/globe.svg".into())]
    Globe,
}

impl Into<SharedString> for VitrineIconKind {
    fn into(self) -> SharedString {
        self.path()
    }
}
