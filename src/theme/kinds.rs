#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Rgba};

use crate::theme::{Theme, ThemeExt};

/// The closed set of product themes.
///
/// `as_str` values are the persisted identifiers; anything else found in
/// storage is treated as corrupt and replaced by the configured default.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn short_label(&self) -> &'static str)]
#[func(pub fn description_key(&self) -> &'static str)]
#[func(pub fn next(&self) -> ThemeKind)]
#[func(pub fn theme(&self) -> &'static Theme)]
pub enum ThemeKind {
    /// White and blue.
    #[default]
    #[assoc(as_str = "product-a")]
    #[assoc(label = "Theme A")]
    #[assoc(short_label = "A")]
    #[assoc(description_key = "theme.productA")]
    #[assoc(next = ThemeKind::ProductB)]
    #[assoc(theme = Theme::product_a())]
    ProductA,
    /// Purple and lime.
    #[assoc(as_str = "product-b")]
    #[assoc(label = "Theme B")]
    #[assoc(short_label = "B")]
    #[assoc(description_key = "theme.productB")]
    #[assoc(next = ThemeKind::ProductC)]
    #[assoc(theme = Theme::product_b())]
    ProductB,
    /// Cream and brown.
    #[assoc(as_str = "product-c")]
    #[assoc(label = "Theme C")]
    #[assoc(short_label = "C")]
    #[assoc(description_key = "theme.productC")]
    #[assoc(next = ThemeKind::ProductA)]
    #[assoc(theme = Theme::product_c())]
    ProductC,
}

impl ThemeKind {
    /// Every kind, in cycle order.
    pub const ALL: [ThemeKind; 3] = [ThemeKind::ProductA, ThemeKind::ProductB, ThemeKind::ProductC];

    /// Parses a persisted identifier. Unrecognized values yield `None`.
    pub fn from_str(value: &str) -> Option<ThemeKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Representative color pair for selector swatches: page base over accent.
    pub fn swatch(&self) -> (Rgba, Rgba) {
        let theme = self.theme();
        (theme.colors.background.base, theme.colors.accent.primary)
    }
}

/// Background color variants from the active theme.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> Rgba)]
pub enum ThemeBackgroundKind {
    /// Page base background.
    #[assoc(resolve = cx.get_theme().colors.background.base)]
    Base,
    /// Grouped or inset content.
    #[assoc(resolve = cx.get_theme().colors.background.surface)]
    Surface,
    /// Elevated elements such as cards and chips.
    #[assoc(resolve = cx.get_theme().colors.background.raised)]
    Raised,
    /// The most elevated surfaces: dialogs, menus.
    #[assoc(resolve = cx.get_theme().colors.background.overlay)]
    Overlay,
}
