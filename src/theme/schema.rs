use std::sync::LazyLock;

use gpui::{AbsoluteLength, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list};

/// A complete visual theme: palette, typography, and layout dimensions.
///
/// The theme's `name` doubles as its persisted identifier; it is the value
/// written to the preference store and the marker applied to the themed scope.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub colors: ThemeColors,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub fn $name() -> &'static Theme {
                static THEME: LazyLock<Theme> =
                    LazyLock::new(|| Theme::from_string(include_str!($path)).unwrap());
                &THEME
            }
        )+
    };
}

impl Theme {
    generate_builtin_themes!(
        ["../../themes/product_a.json", product_a],
        ["../../themes/product_b.json", product_b],
        ["../../themes/product_c.json", product_c]
    );

    fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub heading_xl: f32,
    pub heading_lg: f32,
    pub heading_md: f32,
    pub heading_sm: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

/// Background layers ordered from the page base to the most elevated surface.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub base: Rgba,
    pub surface: Rgba,
    pub raised: Rgba,
    pub overlay: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Text placed on top of `accent.primary` fills.
    pub on_accent: Rgba,
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_parse() {
        assert_eq!(Theme::product_a().name.as_ref(), "product-a");
        assert_eq!(Theme::product_b().name.as_ref(), "product-b");
        assert_eq!(Theme::product_c().name.as_ref(), "product-c");
    }

    #[test]
    fn test_builtin_theme_layout_is_positive() {
        for theme in [Theme::product_a(), Theme::product_b(), Theme::product_c()] {
            assert!(theme.layout.size.sm > gpui::px(0.));
            assert!(theme.layout.size.sm <= theme.layout.size.md);
            assert!(theme.layout.size.md <= theme.layout.size.lg);
            assert!(theme.layout.size.lg <= theme.layout.size.xl);
            assert!(theme.layout.corner_radii.sm <= theme.layout.corner_radii.xl);
        }
    }

    #[test]
    fn test_builtin_theme_colors_are_visible() {
        for theme in [Theme::product_a(), Theme::product_b(), Theme::product_c()] {
            assert!(theme.colors.text.primary.a > 0.0);
            assert!(theme.colors.text.secondary.a > 0.0);
            assert!(theme.colors.accent.primary.a > 0.0);
            assert!(theme.colors.accent.destructive.a > 0.0);
        }
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        assert!(Theme::from_string("{}").is_err());
        assert!(Theme::from_string("not json").is_err());
    }
}
