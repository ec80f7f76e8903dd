use gpui::App;

use crate::theme::Theme;

/// Extension trait for accessing and modifying the global theme.
///
/// Reading the theme before one has been installed is a programmer error and
/// panics (gpui global access), which is intentional: widgets must never
/// silently render with a default theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::product_a());
            assert_eq!(cx.get_theme().name.as_ref(), "product-a");

            cx.set_theme(Theme::product_c());
            assert_eq!(cx.get_theme().name.as_ref(), "product-c");
        });
    }

    #[gpui::test]
    fn test_theme_as_ref(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let theme_ref: &Theme = Theme::product_b().as_ref();
            cx.set_theme(Theme::product_b());
            assert_eq!(cx.get_theme().name, theme_ref.name);
        });
    }
}
