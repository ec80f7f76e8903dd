use gpui::{
    ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled, div, px,
};

use crate::{
    ElementIdExt,
    assets::VitrineIconKind,
    components::{Chip, Icon},
    i18n::{I18nExt, Language},
    theme::ThemeExt,
};

/// A row of chips for picking the interface language.
///
/// Labels are each language's own name, so the switcher stays readable
/// whatever language is currently active.
#[derive(IntoElement)]
pub struct LanguageSwitcher {
    id: ElementId,
}

impl LanguageSwitcher {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self { id: id.into() }
    }
}

impl RenderOnce for LanguageSwitcher {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let current = cx.i18n().language();
        let gap = cx.get_theme().layout.padding.sm;

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .gap(gap)
            .child(Icon::new(VitrineIconKind::Globe).size(px(16.)))
            .children(Language::ALL.into_iter().map(|language| {
                Chip::new(self.id.with_suffix(language.code()), language.native_name())
                    .selected(language == current)
                    .no_icon()
                    .on_click(move |_event, _window, cx| {
                        cx.change_language(language);
                    })
            }))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use crate::i18n::{I18n, I18nExt, Language};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_switching_language_updates_global(cx: &mut TestAppContext) {
        cx.update(|cx| {
            I18n::init(None, cx);

            cx.change_language(Language::ZhTw);
            assert_eq!(cx.i18n().language(), Language::ZhTw);
            assert_eq!(cx.translate("language.label").as_ref(), "語言");
        });
    }
}
