use gpui::{
    CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, div, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt,
    components::{Button, ButtonVariant},
    i18n::I18nExt,
    theme::{ThemeController, ThemeExt, ThemeKind},
    utils::SquircleExt,
};

/// A row of color swatches, one per product theme.
///
/// The active theme's swatch carries an accent ring. Clicking a swatch
/// switches the controller to that theme.
#[derive(IntoElement)]
pub struct ThemeSelector {
    id: ElementId,
    controller: ThemeController,
}

impl ThemeSelector {
    pub fn new(id: impl Into<ElementId>, controller: ThemeController) -> Self {
        Self {
            id: id.into(),
            controller,
        }
    }
}

impl RenderOnce for ThemeSelector {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let active = self.controller.kind(cx);
        let ring_color = cx.get_theme().colors.accent.primary;
        let gap = cx.get_theme().layout.padding.sm;
        let label = cx.translate("theme.select");
        let label_size = cx.get_theme().layout.text.default_font.sizes.caption.clone();

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .gap(gap)
            .child(div().text_size(label_size).child(label))
            .children(ThemeKind::ALL.into_iter().map(|kind| {
                let (base, accent) = kind.swatch();
                let controller = self.controller.clone();
                let is_active = kind == active;

                div()
                    .id(self.id.with_suffix(kind.as_str()))
                    .cursor(CursorStyle::PointingHand)
                    .size(px(28.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(px(100.))
                            .bg(base)
                            .border(if is_active { px(3.) } else { px(2.) })
                            .border_color(if is_active { ring_color } else { accent }),
                    )
                    .child(div().size(px(12.)).rounded_full().bg(accent))
                    .on_click(move |_event, _window, cx| {
                        cx.stop_propagation();
                        controller.set(kind, cx);
                    })
            }))
    }
}

/// A compact button cycling through the product themes in order.
#[derive(IntoElement)]
pub struct ThemeToggle {
    id: ElementId,
    controller: ThemeController,
}

impl ThemeToggle {
    pub fn new(id: impl Into<ElementId>, controller: ThemeController) -> Self {
        Self {
            id: id.into(),
            controller,
        }
    }
}

impl RenderOnce for ThemeToggle {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let kind = self.controller.kind(cx);
        let label = cx.translate(kind.description_key());
        let controller = self.controller.clone();

        Button::new(self.id)
            .text(label)
            .variant(ButtonVariant::Secondary)
            .on_click(move |_event, _window, cx| {
                controller.toggle(cx);
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::prefs::PreferenceStore;
    use crate::theme::ThemeTarget;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_swatches_are_distinct(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let swatches = ThemeKind::ALL.map(|kind| kind.swatch());

            for (ix, a) in swatches.iter().enumerate() {
                for b in &swatches[ix + 1..] {
                    assert_ne!(a.1, b.1, "accent swatches must differ between themes");
                }
            }
        });
    }

    #[gpui::test]
    fn test_toggle_cycles_controller(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let controller = ThemeController::new(
                PreferenceStore::in_memory().into_handle(),
                ThemeTarget::Application,
                ThemeKind::ProductA,
                cx,
            );

            controller.toggle(cx);
            assert_eq!(controller.kind(cx), ThemeKind::ProductB);
        });
    }
}
