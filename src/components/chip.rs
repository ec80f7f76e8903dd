use std::time::Duration;

use gpui::{
    App, ClickEvent, CursorStyle, ElementId, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    ElementIdExt,
    assets::VitrineIconKind,
    components::Icon,
    conditional_transition,
    primitives::FocusRing,
    semantics::Role,
    theme::{ThemeBackgroundKind, ThemeExt},
    utils::{RgbaExt, SquircleExt, disabled_transition, selected_transition},
};

/// A pill-shaped toggle chip.
///
/// Chips are usually rendered by a [`ChipGroup`](crate::components::ChipGroup),
/// which supplies the roving focus handle and the semantic role. A standalone
/// chip falls back to its own tab stop and the checkbox role.
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    selected: bool,
    disabled: bool,
    role: Role,
    show_icon: bool,
    focus_handle: Option<FocusHandle>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            selected: false,
            disabled: false,
            role: Role::Checkbox,
            show_icon: true,
            focus_handle: None,
            on_click: None,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Hides the selection checkmark.
    pub fn no_icon(mut self) -> Self {
        self.show_icon = false;
        self
    }

    /// Overrides the chip's own focus handle. Groups use this to manage a
    /// single roving tab stop across their chips.
    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl RenderOnce for Chip {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let bg_unselected = ThemeBackgroundKind::Raised.resolve(cx);
        let bg_selected = cx.get_theme().colors.accent.primary;
        let text_unselected = cx.get_theme().colors.text.primary;
        let text_selected = cx.get_theme().colors.text.on_accent;
        let horizontal_padding = cx.get_theme().layout.padding.md;
        let vertical_padding = cx.get_theme().layout.padding.sm;
        let text_size = cx.get_theme().layout.text.default_font.sizes.caption.clone();

        let selected_transition = selected_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(200),
            self.selected,
        );

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let focus_handle = self.focus_handle.unwrap_or_else(|| {
            window
                .use_keyed_state(
                    self.id.with_suffix("state:focus_handle"),
                    cx,
                    |_window, cx| cx.focus_handle().tab_stop(true),
                )
                .read(cx)
                .clone()
        });
        let is_focus = focus_handle.is_focused(window);

        let is_disabled = self.disabled;
        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        if is_focus && is_disabled {
            window.blur();
        }

        let hover_transition = conditional_transition!(
            self.id.with_suffix("state:transition:hover"),
            window,
            cx,
            Duration::from_millis(250),
            {
                is_hover && !is_disabled => 0.07f32,
                _ => 0.
            }
        );

        let selected_delta = *selected_transition.evaluate(window, cx);
        let hover_delta = *hover_transition.evaluate(window, cx);

        let bg_color = bg_unselected
            .lerp(&bg_selected, selected_delta)
            .lerp(&text_unselected, hover_delta);
        let text_color = text_unselected.lerp(&text_selected, selected_delta);

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .flex()
            .items_center()
            .gap(px(4.))
            .pt(vertical_padding)
            .pb(vertical_padding)
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(px(100.)),
            )
            .child(squircle().absolute_expand().rounded(px(100.)).bg(bg_color))
            .text_color(text_color)
            .text_size(text_size)
            .when(self.show_icon && selected_delta > 0., |this| {
                this.child(
                    Icon::new(VitrineIconKind::Checkmark)
                        .size(px(12.))
                        .color(text_color.alpha(selected_delta)),
                )
            })
            .child(self.label)
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let on_click = self.on_click;

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, _cx| {
                    // Prevents focus ring from appearing when clicked.
                    window.prevent_default();
                })
                .on_click(move |event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();

                    if let Some(on_click) = &on_click {
                        (on_click)(event, window, cx);
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_chip_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let chip = Chip::new("chip", "Label");
            assert_eq!(chip.role, Role::Checkbox);
            assert!(!chip.selected);
            assert!(chip.show_icon);
            assert!(chip.focus_handle.is_none());
        });
    }

    #[gpui::test]
    fn test_chip_role_override(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let chip = Chip::new("chip", "Label").role(Role::Radio);
            assert_eq!(chip.role, Role::Radio);
        });
    }
}
