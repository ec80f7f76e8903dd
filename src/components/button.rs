use std::time::Duration;

use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, Length,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    ElementIdExt, components::Icon, conditional_transition, primitives::FocusRing, semantics::Role,
    theme::ThemeExt,
    utils::{SquircleExt, disabled_transition},
};

/// Visual emphasis of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the theme's primary accent.
    #[default]
    Primary,
    /// Raised neutral surface.
    Secondary,
    /// Filled with the destructive accent.
    Destructive,
}

struct ButtonColors {
    bg: Rgba,
    bg_hover: Rgba,
    bg_active: Rgba,
    text: Rgba,
}

impl ButtonVariant {
    fn resolve(&self, cx: &App) -> ButtonColors {
        let colors = &cx.get_theme().colors;

        let (bg, text) = match self {
            ButtonVariant::Primary => (colors.accent.primary, colors.text.on_accent),
            ButtonVariant::Secondary => (colors.background.raised, colors.text.primary),
            ButtonVariant::Destructive => (colors.accent.destructive, colors.text.on_accent),
        };

        ButtonColors {
            bg,
            bg_hover: bg.lerp(&text, 0.07),
            bg_active: bg.lerp(&text, 0.16),
            text,
        }
    }
}

/// A push button with hover, press, and focus treatments.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    icon: Option<SharedString>,
    variant: ButtonVariant,
    disabled: bool,
    width: Length,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            icon: None,
            variant: ButtonVariant::default(),
            disabled: false,
            width: Length::Auto,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn w_full(mut self) -> Self {
        self.width = relative(1.).into();
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn role(&self) -> Role {
        Role::Button
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.variant.resolve(cx);
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let horizontal_padding = cx.get_theme().layout.padding.lg;
        let vertical_padding = cx.get_theme().layout.padding.sm;
        let text_size = cx.get_theme().layout.text.default_font.sizes.body.clone();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let is_disabled = self.disabled;
        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        if is_focus && is_disabled {
            window.blur();
        }

        let bg_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            Duration::from_millis(250),
            {
                is_focus || is_click_down => colors.bg_active,
                is_hover => colors.bg_hover,
                _ => colors.bg
            }
        );

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .w(self.width)
            .h_auto()
            .pt(vertical_padding)
            .pb(vertical_padding)
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .flex()
            .justify_center()
            .items_center()
            .gap(cx.get_theme().layout.padding.sm)
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(*bg_color_transition.evaluate(window, cx)),
            )
            .text_color(colors.text)
            .text_size(text_size)
            .when_some(self.icon, |this, icon| {
                this.child(Icon::new(icon).color(colors.text))
            })
            .when_some(self.text, |this, text| this.child(text))
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();
                let on_click = self.on_click;

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                    // Prevents focus ring from appearing when clicked.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(is_click_down_state_on_mouse_down.entity_id());
                })
                .on_click(move |event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();

                    is_click_down_state_on_click.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state_on_click.entity_id());

                    if let Some(on_click) = &on_click {
                        (on_click)(event, window, cx);
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());

                    is_click_down_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_variant_colors_follow_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::product_a());
            let primary = ButtonVariant::Primary.resolve(cx);
            assert_eq!(primary.bg, cx.get_theme().colors.accent.primary);
            assert_eq!(primary.text, cx.get_theme().colors.text.on_accent);

            cx.set_theme(Theme::product_b());
            let destructive = ButtonVariant::Destructive.resolve(cx);
            assert_eq!(destructive.bg, cx.get_theme().colors.accent.destructive);
        });
    }

    #[gpui::test]
    fn test_button_role(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(Button::new("b").role(), Role::Button);
        });
    }
}
