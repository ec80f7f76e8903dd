use gpui::{
    AnyElement, App, Context, ElementId, Entity, FocusHandle, InteractiveElement, IntoElement,
    KeyBinding, ParentElement, RenderOnce, SharedString, Styled, WeakFocusHandle, Window, actions,
    div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt,
    assets::VitrineIconKind,
    components::{Button, ButtonVariant},
    i18n::I18nExt,
    semantics::Role,
    theme::{ThemeBackgroundKind, ThemeExt},
    utils::{RgbaExt, SquircleExt},
};

actions!(dialog, [Dismiss]);

/// Registers the dialog key bindings. Call once at application startup.
pub fn init(cx: &mut App) {
    cx.bind_keys([KeyBinding::new("escape", Dismiss, Some("Dialog"))]);
}

/// Lifecycle of a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
}

/// State machine for a modal dialog.
///
/// Opening records whatever had keyboard focus and moves focus onto the
/// dialog surface; closing hands focus back to the recorded element if it
/// still exists. Both transitions are idempotent.
pub struct DialogState {
    phase: DialogPhase,
    previous_focus: Option<WeakFocusHandle>,
    surface_focus_handle: FocusHandle,
    close_on_escape: bool,
    close_on_overlay_click: bool,
}

impl DialogState {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            phase: DialogPhase::Closed,
            previous_focus: None,
            surface_focus_handle: cx.focus_handle(),
            close_on_escape: true,
            close_on_overlay_click: true,
        }
    }

    pub fn close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
    }

    pub fn close_on_overlay_click(mut self, close_on_overlay_click: bool) -> Self {
        self.close_on_overlay_click = close_on_overlay_click;
        self
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    pub fn role(&self) -> Role {
        Role::Dialog
    }

    pub fn surface_focus_handle(&self) -> &FocusHandle {
        &self.surface_focus_handle
    }

    /// Opens the dialog, capturing the currently focused element for later
    /// restoration. A no-op when already open.
    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.is_open() {
            return;
        }

        self.previous_focus = window.focused(cx).map(|handle| handle.downgrade());
        self.phase = DialogPhase::Open;
        self.surface_focus_handle.focus(window);
        cx.notify();
    }

    /// Closes the dialog, restoring focus to the element that held it before
    /// opening, if that element still exists. A no-op when already closed.
    pub fn close(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.is_open() {
            return;
        }

        self.phase = DialogPhase::Closed;

        if let Some(previous) = self.previous_focus.take().and_then(|weak| weak.upgrade()) {
            previous.focus(window);
        } else if self.surface_focus_handle.contains_focused(window, cx) {
            window.blur();
        }

        cx.notify();
    }

    /// Escape pressed while the dialog surface owns focus.
    pub fn dismiss(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.close_on_escape {
            self.close(window, cx);
        }
    }

    /// Pointer went down on the overlay behind the surface.
    pub fn overlay_clicked(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.close_on_overlay_click {
            self.close(window, cx);
        }
    }
}

/// Renders an open [`DialogState`] as a centered surface over a dimmed
/// overlay. Renders nothing while the dialog is closed.
#[derive(IntoElement)]
pub struct Dialog {
    id: ElementId,
    state: Entity<DialogState>,
    title: Option<SharedString>,
    description: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl Dialog {
    pub fn new(id: impl Into<ElementId>, state: Entity<DialogState>) -> Self {
        Self {
            id: id.into(),
            state,
            title: None,
            description: None,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ParentElement for Dialog {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Dialog {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        if !self.state.read(cx).is_open() {
            return div().into_any_element();
        }

        let overlay_color = ThemeBackgroundKind::Overlay.resolve(cx);
        let base_color = cx.get_theme().colors.background.base;
        let secondary_text_color = cx.get_theme().colors.text.secondary;
        let corner_radius = cx.get_theme().layout.corner_radii.lg;
        let padding = cx.get_theme().layout.padding.xl;
        let title_size = cx.get_theme().layout.text.default_font.sizes.heading_md.clone();
        let body_size = cx.get_theme().layout.text.default_font.sizes.body.clone();
        let close_label = cx.translate("dialog.close");

        let surface_focus_handle = self.state.read(cx).surface_focus_handle.clone();
        let state_on_overlay = self.state.clone();
        let state_on_dismiss = self.state.clone();
        let state_on_close = self.state.clone();

        div()
            .id(self.id.with_suffix("overlay"))
            .absolute()
            .top_0()
            .bottom_0()
            .left_0()
            .right_0()
            .flex()
            .items_center()
            .justify_center()
            .bg(base_color.alpha(0.6))
            .on_mouse_down(gpui::MouseButton::Left, move |_event, window, cx| {
                state_on_overlay.update(cx, |state, cx| state.overlay_clicked(window, cx));
            })
            .child(
                div()
                    .id(self.id.with_suffix("surface"))
                    .key_context("Dialog")
                    .track_focus(&surface_focus_handle)
                    .occlude()
                    .on_action(move |_: &Dismiss, window, cx| {
                        state_on_dismiss.update(cx, |state, cx| state.dismiss(window, cx));
                    })
                    .on_mouse_down(gpui::MouseButton::Left, |_event, _window, cx| {
                        // Clicks on the surface must not reach the overlay.
                        cx.stop_propagation();
                    })
                    .flex()
                    .flex_col()
                    .gap(cx.get_theme().layout.padding.md)
                    .p(padding)
                    .min_w(px(320.))
                    .max_w(px(560.))
                    .child(squircle().absolute_expand().rounded(corner_radius).bg(overlay_color))
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .items_start()
                            .when_some(self.title, |this, title| {
                                this.child(
                                    div()
                                        .id(self.id.with_suffix("title"))
                                        .text_size(title_size)
                                        .child(title),
                                )
                            })
                            .child(
                                Button::new(self.id.with_suffix("close"))
                                    .icon(VitrineIconKind::Close)
                                    .text(close_label)
                                    .variant(ButtonVariant::Secondary)
                                    .on_click(move |_event, window, cx| {
                                        state_on_close
                                            .update(cx, |state, cx| state.close(window, cx));
                                    }),
                            ),
                    )
                    .when_some(self.description, |this, description| {
                        this.child(
                            div()
                                .id(self.id.with_suffix("description"))
                                .text_size(body_size)
                                .text_color(secondary_text_color)
                                .child(description),
                        )
                    })
                    .children(self.children),
            )
            .into_any_element()
    }
}
