use std::{rc::Rc, time::Duration};

use gpui::{
    AnyElement, App, Context, CursorStyle, ElementId, Entity, InteractiveElement, IntoElement,
    ParentElement, Radians, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use indexmap::IndexSet;
use thiserror::Error;

use crate::{
    ElementIdExt,
    assets::VitrineIconKind,
    components::Icon,
    primitives::FocusRing,
    semantics::Role,
    theme::{ThemeBackgroundKind, ThemeExt},
    utils::{SquircleExt, selected_transition},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccordionError {
    #[error("no panel with id \"{0}\" in this accordion")]
    UnknownPanel(SharedString),
}

pub type PanelContentFn = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement>;

/// One collapsible panel in an [`Accordion`].
#[derive(Clone)]
pub struct AccordionPanel {
    pub id: SharedString,
    pub title: SharedString,
    pub subtitle: Option<SharedString>,
    content: PanelContentFn,
}

impl AccordionPanel {
    pub fn new(
        id: impl Into<SharedString>,
        title: impl Into<SharedString>,
        content: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            content: Rc::new(content),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Which panels of an accordion are expanded.
///
/// Panel bodies stay mounted while collapsed so their state survives
/// expand and collapse cycles.
pub struct AccordionState {
    panels: Vec<AccordionPanel>,
    open: IndexSet<SharedString>,
    allow_multiple: bool,
}

impl AccordionState {
    pub fn new(panels: impl IntoIterator<Item = AccordionPanel>, allow_multiple: bool) -> Self {
        Self {
            panels: panels.into_iter().collect(),
            open: IndexSet::new(),
            allow_multiple,
        }
    }

    /// Marks panels as initially expanded. Unknown ids are ignored; in
    /// single-expand mode only the first id takes effect.
    pub fn default_open(mut self, ids: impl IntoIterator<Item = SharedString>) -> Self {
        for id in ids {
            if !self.panels.iter().any(|panel| panel.id == id) {
                continue;
            }
            if !self.allow_multiple && !self.open.is_empty() {
                break;
            }
            self.open.insert(id);
        }
        self
    }

    pub fn panels(&self) -> &[AccordionPanel] {
        &self.panels
    }

    pub fn open(&self) -> &IndexSet<SharedString> {
        &self.open
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn role(&self) -> Role {
        Role::Region
    }

    /// Expands a collapsed panel or collapses an expanded one. In
    /// single-expand mode, expanding a panel collapses any other open panel.
    pub fn toggle(&mut self, id: &str, cx: &mut Context<Self>) -> Result<(), AccordionError> {
        let panel = self
            .panels
            .iter()
            .find(|panel| panel.id.as_ref() == id)
            .ok_or_else(|| AccordionError::UnknownPanel(SharedString::new(id.to_string())))?;

        let id = panel.id.clone();

        if !self.open.shift_remove(&id) {
            if !self.allow_multiple {
                self.open.clear();
            }
            self.open.insert(id);
        }

        cx.notify();
        Ok(())
    }
}

/// Renders an [`AccordionState`] as a stack of expandable panels.
#[derive(IntoElement)]
pub struct Accordion {
    id: ElementId,
    state: Entity<AccordionState>,
}

impl Accordion {
    pub fn new(id: impl Into<ElementId>, state: Entity<AccordionState>) -> Self {
        Self {
            id: id.into(),
            state,
        }
    }
}

impl RenderOnce for Accordion {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let surface_color = ThemeBackgroundKind::Surface.resolve(cx);
        let secondary_text_color = cx.get_theme().colors.text.secondary;
        let padding = cx.get_theme().layout.padding.md;
        let title_size = cx.get_theme().layout.text.default_font.sizes.body.clone();
        let subtitle_size = cx.get_theme().layout.text.default_font.sizes.caption.clone();

        let panels = self.state.read(cx).panels.clone();
        let panel_count = panels.len();

        div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .gap(px(1.))
            .children(panels.into_iter().enumerate().map(|(ix, panel)| {
                let panel_id = self.id.with_suffix(panel.id.clone());
                let is_open = self.state.read(cx).is_open(panel.id.as_ref());
                let state = self.state.clone();
                let toggle_id = panel.id.clone();

                let open_transition = selected_transition(
                    panel_id.clone(),
                    window,
                    cx,
                    Duration::from_millis(200),
                    is_open,
                );
                let open_delta = *open_transition.evaluate(window, cx);

                let focus_handle = window
                    .use_keyed_state(
                        panel_id.with_suffix("state:focus_handle"),
                        cx,
                        |_window, cx| cx.focus_handle().tab_stop(true),
                    )
                    .read(cx)
                    .clone();

                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .id(panel_id.with_suffix("header"))
                            .cursor(CursorStyle::PointingHand)
                            .flex()
                            .items_center()
                            .justify_between()
                            .p(padding)
                            .child(
                                FocusRing::new(
                                    panel_id.with_suffix("focus_ring"),
                                    focus_handle.clone(),
                                )
                                .rounded(corner_radius),
                            )
                            .child(
                                squircle()
                                    .absolute_expand()
                                    .bg(surface_color)
                                    .when(ix == 0 || ix == panel_count - 1, |this| {
                                        this.rounded(corner_radius)
                                    }),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(div().text_size(title_size.clone()).child(panel.title))
                                    .when_some(panel.subtitle, |this, subtitle| {
                                        this.child(
                                            div()
                                                .text_size(subtitle_size.clone())
                                                .text_color(secondary_text_color)
                                                .child(subtitle),
                                        )
                                    }),
                            )
                            .child(
                                Icon::new(VitrineIconKind::CaretDown)
                                    .size(px(14.))
                                    .rotate(Radians(std::f32::consts::PI * open_delta)),
                            )
                            .on_click(move |_event, _window, cx| {
                                cx.stop_propagation();
                                state.update(cx, |state, cx| {
                                    let _ = state.toggle(toggle_id.as_ref(), cx);
                                });
                            })
                            .track_focus(&focus_handle),
                    )
                    .child(
                        // The body stays in the tree while collapsed.
                        div()
                            .overflow_hidden()
                            .map(|this| {
                                if is_open {
                                    this.h_auto().p(padding)
                                } else {
                                    this.h(px(0.)).invisible()
                                }
                            })
                            .child((panel.content)(window, cx)),
                    )
            }))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};

    fn panels() -> Vec<AccordionPanel> {
        ["first", "second", "third"]
            .into_iter()
            .map(|id| {
                AccordionPanel::new(id, id.to_uppercase(), |_window, _cx| {
                    div().into_any_element()
                })
            })
            .collect()
    }

    #[gpui::test]
    fn test_single_expand_collapses_others(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|_cx| AccordionState::new(panels(), false));

            state.update(cx, |state, cx| {
                state.toggle("first", cx).unwrap();
                state.toggle("second", cx).unwrap();

                assert!(state.is_open("second"));
                assert!(!state.is_open("first"));
                assert_eq!(state.open().len(), 1);
            });
        });
    }

    #[gpui::test]
    fn test_multi_expand_keeps_others_open(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|_cx| AccordionState::new(panels(), true));

            state.update(cx, |state, cx| {
                state.toggle("first", cx).unwrap();
                state.toggle("second", cx).unwrap();
                assert_eq!(
                    state.open().iter().cloned().collect::<Vec<_>>(),
                    ["first", "second"]
                );

                state.toggle("first", cx).unwrap();
                assert_eq!(
                    state.open().iter().cloned().collect::<Vec<_>>(),
                    ["second"]
                );
            });
        });
    }

    #[gpui::test]
    fn test_toggle_twice_collapses(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|_cx| AccordionState::new(panels(), false));

            state.update(cx, |state, cx| {
                state.toggle("third", cx).unwrap();
                state.toggle("third", cx).unwrap();
                assert!(state.open().is_empty());
            });
        });
    }

    #[gpui::test]
    fn test_unknown_panel_is_an_error(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|_cx| AccordionState::new(panels(), false));

            state.update(cx, |state, cx| {
                assert_eq!(
                    state.toggle("fourth", cx),
                    Err(AccordionError::UnknownPanel("fourth".into()))
                );
            });
        });
    }

    #[gpui::test]
    fn test_default_open_respects_single_expand(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let single = cx.new(|_cx| {
                AccordionState::new(panels(), false)
                    .default_open(["first".into(), "second".into()])
            });
            assert_eq!(
                single.read(cx).open().iter().cloned().collect::<Vec<_>>(),
                ["first"]
            );

            let multi = cx.new(|_cx| {
                AccordionState::new(panels(), true)
                    .default_open(["first".into(), "nonexistent".into(), "third".into()])
            });
            assert_eq!(
                multi.read(cx).open().iter().cloned().collect::<Vec<_>>(),
                ["first", "third"]
            );
        });
    }

    #[gpui::test]
    fn test_region_role(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|_cx| AccordionState::new(panels(), false));
            assert_eq!(state.read(cx).role(), Role::Region);
        });
    }
}
