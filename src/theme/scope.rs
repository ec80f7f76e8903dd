use gpui::{App, Entity, IntoElement, ParentElement, RenderOnce, Styled, div};

use crate::theme::{ThemeExt, ThemeKind};

/// Queryable record of the theme applied to a scope.
///
/// This is the marker dependent widgets (and tests) read back; the host
/// equivalent of a `data-theme` attribute on the scoped element.
pub struct ThemeSlot {
    kind: Option<ThemeKind>,
}

impl ThemeSlot {
    pub fn new() -> Self {
        Self { kind: None }
    }

    pub fn kind(&self) -> Option<ThemeKind> {
        self.kind
    }
}

impl Default for ThemeSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a [`ThemeController`](crate::theme::ThemeController) applies the
/// active theme. The three modes are mutually exclusive; a controller is
/// constructed with exactly one.
#[derive(Clone)]
pub enum ThemeTarget {
    /// Install the resolved theme as the application-wide global.
    Application,
    /// Install the theme globally and record the marker in a slot owned by
    /// the window's root view.
    Root(Entity<ThemeSlot>),
    /// Record the marker in a slot owned by a [`Themed`] wrapper, without
    /// touching the global. Used for nested theming.
    Wrapper(Entity<ThemeSlot>),
}

impl ThemeTarget {
    pub(crate) fn apply(&self, kind: ThemeKind, cx: &mut App) {
        match self {
            ThemeTarget::Application => cx.set_theme(kind.theme()),
            ThemeTarget::Root(slot) => {
                cx.set_theme(kind.theme());
                slot.update(cx, |slot, cx| {
                    slot.kind = Some(kind);
                    cx.notify();
                });
            }
            ThemeTarget::Wrapper(slot) => {
                slot.update(cx, |slot, cx| {
                    slot.kind = Some(kind);
                    cx.notify();
                });
            }
        }
    }

    /// Reads the marker currently applied to this scope.
    pub fn applied_kind(&self, cx: &App) -> Option<ThemeKind> {
        match self {
            ThemeTarget::Application => ThemeKind::from_str(cx.get_theme().name.as_ref()),
            ThemeTarget::Root(slot) | ThemeTarget::Wrapper(slot) => slot.read(cx).kind,
        }
    }
}

/// Wrapper element carrying a [`ThemeSlot`] for nested theming.
///
/// Children render on the slot theme's base background and inherit its
/// primary text color; the slot itself is the queryable marker.
#[derive(IntoElement)]
pub struct Themed {
    slot: Entity<ThemeSlot>,
    children: Vec<gpui::AnyElement>,
}

impl Themed {
    pub fn new(slot: Entity<ThemeSlot>) -> Self {
        Self {
            slot,
            children: Vec::new(),
        }
    }
}

impl ParentElement for Themed {
    fn extend(&mut self, elements: impl IntoIterator<Item = gpui::AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Themed {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self
            .slot
            .read(cx)
            .kind
            .map(|kind| kind.theme())
            .unwrap_or_else(|| cx.get_theme());

        div()
            .size_full()
            .bg(theme.colors.background.base)
            .text_color(theme.colors.text.primary)
            .children(self.children)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext};

    #[gpui::test]
    fn test_application_target_sets_global_and_marker(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let target = ThemeTarget::Application;
            target.apply(ThemeKind::ProductB, cx);

            assert_eq!(cx.get_theme().name.as_ref(), "product-b");
            assert_eq!(target.applied_kind(cx), Some(ThemeKind::ProductB));
        });
    }

    #[gpui::test]
    fn test_root_target_sets_global_and_slot(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let slot = cx.new(|_cx| ThemeSlot::new());
            let target = ThemeTarget::Root(slot.clone());

            target.apply(ThemeKind::ProductC, cx);

            assert_eq!(cx.get_theme().name.as_ref(), "product-c");
            assert_eq!(slot.read(cx).kind(), Some(ThemeKind::ProductC));
        });
    }

    #[gpui::test]
    fn test_wrapper_target_only_touches_slot(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::product_a());

            let slot = cx.new(|_cx| ThemeSlot::new());
            let target = ThemeTarget::Wrapper(slot.clone());

            target.apply(ThemeKind::ProductB, cx);

            assert_eq!(
                cx.get_theme().name.as_ref(),
                "product-a",
                "Wrapper scope must not rewrite the global theme"
            );
            assert_eq!(target.applied_kind(cx), Some(ThemeKind::ProductB));
        });
    }

    #[gpui::test]
    fn test_slot_starts_unapplied(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let slot = cx.new(|_cx| ThemeSlot::new());
            assert_eq!(slot.read(cx).kind(), None);
        });
    }
}
