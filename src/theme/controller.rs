use gpui::{App, AppContext, Entity};

use crate::{
    prefs::{self, PrefsHandle},
    theme::{ThemeKind, ThemeTarget},
};

/// Owns the active product theme.
///
/// Every change is applied in a fixed order within the same update: the
/// preference store is written first, then the theme is applied to the
/// configured scope, then observers of the kind entity are notified. By the
/// time any dependent widget re-renders, both side effects have landed.
///
/// The controller is a cheap cloneable handle. Widgets that switch themes
/// receive a clone explicitly; there is no ambient controller lookup.
#[derive(Clone)]
pub struct ThemeController {
    kind: Entity<ThemeKind>,
    default_kind: ThemeKind,
    prefs: PrefsHandle,
    target: ThemeTarget,
}

impl ThemeController {
    /// Resolves the initial kind from the preference store, falling back to
    /// `default_kind` when the stored value is absent or unrecognized, then
    /// applies it to the target scope.
    pub fn new(
        prefs: PrefsHandle,
        target: ThemeTarget,
        default_kind: ThemeKind,
        cx: &mut App,
    ) -> Self {
        let initial = {
            let store = prefs.borrow();
            store
                .get(prefs::THEME_KEY)
                .and_then(ThemeKind::from_str)
                .unwrap_or(default_kind)
        };

        let controller = Self {
            kind: cx.new(|_cx| initial),
            default_kind,
            prefs,
            target,
        };

        controller.set(initial, cx);
        controller
    }

    /// The currently active kind.
    pub fn kind(&self, cx: &App) -> ThemeKind {
        *self.kind.read(cx)
    }

    pub fn default_kind(&self) -> ThemeKind {
        self.default_kind
    }

    /// Entity holding the active kind, for `cx.observe` subscriptions.
    pub fn entity(&self) -> &Entity<ThemeKind> {
        &self.kind
    }

    /// The marker currently applied to the controller's scope.
    pub fn marker(&self, cx: &App) -> Option<ThemeKind> {
        self.target.applied_kind(cx)
    }

    /// Switches to `next`: persists, applies to the scope, then notifies.
    pub fn set(&self, next: ThemeKind, cx: &mut App) {
        // A failed disk write must not block the theme change; the in-memory
        // store still holds the new value.
        let _ = self.prefs.borrow_mut().set(prefs::THEME_KEY, next.as_str());

        self.target.apply(next, cx);

        self.kind.update(cx, |kind, cx| {
            if *kind != next {
                *kind = next;
                cx.notify();
            }
        });
    }

    /// Cycles A -> B -> C -> A.
    pub fn toggle(&self, cx: &mut App) {
        let next = self.kind(cx).next();
        self.set(next, cx);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::{
        prefs::PreferenceStore,
        theme::{ThemeExt, ThemeSlot},
    };
    use gpui::TestAppContext;

    fn controller(cx: &mut App) -> ThemeController {
        ThemeController::new(
            PreferenceStore::in_memory().into_handle(),
            ThemeTarget::Application,
            ThemeKind::ProductA,
            cx,
        )
    }

    #[gpui::test]
    fn test_initial_kind_falls_back_to_default(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let controller = controller(cx);
            assert_eq!(controller.kind(cx), ThemeKind::ProductA);
            assert_eq!(cx.get_theme().name.as_ref(), "product-a");
        });
    }

    #[gpui::test]
    fn test_initial_kind_read_from_store(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let prefs = PreferenceStore::in_memory().into_handle();
            prefs
                .borrow_mut()
                .set(prefs::THEME_KEY, "product-c")
                .unwrap();

            let controller = ThemeController::new(
                prefs,
                ThemeTarget::Application,
                ThemeKind::ProductA,
                cx,
            );

            assert_eq!(controller.kind(cx), ThemeKind::ProductC);
        });
    }

    #[gpui::test]
    fn test_corrupt_stored_value_recovered_to_default(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let prefs = PreferenceStore::in_memory().into_handle();
            prefs
                .borrow_mut()
                .set(prefs::THEME_KEY, "midnight-rainbow")
                .unwrap();

            let controller = ThemeController::new(
                prefs.clone(),
                ThemeTarget::Application,
                ThemeKind::ProductB,
                cx,
            );

            assert_eq!(controller.kind(cx), ThemeKind::ProductB);
            assert_eq!(
                prefs.borrow().get(prefs::THEME_KEY),
                Some("product-b"),
                "Recovery should overwrite the corrupt value"
            );
        });
    }

    #[gpui::test]
    fn test_set_persists_and_marks_in_order(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let prefs = PreferenceStore::in_memory().into_handle();
            let controller = ThemeController::new(
                prefs.clone(),
                ThemeTarget::Application,
                ThemeKind::ProductA,
                cx,
            );

            for kind in [ThemeKind::ProductC, ThemeKind::ProductA, ThemeKind::ProductB] {
                controller.set(kind, cx);
                assert_eq!(prefs.borrow().get(prefs::THEME_KEY), Some(kind.as_str()));
                assert_eq!(controller.marker(cx), Some(kind));
                assert_eq!(controller.kind(cx), kind);
            }
        });
    }

    #[gpui::test]
    fn test_toggle_cycles_with_period_three(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let controller = controller(cx);
            let start = controller.kind(cx);

            controller.toggle(cx);
            controller.toggle(cx);
            controller.toggle(cx);

            assert_eq!(controller.kind(cx), start);
        });
    }

    #[gpui::test]
    fn test_toggle_from_default_persists_product_b(cx: &mut TestAppContext) {
        // Empty store, default product-a: one toggle must leave product-b in
        // both the store and the applied marker.
        cx.update(|cx| {
            let prefs = PreferenceStore::in_memory().into_handle();
            let controller = ThemeController::new(
                prefs.clone(),
                ThemeTarget::Application,
                ThemeKind::ProductA,
                cx,
            );

            controller.toggle(cx);

            assert_eq!(prefs.borrow().get(prefs::THEME_KEY), Some("product-b"));
            assert_eq!(controller.marker(cx), Some(ThemeKind::ProductB));
        });
    }

    #[gpui::test]
    fn test_wrapper_target_marker(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(crate::theme::Theme::product_a());

            let slot = cx.new(|_cx| ThemeSlot::new());
            let controller = ThemeController::new(
                PreferenceStore::in_memory().into_handle(),
                ThemeTarget::Wrapper(slot.clone()),
                ThemeKind::ProductC,
                cx,
            );

            assert_eq!(slot.read(cx).kind(), Some(ThemeKind::ProductC));

            controller.toggle(cx);
            assert_eq!(slot.read(cx).kind(), Some(ThemeKind::ProductA));
            assert_eq!(
                cx.get_theme().name.as_ref(),
                "product-a",
                "Wrapper scope leaves the global theme alone"
            );
        });
    }
}
