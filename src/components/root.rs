use std::rc::Rc;

use gpui::{
    AnyElement, AnyView, App, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, Styled, Subscription, Window, div, prelude::FluentBuilder,
};

use crate::components::DialogState;

type BuildDialogFn = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement>;

struct DialogEntry {
    state: Entity<DialogState>,
    build: BuildDialogFn,
    _subscription: Subscription,
}

/// Top-level view hosting the application's content and its dialogs.
///
/// Dialogs registered with the root render in an overlay layer above the
/// content. While any dialog is open the content layer stops scrolling, so
/// the page underneath holds still.
///
/// ```ignore
/// cx.open_window(options, |window, cx| {
///     cx.new(|cx| {
///         let mut root = Root::new(main_view, window, cx);
///         root.register_dialog(settings_dialog_state, move |window, cx| {
///             Dialog::new("settings", state.clone())
///                 .title("Settings")
///                 .into_any_element()
///         }, cx);
///         root
///     })
/// });
/// ```
pub struct Root {
    view: AnyView,
    dialogs: Vec<DialogEntry>,
}

impl Root {
    pub fn new(view: impl Into<AnyView>, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            view: view.into(),
            dialogs: Vec::new(),
        }
    }

    /// Adds a dialog to the root's overlay layer. The builder runs on every
    /// frame the dialog is open.
    pub fn register_dialog(
        &mut self,
        state: Entity<DialogState>,
        build: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
        cx: &mut Context<Self>,
    ) {
        let subscription = cx.observe(&state, |_this, _state, cx| cx.notify());

        self.dialogs.push(DialogEntry {
            state,
            build: Rc::new(build),
            _subscription: subscription,
        });
    }

    pub fn any_dialog_open(&self, cx: &App) -> bool {
        self.dialogs
            .iter()
            .any(|entry| entry.state.read(cx).is_open())
    }
}

impl Render for Root {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let any_open = self.any_dialog_open(cx);

        let open_dialogs = self
            .dialogs
            .iter()
            .filter(|entry| entry.state.read(cx).is_open())
            .map(|entry| entry.build.clone())
            .collect::<Vec<_>>();

        div()
            .id("root")
            .size_full()
            .relative()
            .child(
                div()
                    .size_full()
                    // Scroll lock while a dialog is up.
                    .when(any_open, |this| this.overflow_hidden())
                    .child(self.view.clone()),
            )
            .when(any_open, |this| {
                this.child(
                    div()
                        .id("root-dialog-container")
                        .absolute()
                        .top_0()
                        .left_0()
                        .size_full()
                        .children(
                            open_dialogs
                                .into_iter()
                                .map(|build| (build)(window, cx)),
                        ),
                )
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};

    struct TestView;

    impl Render for TestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child("Content")
        }
    }

    fn open_root(cx: &mut TestAppContext) -> gpui::WindowHandle<Root> {
        cx.update(|cx| {
            cx.open_window(Default::default(), |window, cx| {
                let view = cx.new(|_cx| TestView);
                cx.new(|cx| Root::new(view, window, cx))
            })
            .unwrap()
        })
    }

    #[gpui::test]
    fn test_root_starts_without_dialogs(cx: &mut TestAppContext) {
        let window = open_root(cx);
        let root = window.root(cx).unwrap();

        root.read_with(cx, |root, cx| {
            assert!(root.dialogs.is_empty());
            assert!(!root.any_dialog_open(cx));
        });
    }

    #[gpui::test]
    fn test_any_dialog_open_follows_state(cx: &mut TestAppContext) {
        let window = open_root(cx);
        let root = window.root(cx).unwrap();

        let state = window
            .update(cx, |root, window, cx| {
                let state = cx.new(DialogState::new);

                root.register_dialog(state.clone(), |_window, _cx| div().into_any_element(), cx);
                assert!(!root.any_dialog_open(cx));

                state.update(cx, |state, cx| state.open(window, cx));
                state
            })
            .unwrap();

        root.read_with(cx, |root, cx| {
            assert!(root.any_dialog_open(cx));
        });

        window
            .update(cx, |_root, window, cx| {
                state.update(cx, |state, cx| state.close(window, cx));
            })
            .unwrap();

        root.read_with(cx, |root, cx| {
            assert!(!root.any_dialog_open(cx));
        });
    }
}
