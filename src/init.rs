use gpui::{App, Window};

use crate::{components, theme::ThemeExt};

/// Registers the key bindings the vitrine widgets rely on. Call once after
/// creating the [`gpui::App`].
pub fn init(cx: &mut App) {
    components::chip_group::init(cx);
    components::dialog::init(cx);
}

/// Per-window setup. Sets the rem size from the active theme so rem-based
/// text sizes resolve consistently.
pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
