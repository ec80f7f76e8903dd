use std::rc::Rc;

use gpui::{
    App, Context, ElementId, Entity, FocusHandle, InteractiveElement, IntoElement, KeyBinding,
    ParentElement, RenderOnce, SharedString, Styled, Window, actions, div,
};
use indexmap::IndexSet;
use thiserror::Error;

use crate::{
    ElementIdExt, components::Chip, semantics::Role, theme::ThemeExt,
};

actions!(
    chip_group,
    [FocusNext, FocusPrev, FocusFirst, FocusLast, ToggleFocused]
);

/// Registers the chip group key bindings. Call once at application startup.
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("right", FocusNext, Some("ChipGroup")),
        KeyBinding::new("down", FocusNext, Some("ChipGroup")),
        KeyBinding::new("left", FocusPrev, Some("ChipGroup")),
        KeyBinding::new("up", FocusPrev, Some("ChipGroup")),
        KeyBinding::new("home", FocusFirst, Some("ChipGroup")),
        KeyBinding::new("end", FocusLast, Some("ChipGroup")),
        KeyBinding::new("space", ToggleFocused, Some("ChipGroup")),
        KeyBinding::new("enter", ToggleFocused, Some("ChipGroup")),
    ]);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChipGroupError {
    #[error("no chip with id \"{0}\" in this group")]
    UnknownItem(SharedString),
}

/// One selectable option in a [`ChipGroup`].
#[derive(Clone)]
pub struct ChipItem {
    pub id: SharedString,
    pub label: SharedString,
    pub disabled: bool,
}

impl ChipItem {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A chip item together with its roving focus handle.
pub struct ChipEntry {
    pub item: ChipItem,
    pub focus_handle: FocusHandle,
}

pub type OnSelectionChangeFn = Rc<dyn Fn(&IndexSet<SharedString>, &mut App)>;

/// Selection and roving focus state shared by a group of chips.
///
/// The group keeps exactly one chip in the tab order at a time. Tab enters
/// the group at the last focused chip; arrow keys move between enabled chips
/// with wrap-around.
pub struct ChipGroupState {
    entries: Vec<ChipEntry>,
    selected: IndexSet<SharedString>,
    multiple: bool,
    focus_ix: usize,
    on_change: Option<OnSelectionChangeFn>,
}

impl ChipGroupState {
    pub fn new(
        items: impl IntoIterator<Item = ChipItem>,
        multiple: bool,
        cx: &mut Context<Self>,
    ) -> Self {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(ix, item)| ChipEntry {
                item,
                focus_handle: cx.focus_handle().tab_stop(ix == 0),
            })
            .collect();

        Self {
            entries,
            selected: IndexSet::new(),
            multiple,
            focus_ix: 0,
            on_change: None,
        }
    }

    pub fn on_change(mut self, on_change: impl Fn(&IndexSet<SharedString>, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Seeds the initial selection. Unknown ids are ignored; in single-select
    /// mode only the first id takes effect.
    pub fn default_selected(mut self, ids: impl IntoIterator<Item = SharedString>) -> Self {
        for id in ids {
            if !self.entries.iter().any(|entry| entry.item.id == id) {
                continue;
            }
            if !self.multiple && !self.selected.is_empty() {
                break;
            }
            self.selected.insert(id);
        }
        self
    }

    pub fn entries(&self) -> &[ChipEntry] {
        &self.entries
    }

    pub fn selected(&self) -> &IndexSet<SharedString> {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn focus_ix(&self) -> usize {
        self.focus_ix
    }

    /// The group's own semantic role.
    pub fn role(&self) -> Role {
        if self.multiple { Role::Group } else { Role::RadioGroup }
    }

    /// The role each chip in the group carries.
    pub fn chip_role(&self) -> Role {
        if self.multiple { Role::Checkbox } else { Role::Radio }
    }

    /// Toggles the chip with the given id.
    ///
    /// Multi-select groups toggle membership. Single-select groups replace
    /// the selection, except that reselecting the already selected chip
    /// clears it. Disabled chips are left untouched.
    pub fn toggle(&mut self, id: &str, cx: &mut Context<Self>) -> Result<(), ChipGroupError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.item.id.as_ref() == id)
            .ok_or_else(|| ChipGroupError::UnknownItem(SharedString::new(id.to_string())))?;

        if entry.item.disabled {
            return Ok(());
        }

        let id = entry.item.id.clone();

        if self.multiple {
            if !self.selected.shift_remove(&id) {
                self.selected.insert(id);
            }
        } else if self.selected.contains(&id) {
            self.selected.clear();
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }

        if let Some(on_change) = self.on_change.clone() {
            (on_change)(&self.selected, cx);
        }

        cx.notify();
        Ok(())
    }

    /// Toggles the chip the roving focus currently rests on.
    pub fn toggle_focused(&mut self, cx: &mut Context<Self>) {
        let Some(entry) = self.entries.get(self.focus_ix) else {
            return;
        };

        let id = entry.item.id.clone();
        // The focused entry always exists, so this cannot fail.
        let _ = self.toggle(id.as_ref(), cx);
    }

    pub fn focus_next(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_step(1, window, cx);
    }

    pub fn focus_prev(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_step(-1, window, cx);
    }

    pub fn focus_first(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(ix) = self.first_enabled_ix() {
            self.set_focus_ix(ix, window, cx);
        }
    }

    pub fn focus_last(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(ix) = self.last_enabled_ix() {
            self.set_focus_ix(ix, window, cx);
        }
    }

    /// Records that a chip was focused by pointer or tab so the roving tab
    /// stop follows it.
    pub fn mark_focused(&mut self, ix: usize, cx: &mut Context<Self>) {
        if ix < self.entries.len() && self.focus_ix != ix {
            self.focus_ix = ix;
            self.update_tab_stops();
            cx.notify();
        }
    }

    fn focus_step(&mut self, direction: isize, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(ix) = self.step_ix(self.focus_ix, direction) {
            self.set_focus_ix(ix, window, cx);
        }
    }

    /// The next enabled index in the given direction, wrapping around.
    /// Returns `None` when no other chip is enabled.
    fn step_ix(&self, from: usize, direction: isize) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }

        let mut ix = from;
        for _ in 0..len {
            ix = (ix as isize + direction).rem_euclid(len as isize) as usize;
            if !self.entries[ix].item.disabled {
                return Some(ix);
            }
        }

        None
    }

    fn first_enabled_ix(&self) -> Option<usize> {
        self.entries.iter().position(|entry| !entry.item.disabled)
    }

    fn last_enabled_ix(&self) -> Option<usize> {
        self.entries.iter().rposition(|entry| !entry.item.disabled)
    }

    fn set_focus_ix(&mut self, ix: usize, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_ix = ix;
        self.update_tab_stops();
        self.entries[ix].focus_handle.focus(window);
        cx.notify();
    }

    fn update_tab_stops(&mut self) {
        for (ix, entry) in self.entries.iter_mut().enumerate() {
            entry.focus_handle = entry.focus_handle.clone().tab_stop(ix == self.focus_ix);
        }
    }
}

/// Renders a [`ChipGroupState`] as a row of chips.
#[derive(IntoElement)]
pub struct ChipGroup {
    id: ElementId,
    state: Entity<ChipGroupState>,
}

impl ChipGroup {
    pub fn new(id: impl Into<ElementId>, state: Entity<ChipGroupState>) -> Self {
        Self {
            id: id.into(),
            state,
        }
    }
}

impl RenderOnce for ChipGroup {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let gap = cx.get_theme().layout.padding.sm;
        let chip_role = self.state.read(cx).chip_role();

        let chips = self
            .state
            .read(cx)
            .entries
            .iter()
            .enumerate()
            .map(|(ix, entry)| {
                let item = entry.item.clone();
                let selected = self.state.read(cx).is_selected(item.id.as_ref());
                let state = self.state.clone();

                Chip::new(self.id.with_suffix(item.id.clone()), item.label.clone())
                    .selected(selected)
                    .disabled(item.disabled)
                    .role(chip_role)
                    .focus_handle(entry.focus_handle.clone())
                    .on_click(move |_event, _window, cx| {
                        state.update(cx, |group, cx| {
                            group.mark_focused(ix, cx);
                            let _ = group.toggle(item.id.as_ref(), cx);
                        });
                    })
            })
            .collect::<Vec<_>>();

        let state_focus_next = self.state.clone();
        let state_focus_prev = self.state.clone();
        let state_focus_first = self.state.clone();
        let state_focus_last = self.state.clone();
        let state_toggle = self.state.clone();

        div()
            .id(self.id.clone())
            .key_context("ChipGroup")
            .flex()
            .flex_wrap()
            .gap(gap)
            .on_action(move |_: &FocusNext, window, cx| {
                state_focus_next.update(cx, |state, cx| state.focus_next(window, cx));
            })
            .on_action(move |_: &FocusPrev, window, cx| {
                state_focus_prev.update(cx, |state, cx| state.focus_prev(window, cx));
            })
            .on_action(move |_: &FocusFirst, window, cx| {
                state_focus_first.update(cx, |state, cx| state.focus_first(window, cx));
            })
            .on_action(move |_: &FocusLast, window, cx| {
                state_focus_last.update(cx, |state, cx| state.focus_last(window, cx));
            })
            .on_action(move |_: &ToggleFocused, _window, cx| {
                state_toggle.update(cx, |state, cx| state.toggle_focused(cx));
            })
            .children(chips)
    }
}
