#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

/// Semantic roles announced by assistive tooling.
///
/// Widgets expose their role through a `role()` accessor so tests and
/// embedders can verify the semantic tree without inspecting layout.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum Role {
    #[assoc(as_str = "button")]
    Button,
    #[assoc(as_str = "checkbox")]
    Checkbox,
    #[assoc(as_str = "dialog")]
    Dialog,
    #[assoc(as_str = "group")]
    Group,
    #[assoc(as_str = "radio")]
    Radio,
    #[assoc(as_str = "radiogroup")]
    RadioGroup,
    #[assoc(as_str = "region")]
    Region,
}
