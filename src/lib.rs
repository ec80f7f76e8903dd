//! Themeable gpui widget library: product themes with persisted selection,
//! chip groups with roving focus, accordions, modal dialogs, and a small
//! translation layer.

pub mod primitives;

pub mod components;

pub mod i18n;

pub mod prefs;

pub mod semantics;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, RgbaExt, rgb_a};

mod assets;
pub use assets::*;

mod init;
pub use init::*;
