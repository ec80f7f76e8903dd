mod accordion;
pub use accordion::*;

mod button;
pub use button::*;

mod chip;
pub use chip::*;

pub mod chip_group;
pub use chip_group::{ChipEntry, ChipGroup, ChipGroupError, ChipGroupState, ChipItem};

pub mod dialog;
pub use dialog::{Dialog, DialogPhase, DialogState};

mod icon;
pub use icon::*;

mod language_switcher;
pub use language_switcher::*;

mod root;
pub use root::Root;

mod theme_selector;
pub use theme_selector::*;
