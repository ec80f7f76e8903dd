use gpui::Styled;
use gpui_squircle::{Squircle, SquircleStyled};

pub trait SquircleExt {
    /// Positions the squircle absolutely, filling its parent. Used for
    /// painting a control's surface behind its content.
    fn absolute_expand(self) -> Self;
}

impl SquircleExt for Squircle {
    fn absolute_expand(self) -> Self {
        self.absolute().top_0().bottom_0().left_0().right_0()
    }
}
