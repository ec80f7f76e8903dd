use std::time::Duration;

use gpui::{CornersRefinement, ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, prelude::*, px};
use gpui_squircle::{SquircleStyleRefinement, SquircleStyled, squircle};

use crate::{conditional_transition, theme::ThemeExt, utils::RgbaExt};

const SIZE_SCALE_FACTOR: f32 = 8.;

/// Animated accent ring drawn around the focused control.
///
/// Render it as an absolutely positioned sibling of the control's surface;
/// it expands and fades in when the tracked handle gains keyboard focus.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    style: SquircleStyleRefinement,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            style: SquircleStyleRefinement::default(),
        }
    }
}

impl SquircleStyled for FocusRing {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style.inner
    }

    fn outer_style(&mut self) -> &mut SquircleStyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let ring_color = cx.get_theme().colors.accent.primary;
        let is_focused = self.focus_handle.is_focused(window);

        let ring_transition = conditional_transition!(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(365),
            {
                is_focused => 1.,
                _ => 0.
            }
        );

        let delta = *ring_transition.evaluate(window, cx);
        let size_factor = (1. - delta) * SIZE_SCALE_FACTOR;

        squircle()
            .absolute()
            .top_0()
            .bottom_0()
            .left_0()
            .right_0()
            .border(px(3.))
            .border_outside()
            .inset(px(-size_factor))
            .border_color(ring_color.alpha(delta * 0.3))
            .map(|mut this| {
                this.outer_style().corner_radii =
                    expand_corner_radii(&self.style.corner_radii, px(8.), px(size_factor + 1.));
                this
            })
    }
}

fn expand_corner_radii(
    corner_radii: &CornersRefinement<Pixels>,
    default: Pixels,
    num: Pixels,
) -> CornersRefinement<Pixels> {
    CornersRefinement {
        top_left: Some(corner_radii.top_left.unwrap_or(default) + num),
        top_right: Some(corner_radii.top_right.unwrap_or(default) + num),
        bottom_right: Some(corner_radii.bottom_right.unwrap_or(default) + num),
        bottom_left: Some(corner_radii.bottom_left.unwrap_or(default) + num),
    }
}
