use gpui::{
    Edges, Hsla, IntoElement, Length, Radians, RenderOnce, SharedString, SizeRefinement, Styled,
    Transformation, prelude::FluentBuilder, px, svg,
};

use crate::theme::ThemeExt;

/// An SVG icon with configurable size, color, and rotation.
///
/// Icons inherit the theme's primary text color unless a color is set.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: SizeRefinement<Length>,
    rotate: Radians,
    color: Option<Hsla>,
    margin: Edges<Option<Length>>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: SizeRefinement::default(),
            rotate: Radians(0.),
            color: None,
            margin: Edges::default(),
        }
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        let size = size.into();
        self.size = SizeRefinement {
            width: Some(size),
            height: Some(size),
        };
        self
    }

    /// Sets a custom color, overriding the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Applies a rotation transformation to the icon.
    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }

    /// Sets left margin.
    pub fn ml(mut self, margin: impl Into<Length>) -> Self {
        self.margin.left = Some(margin.into());
        self
    }

    /// Sets right margin.
    pub fn mr(mut self, margin: impl Into<Length>) -> Self {
        self.margin.right = Some(margin.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.get_theme().colors.text.primary;
        let width = self.size.width.unwrap_or(px(14.).into());
        let height = self.size.height.unwrap_or(px(14.).into());

        svg()
            .path(self.path)
            .text_color(primary_text_color)
            .w(width)
            .min_w(width)
            .h(height)
            .min_h(height)
            .flex_shrink_0()
            .when_some(self.margin.left, |this, v| this.ml(v))
            .when_some(self.margin.right, |this, v| this.mr(v))
            .with_transformation(Transformation::rotate(self.rotate))
            .when_some(self.color, |this, color| this.text_color(color))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{TestAppContext, hsla};

    #[gpui::test]
    fn test_icon_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/checkmark.svg");
            assert_eq!(icon.path, SharedString::from("icons/checkmark.svg"));
            assert!(icon.color.is_none(), "Icon should start with no color");
            assert_eq!(icon.rotate.0, 0.0, "Icon should start with no rotation");
        });
    }

    #[gpui::test]
    fn test_icon_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/caret_down.svg")
                .size(px(24.))
                .color(hsla(0.5, 0.5, 0.5, 1.0))
                .rotate(Radians(std::f32::consts::PI));

            assert!(icon.size.width.is_some());
            assert!(icon.size.height.is_some());
            assert!(icon.color.is_some());
            assert_eq!(icon.rotate.0, std::f32::consts::PI);
        });
    }
}
