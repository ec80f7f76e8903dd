use gpui::Rgba;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_a_channels() {
        let color = rgb_a(0xFF8000, 0.5);
        assert!((color.r - 1.0).abs() < f32::EPSILON);
        assert!((color.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0.0).abs() < f32::EPSILON);
        assert!((color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_alpha_replaces_only_alpha() {
        let color = rgb_a(0x0079C8, 1.0).alpha(0.25);
        assert!((color.a - 0.25).abs() < f32::EPSILON);
        assert!((color.b - 200.0 / 255.0).abs() < f32::EPSILON);
    }
}
