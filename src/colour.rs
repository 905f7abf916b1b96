use image::Rgb;

/// An opaque colour in the RGB space. Captions are always composited onto an RGB
/// canvas without an alpha channel, so there is no transparent variant
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Create a grey colour, g ranges from 0 to 255
    pub const fn new_grey(g: u8) -> Colour {
        Colour { r: g, g, b: g }
    }

    /// Mix `self` over `under` with the given coverage, where 0.0 leaves `under`
    /// untouched and 1.0 replaces it entirely
    pub fn blend_over(&self, under: Rgb<u8>, coverage: f32) -> Rgb<u8> {
        let a = coverage.clamp(0.0, 1.0);
        let inv = 1.0 - a;
        let mix = |top: u8, bottom: u8| (top as f32 * a + bottom as f32 * inv).round() as u8;
        Rgb([
            mix(self.r, under.0[0]),
            mix(self.g, under.0[1]),
            mix(self.b, under.0[2]),
        ])
    }
}

impl From<Colour> for Rgb<u8> {
    fn from(c: Colour) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

impl From<Rgb<u8>> for Colour {
    fn from(c: Rgb<u8>) -> Self {
        let [r, g, b] = c.0;
        Colour { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb(c.0, c.1, c.2)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey(0);
    pub const WHITE: Colour = Colour::new_grey(255);
    pub const RED: Colour = Colour::new_rgb(255, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blending_respects_coverage() {
        let under = Rgb([255, 255, 255]);
        assert_eq!(colours::BLACK.blend_over(under, 0.0), under);
        assert_eq!(colours::BLACK.blend_over(under, 1.0), Rgb([0, 0, 0]));
        assert_eq!(colours::BLACK.blend_over(under, 0.5), Rgb([128, 128, 128]));
    }
}
