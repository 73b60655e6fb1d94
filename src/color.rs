//! Colors and the fixed firework palette.

use rand::seq::SliceRandom;
use rand::Rng;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREY: Rgb = Rgb::new(190, 190, 190);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend `self` over `dst` with `alpha` as the source coverage (0 = invisible).
    pub fn blend_over(self, dst: Rgb, alpha: u8) -> Rgb {
        let a = alpha as u16;
        let mix = |src: u8, dst: u8| -> u8 {
            ((src as u16 * a + dst as u16 * (255 - a) + 127) / 255) as u8
        };
        Rgb::new(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }

    /// Pack as an RGBA pixel with full opacity.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Colors a burst shell or its particles may take.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(230, 230, 250),
    Rgb::new(255, 192, 203),
];

/// Draw one palette entry uniformly at random.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    // PALETTE is non-empty, so `choose` always yields an entry.
    *PALETTE.choose(rng).unwrap_or(&Rgb::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_blend_extremes() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        assert_eq!(red.blend_over(blue, 255), red);
        assert_eq!(red.blend_over(blue, 0), blue);
    }

    #[test]
    fn test_blend_half() {
        let mixed = Rgb::WHITE.blend_over(Rgb::BLACK, 128);
        assert_eq!(mixed, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_random_color_comes_from_palette() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let color = random_color(&mut rng);
            assert!(PALETTE.contains(&color));
        }
    }

    #[test]
    fn test_random_color_covers_palette() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [false; PALETTE.len()];
        for _ in 0..1000 {
            let color = random_color(&mut rng);
            let idx = PALETTE.iter().position(|c| *c == color).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
