//! Harmony schemes: hue rotations and lightness variations of a base
//! color.

use log::trace;
use rgb::RGB8;

use crate::convert::{rgb_to_hex, rgb_to_hsl};
use super::Palette;
use super::ty::Scheme;

/// Hue rotations (in degrees) added after the base color.
/// -30° is written as +330° so that the sum stays non-negative.
fn rotations(scheme: Scheme) -> &'static [f64] {
    match scheme {
        Scheme::Complementary => &[180.],
        Scheme::Analogous => &[330., 30.],
        Scheme::Triadic => &[120., 240.],
        Scheme::Tetradic => &[90., 180., 270.],
        Scheme::Monochromatic => &[],
    }
}

/// Lightness shifts (in percent points) of the monochromatic scheme.
const MONOCHROMATIC_SHIFTS: [f64; 4] = [-20., -10., 10., 20.];

/// Return the palette of `scheme` built on `base`.
///
/// The base color always comes first.  The other colors keep the
/// saturation and lightness of `base` and rotate its hue, except for
/// [`Scheme::Monochromatic`] which keeps the hue and saturation and
/// shifts the lightness (clamped to \[0, 100\]).  Colors equal to an
/// earlier one are dropped.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use palette_harmony::{generate_basic_scheme, Scheme};
/// let p = generate_basic_scheme(Scheme::Complementary, RGB8::new(255, 0, 0));
/// assert_eq!(p.colors(), &[RGB8::new(255, 0, 0), RGB8::new(0, 255, 255)]);
/// ```
pub fn generate_basic_scheme(scheme: Scheme, base: RGB8) -> Palette {
    let hsl = rgb_to_hsl(base);
    let mut palette = Palette::new();
    palette.push(base);
    match scheme {
        Scheme::Monochromatic => {
            for d in MONOCHROMATIC_SHIFTS {
                palette.push(hsl.shift_lightness(d).to_rgb());
            }
        }
        _ => {
            for &dh in rotations(scheme) {
                palette.push(hsl.rotate(dh).to_rgb());
            }
        }
    }
    trace!("{scheme} scheme of {}: {} colors", rgb_to_hex(base), palette.len());
    palette
}


#[cfg(test)]
mod tests {
    use super::*;

    const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

    fn scheme(s: Scheme, base: RGB8) -> Vec<RGB8> {
        generate_basic_scheme(s, base).into_colors()
    }

    #[test]
    fn complementary() {
        assert_eq!(scheme(Scheme::Complementary, RED),
                   [RED, RGB8::new(0, 255, 255)]);
    }

    #[test]
    fn analogous() {
        assert_eq!(scheme(Scheme::Analogous, RED),
                   [RED, RGB8::new(255, 0, 128), RGB8::new(255, 128, 0)]);
    }

    #[test]
    fn triadic() {
        assert_eq!(scheme(Scheme::Triadic, RED),
                   [RED, RGB8::new(0, 255, 0), RGB8::new(0, 0, 255)]);
    }

    #[test]
    fn tetradic() {
        assert_eq!(scheme(Scheme::Tetradic, RED),
                   [RED, RGB8::new(128, 255, 0), RGB8::new(0, 255, 255),
                    RGB8::new(128, 0, 255)]);
    }

    #[test]
    fn rotation_wraps() {
        // Hue 300 + 90 = 390 ≡ 30.
        let magenta = RGB8::new(255, 0, 255);
        let p = scheme(Scheme::Tetradic, magenta);
        assert_eq!(p[1], RGB8::new(255, 128, 0));
    }

    #[test]
    fn monochromatic() {
        // #336699 is hsl(210, 50%, 40%).
        let base = RGB8::new(0x33, 0x66, 0x99);
        assert_eq!(scheme(Scheme::Monochromatic, base),
                   [base,
                    RGB8::new(0x1a, 0x33, 0x4d),
                    RGB8::new(0x26, 0x4d, 0x73),
                    RGB8::new(0x40, 0x80, 0xbf),
                    RGB8::new(0x66, 0x99, 0xcc)]);
    }

    #[test]
    fn monochromatic_clamps_lightness() {
        // l = 94.9: +10 and +20 both clamp to 100 (white), only kept once.
        let base = RGB8::new(0xf2, 0xf2, 0xf2);
        assert_eq!(scheme(Scheme::Monochromatic, base),
                   [base, RGB8::new(191, 191, 191), RGB8::new(216, 216, 216),
                    RGB8::new(255, 255, 255)]);
    }

    #[test]
    fn gray_collapses() {
        let gray = RGB8::new(90, 90, 90);
        for s in [Scheme::Complementary, Scheme::Analogous, Scheme::Triadic,
                  Scheme::Tetradic] {
            assert_eq!(scheme(s, gray), [gray], "{s}");
        }
    }

    #[test]
    fn base_kept_as_given() {
        // The base is pushed as is, not after a round trip through HSL.
        let base = RGB8::new(255, 2, 0);
        let p = scheme(Scheme::Complementary, base);
        assert_eq!(p[0], base);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn unknown_name_behaves_as_triadic() {
        assert_eq!(scheme(Scheme::from_name("whatever"), RED),
                   scheme(Scheme::Triadic, RED));
    }
}
