//! Color harmony schemes and HSL range palettes.
//!
//! - [`parse_color`] reads `#rrggbb`, `#rgb`, `rgb(…)`, `hsl(…)` and
//!   bare hexadecimal text into an [`RGB8`].
//! - [`generate_basic_scheme`] derives a [`Scheme`] (complementary,
//!   analogous, triadic, tetradic or monochromatic) from a base color.
//! - [`generate_advanced_palette`] and [`HslRange`] sample a grid of
//!   hues, saturations and lightnesses around the hue of a base color.
//!
//! Every generator returns a [`Palette`]: the colors in generation
//! order, without duplicates.  The [`HarmonyColor`] trait offers the
//! same operations as methods of [`RGB8`].
//!
//! ```
//! use palette_harmony::{parse_color, rgb_to_hex, HarmonyColor, Scheme};
//! let base = parse_color("rgb(51, 102, 153)").unwrap();
//! assert_eq!(rgb_to_hex(base), "#336699");
//! let p = base.scheme(Scheme::Triadic);
//! assert_eq!(p.hex_codes(), ["#336699", "#993366", "#669933"]);
//! ```

pub use rgb::RGB8;

mod convert;
mod parse;
mod palettes;

pub use convert::{Hsl, hex_to_rgb, rgb_to_hex, rgb_to_hsl, hsl_to_rgb,
                  normalize_hue};
pub use parse::{parse_color, try_parse_color, ColorFormatError};
pub use palettes::Palette;
pub use palettes::ty::{Scheme, HslRange, HUE_STEP, SAT_STEP, LIGHT_STEP};
pub use palettes::scheme::generate_basic_scheme;
pub use palettes::range::generate_advanced_palette;

/// Palette operations on a color.
pub trait HarmonyColor: Sized {
    /// Return the canonical `#rrggbb` form of the color.
    fn to_hex(&self) -> String;

    /// Return the color in HSL coordinates.
    fn to_hsl(&self) -> Hsl;

    /// Return the palette of `scheme` built on this color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_harmony::{HarmonyColor, Scheme};
    /// let red = RGB8::new(255, 0, 0);
    /// assert_eq!(red.scheme(Scheme::Complementary).len(), 2);
    /// ```
    fn scheme(&self, scheme: Scheme) -> Palette;

    /// Return the colors of `range` around the hue of this color.
    fn range(&self, range: &HslRange) -> Palette;
}

impl HarmonyColor for RGB8 {
    #[inline]
    fn to_hex(&self) -> String { rgb_to_hex(*self) }

    #[inline]
    fn to_hsl(&self) -> Hsl { rgb_to_hsl(*self) }

    #[inline]
    fn scheme(&self, scheme: Scheme) -> Palette {
        generate_basic_scheme(scheme, *self)
    }

    #[inline]
    fn range(&self, range: &HslRange) -> Palette { range.palette(*self) }
}
