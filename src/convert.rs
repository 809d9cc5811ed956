//! Conversions between RGB, HSL and hexadecimal text.
//!
//! All functions are pure.  RGB colors are [`RGB8`] values, HSL
//! colors are [`Hsl`] values with the hue in degrees and the
//! saturation and lightness in percent.

use rgb::RGB8;

/// A color in the HSL color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue in degrees, in the range 0. to 360. (excluded).
    pub h: f64,
    /// The saturation in percent, in the range 0. to 100.
    pub s: f64,
    /// The lightness in percent, in the range 0. to 100.
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self { Hsl { h, s, l } }

    /// Convert to RGB.  The hue must already lie in \[0, 360).
    #[inline]
    pub fn to_rgb(&self) -> RGB8 { hsl_to_rgb(self.h, self.s, self.l) }

    /// Same color with the hue rotated by `degrees` (wrapped into
    /// \[0, 360)).
    #[inline]
    pub fn rotate(&self, degrees: f64) -> Self {
        Hsl { h: normalize_hue(self.h + degrees), ..*self }
    }

    /// Same color with the lightness shifted by `delta`, clamped to
    /// \[0, 100\].
    #[inline]
    pub fn shift_lightness(&self, delta: f64) -> Self {
        Hsl { l: (self.l + delta).clamp(0., 100.), ..*self }
    }
}

impl From<RGB8> for Hsl {
    #[inline]
    fn from(c: RGB8) -> Self { rgb_to_hsl(c) }
}

/// Wrap a hue in degrees into \[0, 360), negative values included.
#[inline]
pub fn normalize_hue(h: f64) -> f64 { h.rem_euclid(360.) }

/// Pack the three channels into the 24-bit integer `0xRRGGBB`.
#[inline]
pub(crate) fn pack(c: RGB8) -> u32 {
    ((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32
}

/// Parse a hexadecimal color.
///
/// A leading `#` is optional.  The shorthand `RGB` form has each
/// digit doubled.  Returns `None` unless, after these
/// normalizations, exactly 6 hexadecimal digits remain.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use palette_harmony::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#0af"), Some(RGB8::new(0x00, 0xaa, 0xff)));
/// assert_eq!(hex_to_rgb("12345"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<RGB8> {
    let mut digits = hex.replacen('#', "", 1);
    if digits.len() == 3 {
        digits = digits.chars().flat_map(|c| [c, c]).collect();
    }
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None
    }
    let n = u32::from_str_radix(&digits, 16).ok()?;
    Some(RGB8 { r: ((n >> 16) & 0xff) as u8,
                g: ((n >> 8) & 0xff) as u8,
                b: (n & 0xff) as u8 })
}

/// Canonical text form of a color: `#rrggbb` in lowercase.
pub fn rgb_to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Round to one decimal place.
#[inline]
fn round1(x: f64) -> f64 { (10. * x).round() / 10. }

/// Convert a color to HSL.
///
/// The hue is rounded to a whole number of degrees, the saturation
/// and lightness to one decimal.  Grays have hue and saturation 0.
pub fn rgb_to_hsl(c: RGB8) -> Hsl {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    if max == min {
        return Hsl { h: 0., s: 0., l: round1(100. * l) }
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let sextant = {
        if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
        else if max == g { (b - r) / d + 2. }
        else { (r - g) / d + 4. } };
    // A hue rounding up to 360 is the same color as 0.
    Hsl { h: (60. * sextant).round() % 360.,
          s: round1(100. * s),
          l: round1(100. * l) }
}

/// Convert a HSL color to RGB.
///
/// `h` is expected in \[0, 360) (use [`normalize_hue`] beforehand),
/// `s` and `l` in \[0, 100\].  Channels falling outside \[0, 255\]
/// because of out of range inputs are clamped.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RGB8 {
    let s = s / 100.;
    let l = l / 100.;
    let c = (1. - (2. * l - 1.).abs()) * s;
    let x = c * (1. - ((h / 60.) % 2. - 1.).abs());
    let m = l - c / 2.;
    let (r, g, b) = {
        if (0. .. 60.).contains(&h) { (c, x, 0.) }
        else if (60. .. 120.).contains(&h) { (x, c, 0.) }
        else if (120. .. 180.).contains(&h) { (0., c, x) }
        else if (180. .. 240.).contains(&h) { (0., x, c) }
        else if (240. .. 300.).contains(&h) { (x, 0., c) }
        else { (c, 0., x) } };
    let channel = |v: f64| ((v + m) * 255.).round().clamp(0., 255.) as u8;
    RGB8 { r: channel(r), g: channel(g), b: channel(b) }
}
