//! Parsing of color strings.
//!
//! Accepted forms (case insensitive, surrounding white space
//! ignored):
//! - `#rgb` and `#rrggbb`,
//! - `rgb(r, g, b)` with integer components (values above 255 are
//!   lowered to 255),
//! - `hsl(h, s%, l%)` with integer components,
//! - bare hexadecimal digits, as `#rgb`/`#rrggbb` without the `#`.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use rgb::RGB8;
use thiserror::Error;

use crate::convert::{hex_to_rgb, hsl_to_rgb};

lazy_static! {
    static ref RGB_FN: Regex = Regex::new(
        r"rgb\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)").unwrap();
    static ref HSL_FN: Regex = Regex::new(
        r"hsl\s*\(\s*([0-9]+)\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*\)").unwrap();
    static ref BARE_HEX: Regex = Regex::new(r"^[0-9a-f]{3,6}$").unwrap();
}

/// Error returned by [`try_parse_color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// The string is none of the accepted color forms.
    #[error("invalid color format `{input}`: expected HEX, RGB, or HSL")]
    Unrecognized { input: String },
}

/// Integer value of the `rgb()` capture group `i` (digits only).
/// Numbers too large for `u32` saturate.
fn channel(caps: &Captures, i: usize) -> u8 {
    caps[i].parse::<u32>().unwrap_or(u32::MAX).min(255) as u8
}

/// Value of the `hsl()` capture group `i`, passed on unchanged.
fn coordinate(caps: &Captures, i: usize) -> Option<f64> {
    caps[i].parse().ok()
}

fn rgb_function(s: &str) -> Option<RGB8> {
    let caps = RGB_FN.captures(s)?;
    Some(RGB8 { r: channel(&caps, 1), g: channel(&caps, 2),
                b: channel(&caps, 3) })
}

fn hsl_function(s: &str) -> Option<RGB8> {
    let caps = HSL_FN.captures(s)?;
    let h = coordinate(&caps, 1)?;
    let sat = coordinate(&caps, 2)?;
    let l = coordinate(&caps, 3)?;
    Some(hsl_to_rgb(h, sat, l))
}

/// Parse a color given as hexadecimal, `rgb(…)` or `hsl(…)` text.
///
/// Returns `None` if the format is not recognized.  Use
/// [`rgb_to_hex`](crate::rgb_to_hex) on the result to get the
/// canonical form of what was understood.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use palette_harmony::parse_color;
/// assert_eq!(parse_color(" RGB(255, 0, 0) "), Some(RGB8::new(255, 0, 0)));
/// assert_eq!(parse_color("hsl(120, 100%, 50%)"), Some(RGB8::new(0, 255, 0)));
/// assert_eq!(parse_color("bad-input"), None);
/// ```
pub fn parse_color(s: &str) -> Option<RGB8> {
    let s = s.trim().to_lowercase();
    let (kind, color) = {
        if s.starts_with('#') { ("hex", hex_to_rgb(&s)) }
        else if s.starts_with("rgb") { ("rgb()", rgb_function(&s)) }
        else if s.starts_with("hsl") { ("hsl()", hsl_function(&s)) }
        else if BARE_HEX.is_match(&s) { ("bare hex", hex_to_rgb(&s)) }
        else { ("unknown", None) } };
    if color.is_none() {
        debug!("rejected color {s:?} ({kind} form)");
    }
    color
}

/// Same as [`parse_color`] but reports failures as an error.
pub fn try_parse_color(s: &str) -> Result<RGB8, ColorFormatError> {
    parse_color(s).ok_or_else(|| ColorFormatError::Unrecognized {
        input: s.trim().to_string() })
}
