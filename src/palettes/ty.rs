use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Harmony scheme used by [`generate_basic_scheme`].
///
/// [`generate_basic_scheme`]: crate::generate_basic_scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    /// The base color and the opposite hue (+180°).
    Complementary,
    /// The base color and its two neighbors at ±30°.
    Analogous,
    /// Three hues evenly spaced around the color wheel (+120°, +240°).
    /// This is also what unknown scheme names produce.
    #[default]
    Triadic,
    /// Four hues evenly spaced around the color wheel (+90°, +180°,
    /// +270°).
    Tetradic,
    /// Same hue and saturation, lightness shifted by -20, -10, +10
    /// and +20 points.
    Monochromatic,
}

impl Scheme {
    /// All schemes.
    pub const ALL: [Scheme; 5] = [Scheme::Complementary, Scheme::Analogous,
                                  Scheme::Triadic, Scheme::Tetradic,
                                  Scheme::Monochromatic];

    /// Return the scheme called `name` (case insensitive).  Unknown
    /// names give [`Scheme::Triadic`].
    ///
    /// Unlike an exact-match lookup, surrounding white space and case
    /// are ignored, so `"Complementary"` is complementary, not triadic.
    pub fn from_name(name: &str) -> Scheme {
        match name.trim().to_ascii_lowercase().as_str() {
            "complementary" => Scheme::Complementary,
            "analogous" => Scheme::Analogous,
            "triadic" => Scheme::Triadic,
            "tetradic" => Scheme::Tetradic,
            "monochromatic" => Scheme::Monochromatic,
            _ => Scheme::Triadic,
        }
    }

    /// The lowercase name of the scheme.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::Tetradic => "tetradic",
            Scheme::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Scheme::from_name(s)) }
}

/// Hue step (in degrees) of the range sweep.
pub const HUE_STEP: u32 = 10;
/// Saturation step (in percent) of the range sweep.
pub const SAT_STEP: u32 = 20;
/// Lightness step (in percent) of the range sweep.
pub const LIGHT_STEP: u32 = 20;

/// Grid of HSL values swept by [`HslRange::palette`].
///
/// Hues go from `base − hue_spread` to `base + hue_spread`,
/// saturations from `sat_min` to `sat_max` and lightnesses from
/// `light_min` to `light_max`, all bounds included.  An empty interval
/// (e.g. `sat_min > sat_max`) sweeps nothing.
///
/// # Example
///
/// ```
/// use palette_harmony::HslRange;
/// let range = HslRange::default().hue_spread(20).saturation(40, 80);
/// assert_eq!(range.sat_min, 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HslRange {
    /// Degrees swept on each side of the base hue.
    pub hue_spread: i32,
    pub sat_min: i32,
    pub sat_max: i32,
    pub light_min: i32,
    pub light_max: i32,
    /// Hue step in degrees; 0 is taken as 1.
    pub hue_step: u32,
    /// Saturation step in percent; 0 is taken as 1.
    pub sat_step: u32,
    /// Lightness step in percent; 0 is taken as 1.
    pub light_step: u32,
}

impl Default for HslRange {
    fn default() -> Self {
        HslRange { hue_spread: 30,
                   sat_min: 20, sat_max: 80,
                   light_min: 20, light_max: 80,
                   hue_step: HUE_STEP, sat_step: SAT_STEP,
                   light_step: LIGHT_STEP }
    }
}

impl HslRange {
    /// Sweep `spread` degrees on each side of the base hue.
    pub fn hue_spread(mut self, spread: i32) -> Self {
        self.hue_spread = spread;
        self
    }

    /// Sweep saturations in `min ..= max` (percent).
    pub fn saturation(mut self, min: i32, max: i32) -> Self {
        self.sat_min = min;
        self.sat_max = max;
        self
    }

    /// Sweep lightnesses in `min ..= max` (percent).
    pub fn lightness(mut self, min: i32, max: i32) -> Self {
        self.light_min = min;
        self.light_max = max;
        self
    }

    /// Set the three sweep steps.  A step of 0 is taken as 1.
    pub fn steps(mut self, hue: u32, sat: u32, light: u32) -> Self {
        self.hue_step = hue.max(1);
        self.sat_step = sat.max(1);
        self.light_step = light.max(1);
        self
    }
}
