//! Palettes sampled from a grid of hues, saturations and lightnesses.

use log::trace;
use rgb::RGB8;

use crate::convert::{hsl_to_rgb, normalize_hue, rgb_to_hex, rgb_to_hsl};
use super::Palette;
use super::ty::HslRange;

/// `min ..= max` by `step`; empty when `min > max`.
fn sweep(min: i32, max: i32, step: u32) -> impl Iterator<Item = i32> + Clone {
    (min ..= max).step_by(step.max(1) as usize)
}

impl HslRange {
    /// Sample the grid around the hue of `base`.
    ///
    /// Only the hue of `base` matters, its saturation and lightness
    /// are ignored, and `base` itself is not added.  Hues are the
    /// outer loop, then saturations, then lightnesses; each color is
    /// kept at its first occurrence.
    pub fn palette(&self, base: RGB8) -> Palette {
        let base_hue = rgb_to_hsl(base).h as i32;
        let hues = sweep(base_hue.saturating_sub(self.hue_spread),
                         base_hue.saturating_add(self.hue_spread),
                         self.hue_step);
        let sats = sweep(self.sat_min, self.sat_max, self.sat_step);
        let lights = sweep(self.light_min, self.light_max, self.light_step);
        let mut palette = Palette::new();
        for h in hues {
            let h = normalize_hue(h as f64);
            for s in sats.clone() {
                for l in lights.clone() {
                    palette.push(hsl_to_rgb(h, s as f64, l as f64));
                }
            }
        }
        trace!("range {:?} around {}: {} colors",
               self, rgb_to_hex(base), palette.len());
        palette
    }
}

/// Return the colors of the HSL grid around the hue of `base`.
///
/// Hues go from `h − hue_range` to `h + hue_range` by steps of 10°,
/// saturations from `sat_min` to `sat_max` and lightnesses from
/// `light_min` to `light_max` by steps of 20 (bounds included).  See
/// [`HslRange`] to choose other steps.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use palette_harmony::generate_advanced_palette;
/// let p = generate_advanced_palette(RGB8::new(255, 0, 0), 0, 50, 50, 50, 50);
/// assert_eq!(p.colors(), &[RGB8::new(191, 64, 64)]);
/// ```
pub fn generate_advanced_palette(base: RGB8, hue_range: i32,
                                 sat_min: i32, sat_max: i32,
                                 light_min: i32, light_max: i32) -> Palette {
    HslRange::default()
        .hue_spread(hue_range)
        .saturation(sat_min, sat_max)
        .lightness(light_min, light_max)
        .palette(base)
}


#[cfg(test)]
mod tests {
    use super::*;

    const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

    #[test]
    fn single_point() {
        let p = generate_advanced_palette(RED, 0, 50, 50, 50, 50);
        assert_eq!(p.into_colors(), [RGB8::new(191, 64, 64)]);
    }

    #[test]
    fn base_saturation_and_lightness_ignored() {
        let dark_red = RGB8::new(90, 10, 10);
        assert_eq!(generate_advanced_palette(dark_red, 0, 50, 50, 50, 50),
                   generate_advanced_palette(RED, 0, 50, 50, 50, 50));
    }

    #[test]
    fn base_not_seeded() {
        let p = generate_advanced_palette(RED, 0, 20, 20, 20, 20);
        assert!(!p.contains(RED));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn sweep_order() {
        // Hue outermost (350, 0, 10), then lightness 40 and 60.
        let p = generate_advanced_palette(RED, 10, 100, 100, 40, 60);
        let expected: Vec<RGB8> = [350., 0., 10.].into_iter()
            .flat_map(|h| [hsl_to_rgb(h, 100., 40.), hsl_to_rgb(h, 100., 60.)])
            .collect();
        assert_eq!(p.into_colors(), expected);
    }

    #[test]
    fn negative_hues_wrap() {
        let p = generate_advanced_palette(RED, 30, 100, 100, 50, 50);
        assert_eq!(p[0], hsl_to_rgb(330., 100., 50.));
        assert_eq!(p.len(), 7);
    }

    #[test]
    fn grays_are_deduplicated() {
        // With no saturation every hue gives the same grays.
        let p = generate_advanced_palette(RED, 30, 0, 0, 0, 100);
        assert_eq!(p.into_colors(),
                   [RGB8::new(0, 0, 0), RGB8::new(51, 51, 51),
                    RGB8::new(102, 102, 102), RGB8::new(153, 153, 153),
                    RGB8::new(204, 204, 204), RGB8::new(255, 255, 255)]);
    }

    #[test]
    fn inclusive_bounds_with_uneven_steps() {
        // 20, 40, 60 (80 is not reached from 20 with max 70).
        let p = generate_advanced_palette(RED, 0, 100, 100, 20, 70);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn empty_intervals() {
        assert!(generate_advanced_palette(RED, 0, 80, 20, 50, 50).is_empty());
        assert!(generate_advanced_palette(RED, 0, 50, 50, 80, 20).is_empty());
        assert!(generate_advanced_palette(RED, -10, 50, 50, 50, 50).is_empty());
    }

    #[test]
    fn zero_steps_sweep_by_one() {
        let zero = HslRange { hue_spread: 0, sat_min: 100, sat_max: 100,
                              light_min: 48, light_max: 50,
                              hue_step: 0, sat_step: 0, light_step: 0 };
        let one = HslRange { hue_step: 1, sat_step: 1, light_step: 1, ..zero };
        assert_eq!(zero.palette(RED), one.palette(RED));
        assert_eq!(zero.palette(RED).len(), 3);
    }

    #[test]
    fn custom_steps() {
        let p = HslRange::default().hue_spread(0).saturation(100, 100)
            .lightness(0, 100).steps(10, 20, 50)
            .palette(RED);
        assert_eq!(p.into_colors(),
                   [RGB8::new(0, 0, 0), RED, RGB8::new(255, 255, 255)]);
    }
}
