//! Palettes: ordered sets of colors.

use std::collections::HashSet;
use std::ops::Index;
use std::slice;
use rgb::RGB8;

use crate::convert::{pack, rgb_to_hex};

pub(crate) mod ty;
pub(crate) mod scheme;
pub(crate) mod range;

/// An ordered list of colors without duplicates.
///
/// Colors are kept in the order they were generated.  Two colors are
/// the same when their three channels are equal; adding a color
/// already present leaves the palette untouched (the first
/// occurrence keeps its place).
#[derive(Clone, Debug, Default)]
pub struct Palette {
    colors: Vec<RGB8>,
    seen: HashSet<u32>, // `pack`ed colors of `colors`
}

impl Palette {
    pub(crate) fn new() -> Self { Self::default() }

    /// Append `c` unless it is already present.  Returns whether it
    /// was added.
    pub(crate) fn push(&mut self, c: RGB8) -> bool {
        let added = self.seen.insert(pack(c));
        if added { self.colors.push(c) }
        added
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Returns the colors in generation order.
    pub fn colors(&self) -> &[RGB8] { &self.colors }

    pub fn iter(&self) -> slice::Iter<'_, RGB8> { self.colors.iter() }

    pub fn first(&self) -> Option<RGB8> { self.colors.first().copied() }

    pub fn contains(&self, c: RGB8) -> bool { self.seen.contains(&pack(c)) }

    /// Returns the canonical `#rrggbb` form of each color.
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(|&c| rgb_to_hex(c)).collect()
    }

    /// Returns the swatch captions: `#RRGGBB` in uppercase.
    pub fn labels(&self) -> Vec<String> {
        self.colors.iter().map(|&c| rgb_to_hex(c).to_uppercase()).collect()
    }

    pub fn into_colors(self) -> Vec<RGB8> { self.colors }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool { self.colors == other.colors }
}

impl Eq for Palette {}

impl Index<usize> for Palette {
    type Output = RGB8;

    fn index(&self, i: usize) -> &RGB8 { &self.colors[i] }
}

impl FromIterator<RGB8> for Palette {
    /// Collect colors, dropping repeated ones.
    fn from_iter<I: IntoIterator<Item = RGB8>>(iter: I) -> Self {
        let mut p = Palette::new();
        for c in iter { p.push(c); }
        p
    }
}

impl IntoIterator for Palette {
    type Item = RGB8;
    type IntoIter = std::vec::IntoIter<RGB8>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a RGB8;
    type IntoIter = slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}
