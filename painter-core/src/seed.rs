//! Voronoi seeds: a position plus the color of its cell.

use rand::Rng;

use crate::{Color, Point};

/// One Voronoi cell generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub pos: Point,
    pub color: Color,
}

impl Seed {
    pub fn new(pos: Point, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Ordered seeds. Order only matters for ties: the earlier seed wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    seeds: Vec<Seed>,
}

impl SeedSet {
    pub fn new(seeds: Vec<Seed>) -> Self {
        Self { seeds }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Point, Color)>) -> Self {
        Self::new(pairs.into_iter().map(|(pos, color)| Seed::new(pos, color)).collect())
    }

    /// Draw `count` positions uniformly from `[0, width) x [0, height)`, then
    /// `count` opaque colors, from `rng`.
    ///
    /// A zero-sized area has no valid positions and yields an empty set.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);

        let positions: Vec<Point> = (0..count)
            .map(|_| Point::new(rng.gen_range(0..w), rng.gen_range(0..h)))
            .collect();
        let colors: Vec<Color> = (0..count)
            .map(|_| Color::rgb(rng.gen(), rng.gen(), rng.gen()))
            .collect();

        Self::from_pairs(positions.into_iter().zip(colors))
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn push(&mut self, seed: Seed) {
        self.seeds.push(seed);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Seed> {
        self.seeds.iter()
    }

    /// Seed positions, in order (for drawing markers)
    pub fn positions(&self) -> Vec<Point> {
        self.seeds.iter().map(|s| s.pos).collect()
    }
}

impl<'a> IntoIterator for &'a SeedSet {
    type Item = &'a Seed;
    type IntoIter = std::slice::Iter<'a, Seed>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Seed> for SeedSet {
    fn from_iter<I: IntoIterator<Item = Seed>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
