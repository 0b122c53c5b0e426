//! Shuffled draw stacks.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use crate::tiles::{Catalog, Era, Tile};

/// One face-down stack per era. The top of a stack is the end of its vector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TileStacks {
    mesozoic: Vec<Tile>,
    cenozoic: Vec<Tile>,
}

impl TileStacks {
    /// Shuffle every catalog tile into its era's stack.
    ///
    /// The caller owns the generator, so a seeded generator gives the same
    /// stacks every time.
    pub fn shuffled<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let mut stacks = Self {
            mesozoic: catalog.era(Era::Mesozoic).cloned().collect(),
            cenozoic: catalog.era(Era::Cenozoic).cloned().collect(),
        };
        stacks.mesozoic.shuffle(rng);
        stacks.cenozoic.shuffle(rng);
        debug!(
            mesozoic = stacks.mesozoic.len(),
            cenozoic = stacks.cenozoic.len(),
            "stacks shuffled"
        );
        stacks
    }

    const fn stack(&self, era: Era) -> &Vec<Tile> {
        match era {
            Era::Mesozoic => &self.mesozoic,
            Era::Cenozoic => &self.cenozoic,
        }
    }

    /// Take the top tile of an era's stack.
    pub fn draw(&mut self, era: Era) -> Option<Tile> {
        match era {
            Era::Mesozoic => self.mesozoic.pop(),
            Era::Cenozoic => self.cenozoic.pop(),
        }
    }

    /// Look at the top tile without drawing it.
    #[must_use]
    pub fn peek(&self, era: Era) -> Option<&Tile> {
        self.stack(era).last()
    }

    /// Tiles left in an era's stack.
    #[must_use]
    pub fn remaining(&self, era: Era) -> usize {
        self.stack(era).len()
    }

    /// Tiles of an era's stack, top first.
    pub fn iter(&self, era: Era) -> impl Iterator<Item = &Tile> {
        self.stack(era).iter().rev()
    }
}
