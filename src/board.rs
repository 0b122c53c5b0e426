//! The game board.
//!
//! Habitats live in a single arena owned by the [`Board`] and refer to their
//! neighbors by [`HabitatId`]. Latitudes are ordered lists of ids. Topology is
//! fixed once built; only the biome occupying each habitat changes.
//!
//! ```text
//!   A0 A1 A2 A3 A4 A5      Arctic
//!   J0 J1 J2 J3 J4 J5      Jet stream
//!   H0 H1 H2 H3 H4 H5      Horse latitudes
//!   T0 T1 T2 T3 T4 T5      Tropics
//!         T6 T7
//! ```

mod habitat;
mod invariants;
mod latitude;
mod layout;

pub use habitat::{Biome, Direction, Habitat, HabitatId, HabitatKey};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use latitude::{Latitude, LatitudeKey};
pub use layout::{BoardLayout, RowLayout};

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{RulesError, RulesResult};
use crate::tiles::Tile;

/// Outcome of placing a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// A land biome went into play, displacing the previous occupant.
    Placed {
        /// Habitat the biome now occupies.
        habitat: HabitatId,
        /// Tile of the biome that was there before.
        displaced: Option<Tile>,
    },
    /// The tile does not occupy a habitat; it is handed back with the habitat
    /// it targets.
    Targeted {
        /// Lowest-climax habitat for the tile's latitude.
        habitat: HabitatId,
        /// The tile, unchanged.
        tile: Tile,
    },
}

impl Placement {
    /// The habitat the tile went to or targets.
    #[must_use]
    pub const fn habitat(&self) -> HabitatId {
        match self {
            Placement::Placed { habitat, .. } | Placement::Targeted { habitat, .. } => *habitat,
        }
    }
}

/// The game board.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    /// All habitats, row-major, the overhang at the end of the last row.
    habitats: Vec<Habitat>,
    /// Real latitude rows, top to bottom.
    rows: Vec<LatitudeKey>,
    /// Latitudes by key, including the orogeny pseudo-latitude.
    latitudes: BTreeMap<LatitudeKey, Latitude>,
    /// Habitat lookup by printed key.
    #[serde(skip)]
    by_key: HashMap<HabitatKey, HabitatId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Build the printed board.
    #[must_use]
    pub fn new() -> Self {
        Self::build(&BoardLayout::default())
    }

    /// Build a board from a layout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayout` if the layout fails validation.
    pub fn from_layout(layout: &BoardLayout) -> RulesResult<Self> {
        layout.validate()?;
        Ok(Self::build(layout))
    }

    /// Build from an already validated layout.
    fn build(layout: &BoardLayout) -> Self {
        let mut board = Self {
            habitats: Vec::new(),
            rows: Vec::with_capacity(layout.rows.len()),
            latitudes: BTreeMap::new(),
            by_key: HashMap::new(),
        };

        let grid = board.populate(layout);
        board.mark_orogeny(layout);
        board.link_rectangle(&grid, layout.width);
        board.link_overhang(&grid, layout);
        board.index_latitudes(&grid);

        debug!(
            habitats = board.habitats.len(),
            rows = board.rows.len(),
            "board built"
        );
        board
    }

    /// Create every habitat. Returns ids laid out by row and column.
    #[allow(clippy::cast_possible_truncation)]
    fn populate(&mut self, layout: &BoardLayout) -> Vec<Vec<HabitatId>> {
        let mut grid = Vec::with_capacity(layout.rows.len());
        for row in &layout.rows {
            self.rows.push(row.latitude);
            let mut ids = Vec::with_capacity(row.climax_numbers.len());
            // Validation bounds row length by u8::MAX and digits to 1-9.
            for (col, digit) in row.climax_numbers.chars().enumerate() {
                let id = HabitatId(self.habitats.len());
                let key = HabitatKey::new(row.latitude, col as u8);
                let climax_number = digit.to_digit(10).unwrap_or_default();
                self.habitats.push(Habitat::new(id, key, climax_number));
                self.by_key.insert(key, id);
                ids.push(id);
            }
            grid.push(ids);
        }
        grid
    }

    fn mark_orogeny(&mut self, layout: &BoardLayout) {
        for key in &layout.orogeny {
            let id = key
                .parse::<HabitatKey>()
                .ok()
                .and_then(|key| self.by_key.get(&key).copied());
            if let Some(id) = id {
                self.habitats[id.0].orogeny = true;
            }
        }
    }

    fn link(&mut self, from: HabitatId, direction: Direction, to: HabitatId) {
        self.habitats[from.0].neighbors[direction.index()] = Some(to);
        self.habitats[to.0].neighbors[direction.opposite().index()] = Some(from);
    }

    /// Link the rectangular part of the board.
    fn link_rectangle(&mut self, grid: &[Vec<HabitatId>], width: usize) {
        for (row, ids) in grid.iter().enumerate() {
            let rect = &ids[..width];
            for pair in rect.windows(2) {
                self.link(pair[0], Direction::East, pair[1]);
            }
            if let Some(below) = grid.get(row + 1) {
                for (&upper, &lower) in rect.iter().zip(below) {
                    self.link(upper, Direction::South, lower);
                }
            }
        }
    }

    /// Hang the last row's extra habitats under their columns. Neighboring
    /// overhang habitats in adjacent columns are linked to each other.
    fn link_overhang(&mut self, grid: &[Vec<HabitatId>], layout: &BoardLayout) {
        let Some(last) = grid.last() else {
            return;
        };
        let mut previous: Option<(usize, HabitatId)> = None;
        for (k, &col) in layout.overhang.iter().enumerate() {
            let id = last[layout.width + k];
            self.link(last[col], Direction::South, id);
            if let Some((_, prev_id)) = previous.filter(|&(prev_col, _)| prev_col + 1 == col) {
                self.link(prev_id, Direction::East, id);
            }
            previous = Some((col, id));
        }
    }

    fn index_latitudes(&mut self, grid: &[Vec<HabitatId>]) {
        let mut orogeny = Latitude::new(LatitudeKey::Orogeny);
        for (latitude, ids) in self.rows.iter().zip(grid) {
            let mut lat = Latitude::new(*latitude);
            lat.habitats.clone_from(ids);
            orogeny
                .habitats
                .extend(ids.iter().filter(|id| self.habitats[id.0].orogeny));
            self.latitudes.insert(*latitude, lat);
        }
        self.latitudes.insert(LatitudeKey::Orogeny, orogeny);
    }

    /// All habitats in arena order.
    #[must_use]
    pub fn habitats(&self) -> &[Habitat] {
        &self.habitats
    }

    /// Real latitude rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[LatitudeKey] {
        &self.rows
    }

    /// Habitat by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different board.
    #[must_use]
    pub fn habitat(&self, id: HabitatId) -> &Habitat {
        &self.habitats[id.0]
    }

    /// Habitat by printed key, e.g. `"T6"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHabitatKey` if no habitat has that key.
    pub fn habitat_by_key(&self, key: &str) -> RulesResult<&Habitat> {
        key.parse::<HabitatKey>()
            .ok()
            .and_then(|parsed| self.by_key.get(&parsed))
            .map(|&id| &self.habitats[id.0])
            .ok_or_else(|| RulesError::InvalidHabitatKey(key.to_string()))
    }

    /// Latitude by key letter, including `"O"` for orogeny.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLatitudeKey` for unknown keys or rows not on this board.
    pub fn latitude(&self, key: &str) -> RulesResult<&Latitude> {
        let parsed: LatitudeKey = key.parse()?;
        self.latitudes
            .get(&parsed)
            .ok_or_else(|| RulesError::InvalidLatitudeKey(key.to_string()))
    }

    /// Neighbor of `id` in `direction`.
    #[must_use]
    pub fn neighbor(&self, id: HabitatId, direction: Direction) -> Option<&Habitat> {
        self.habitat(id)
            .neighbor(direction)
            .map(|n| &self.habitats[n.0])
    }

    /// Latitudes by key.
    pub fn latitudes(&self) -> impl Iterator<Item = &Latitude> {
        self.latitudes.values()
    }

    /// Find the habitat with the lowest effective climax number in a latitude.
    ///
    /// A habitat holding a biome counts with the biome's climax number. Ties
    /// go to the habitat listed first in the latitude.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLatitudeKey` if the key is unknown or the latitude is
    /// empty.
    pub fn find_lowest_climax(&self, latitude_key: &str) -> RulesResult<&Habitat> {
        let key: LatitudeKey = latitude_key.parse()?;
        let id = self.lowest_climax_in(key)?;
        Ok(&self.habitats[id.0])
    }

    fn lowest_climax_in(&self, key: LatitudeKey) -> RulesResult<HabitatId> {
        let latitude = self
            .latitudes
            .get(&key)
            .ok_or_else(|| RulesError::InvalidLatitudeKey(key.to_string()))?;

        let mut best: Option<(HabitatId, u32)> = None;
        for &id in &latitude.habitats {
            let climax = self.habitats[id.0].effective_climax_number();
            if best.is_none_or(|(_, lowest)| climax < lowest) {
                best = Some((id, climax));
            }
        }

        best.map(|(id, _)| id)
            .ok_or_else(|| RulesError::InvalidLatitudeKey(key.to_string()))
    }

    /// Place a tile on the board.
    ///
    /// The tile goes to the lowest-climax habitat of its latitude. A land
    /// biome tile takes over that habitat and the tile it displaces is
    /// returned. Sea biomes and immigrants do not occupy habitats; they are
    /// handed back with their target.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLatitudeKey` if the tile's latitude has no habitats.
    pub fn place_tile(&mut self, tile: Tile) -> RulesResult<Placement> {
        let target = self.lowest_climax_in(tile.header.latitude)?;

        if !tile.header.terrain.is_land() {
            return Ok(Placement::Targeted {
                habitat: target,
                tile,
            });
        }
        let biome = match Biome::from_tile(tile) {
            Ok(biome) => biome,
            Err(tile) => {
                return Ok(Placement::Targeted {
                    habitat: target,
                    tile,
                });
            }
        };

        let habitat = &mut self.habitats[target.0];
        debug!(
            tile = %biome.header.key,
            habitat = %habitat.key,
            climax = biome.climax_number(),
            "biome placed"
        );
        let displaced = habitat.biome.replace(biome).map(Biome::into_tile);
        Ok(Placement::Placed {
            habitat: target,
            displaced,
        })
    }

    /// Mutable access to the biome in a habitat, for moving animals in and out.
    #[must_use]
    pub fn biome_mut(&mut self, id: HabitatId) -> Option<&mut Biome> {
        self.habitats.get_mut(id.0).and_then(|h| h.biome.as_mut())
    }

    /// Remove the biome from a habitat, returning its tile.
    pub fn clear_habitat(&mut self, id: HabitatId) -> Option<Tile> {
        self.habitats
            .get_mut(id.0)
            .and_then(|h| h.biome.take())
            .map(Biome::into_tile)
    }
}
