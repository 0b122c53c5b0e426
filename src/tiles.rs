//! Biome and immigrant tiles.
//!
//! Tiles are drawn from era stacks and placed on the board. Biome tiles
//! occupy habitats; immigrant tiles bring animals into the habitat they
//! target.

mod catalog;
mod stack;

pub use catalog::Catalog;
pub use stack::TileStacks;

use serde::Serialize;

use crate::board::LatitudeKey;
use crate::ecology::{
    Animal, Genome, IMMIGRANT_HERBIVORE_DENTITION, IMMIGRANT_PREDATOR_DENTITION, Niche,
};

/// Geological era a tile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// First stack.
    Mesozoic,
    /// Second stack.
    Cenozoic,
}

/// Where a tile can live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    /// Land only.
    Land,
    /// Sea only.
    Sea,
    /// Land and sea.
    Both,
}

impl Terrain {
    /// Build from land/sea flags. `None` if neither is set.
    #[must_use]
    pub const fn from_flags(land: bool, sea: bool) -> Option<Self> {
        match (land, sea) {
            (true, true) => Some(Terrain::Both),
            (true, false) => Some(Terrain::Land),
            (false, true) => Some(Terrain::Sea),
            (false, false) => None,
        }
    }

    /// Check if land animals or biomes apply.
    #[must_use]
    pub const fn is_land(self) -> bool {
        matches!(self, Terrain::Land | Terrain::Both)
    }

    /// Check if sea animals or biomes apply.
    #[must_use]
    pub const fn is_sea(self) -> bool {
        matches!(self, Terrain::Sea | Terrain::Both)
    }
}

/// Fields every tile carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileHeader {
    /// Unique key, e.g. `MA16`.
    pub key: String,
    /// Stack the tile belongs to.
    pub era: Era,
    /// Latitude the tile is placed in.
    pub latitude: LatitudeKey,
    /// Land, sea, or both.
    pub terrain: Terrain,
    /// Small print above the title.
    pub supertitle: String,
    /// Title.
    pub title: String,
}

/// Rules data on a biome tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiomeTile {
    /// Climax number; higher biomes displace lower ones.
    pub climax_number: u32,
    /// DNA a herbivore needs to live here.
    pub requirements: Genome,
    /// Alternate requirements for rooters.
    pub rooter_requirements: Option<Genome>,
    /// Tie-breaking niche.
    pub niche: Niche,
    /// Red star printed.
    pub red_star: bool,
    /// Blue star printed.
    pub blue_star: bool,
    /// Triggers warming when drawn.
    pub warming: bool,
    /// Triggers cooling when drawn.
    pub cooling: bool,
}

/// Rules data on an immigrant tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImmigrantTile {
    /// Printed size. Absent on predator immigrants, which take the size of
    /// their prey.
    pub size: Option<u8>,
    /// DNA.
    pub dna: Genome,
}

impl ImmigrantTile {
    /// Check if this immigrant is a herbivore.
    #[must_use]
    pub const fn is_herbivore(&self) -> bool {
        self.size.is_some()
    }

    /// The herbivore this tile brings in, `None` for predators.
    #[must_use]
    pub fn herbivore(&self, tile: &str) -> Option<Animal> {
        self.size
            .map(|size| Animal::immigrant(IMMIGRANT_HERBIVORE_DENTITION, size, self.dna, tile))
    }

    /// The predator this tile brings in at `size`, `None` for herbivores.
    #[must_use]
    pub fn predator(&self, tile: &str, size: u8) -> Option<Animal> {
        match self.size {
            Some(_) => None,
            None => Some(Animal::immigrant(
                IMMIGRANT_PREDATOR_DENTITION,
                size,
                self.dna,
                tile,
            )),
        }
    }
}

/// What a tile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileKind {
    /// Biome tile.
    Biome(BiomeTile),
    /// Immigrant tile.
    Immigrant(ImmigrantTile),
}

/// A tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Common fields.
    pub header: TileHeader,
    /// Kind-specific data.
    pub kind: TileKind,
}

impl Tile {
    /// Unique key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.header.key
    }

    /// Latitude the tile is placed in.
    #[must_use]
    pub const fn latitude(&self) -> LatitudeKey {
        self.header.latitude
    }

    /// Check if this is a biome tile.
    #[must_use]
    pub const fn is_biome(&self) -> bool {
        matches!(self.kind, TileKind::Biome(_))
    }

    /// Biome data, if this is a biome tile.
    #[must_use]
    pub const fn biome(&self) -> Option<&BiomeTile> {
        match &self.kind {
            TileKind::Biome(data) => Some(data),
            TileKind::Immigrant(_) => None,
        }
    }

    /// Immigrant data, if this is an immigrant tile.
    #[must_use]
    pub const fn immigrant(&self) -> Option<&ImmigrantTile> {
        match &self.kind {
            TileKind::Immigrant(data) => Some(data),
            TileKind::Biome(_) => None,
        }
    }

    /// Check if this is an orogeny biome: a land biome keyed to the orogeny
    /// latitude.
    #[must_use]
    pub const fn is_orogeny(&self) -> bool {
        self.is_biome() && self.header.latitude.is_orogeny() && self.header.terrain.is_land()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_flags() {
        assert_eq!(Terrain::from_flags(true, true), Some(Terrain::Both));
        assert_eq!(Terrain::from_flags(false, false), None);
        assert!(Terrain::Both.is_land() && Terrain::Both.is_sea());
        assert!(!Terrain::Sea.is_land());
    }

    #[test]
    fn test_tile_data_is_copy() {
        let catalog = Catalog::mesozoic().unwrap();
        let tile = catalog.get("MA16").unwrap();

        let kind = tile.kind;
        let data = *tile.biome().unwrap();
        let again = data;
        assert_eq!(data, again);
        assert_eq!(kind, TileKind::Biome(data));

        let raptors = *catalog.get("M4").unwrap().immigrant().unwrap();
        let copied = raptors;
        assert_eq!(raptors.dna, copied.dna);
    }

    #[test]
    fn test_immigrant_animals() {
        let catalog = Catalog::mesozoic().unwrap();

        let raptors = catalog.get("M4").unwrap().immigrant().unwrap();
        assert!(!raptors.is_herbivore());
        assert!(raptors.herbivore("M4").is_none());
        let predator = raptors.predator("M4", 3).unwrap();
        assert_eq!(predator.dentition, IMMIGRANT_PREDATOR_DENTITION);
        assert_eq!(predator.size, 3);
        assert_eq!(predator.genome.to_string(), "AASSP");
        assert_eq!(predator.silhouette(), None);

        let titanosaurs = catalog.get("M11").unwrap().immigrant().unwrap();
        let herbivore = titanosaurs.herbivore("M11").unwrap();
        assert_eq!(herbivore.size, 6);
        assert!(!herbivore.is_player_species());
        assert!(titanosaurs.predator("M11", 6).is_none());
    }

    #[test]
    fn test_orogeny_biomes() {
        let catalog = Catalog::mesozoic().unwrap();
        assert!(catalog.get("MO67").unwrap().is_orogeny());
        assert!(!catalog.get("MA16").unwrap().is_orogeny());
        assert!(!catalog.get("M4").unwrap().is_orogeny());
    }

    #[test]
    fn test_tile_json_is_tagged() {
        let catalog = Catalog::mesozoic().unwrap();
        let json = serde_json::to_string(catalog.get("MA16").unwrap()).unwrap();
        assert!(json.contains("\"kind\":\"biome\""));
        assert!(json.contains("\"requirements\":\"BB\""));
        assert!(json.contains("\"latitude\":\"A\""));
    }
}
