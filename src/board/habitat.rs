//! Habitats and the biomes that occupy them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::board::LatitudeKey;
use crate::ecology::{Animal, HerbivoreContest, PredationContest};
use crate::error::RulesError;
use crate::tiles::{BiomeTile, Tile, TileHeader, TileKind};

/// Index of a habitat in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HabitatId(pub(crate) usize);

impl HabitatId {
    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A habitat's printed key: latitude letter plus zero-based column, e.g. `T6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitatKey {
    /// Latitude row the habitat sits in.
    pub latitude: LatitudeKey,
    /// Column within the row.
    pub index: u8,
}

impl HabitatKey {
    /// Create a key.
    #[must_use]
    pub const fn new(latitude: LatitudeKey, index: u8) -> Self {
        Self { latitude, index }
    }
}

impl fmt::Display for HabitatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.latitude, self.index)
    }
}

impl FromStr for HabitatKey {
    type Err = RulesError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || RulesError::InvalidHabitatKey(key.to_string());
        let mut chars = key.chars();
        let latitude = chars
            .next()
            .and_then(LatitudeKey::from_char)
            .filter(|k| !k.is_orogeny())
            .ok_or_else(invalid)?;
        let rest = chars.as_str();
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = rest.parse().map_err(|_| invalid())?;
        Ok(Self { latitude, index })
    }
}

impl Serialize for HabitatKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compass direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Direction {
    /// Toward the Arctic.
    North = 0,
    /// Right.
    East = 1,
    /// Toward the Tropics.
    South = 2,
    /// Left.
    West = 3,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A biome tile in play, with the animals living in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Biome {
    /// Identity of the tile this biome came from.
    pub header: TileHeader,
    /// Rules data printed on the tile.
    pub data: BiomeTile,
    /// Occupant of the herbivore slot.
    pub herbivore: Option<Animal>,
    /// Occupant of the rooter slot.
    pub rooter: Option<Animal>,
    /// Carnivores in the predator slot.
    pub carnivores: Vec<Animal>,
}

impl Biome {
    /// Put a biome tile into play.
    ///
    /// # Errors
    ///
    /// Hands the tile back unchanged if it is not a biome tile.
    pub fn from_tile(tile: Tile) -> Result<Self, Tile> {
        match tile.kind {
            TileKind::Biome(data) => Ok(Self {
                header: tile.header,
                data,
                herbivore: None,
                rooter: None,
                carnivores: Vec::new(),
            }),
            TileKind::Immigrant(_) => Err(tile),
        }
    }

    /// Take the tile back out of play. Resident animals are dropped.
    #[must_use]
    pub fn into_tile(self) -> Tile {
        Tile {
            header: self.header,
            kind: TileKind::Biome(self.data),
        }
    }

    /// The biome's climax number.
    #[must_use]
    pub const fn climax_number(&self) -> u32 {
        self.data.climax_number
    }

    /// Contest between `candidates` for this biome's herbivore slot.
    #[must_use]
    pub fn herbivore_contest<'a>(&'a self, candidates: &'a [Animal]) -> HerbivoreContest<'a> {
        HerbivoreContest::new(candidates, &self.data.requirements, self.data.niche)
    }

    /// Contest for the rooter slot, judged on the rooter requirements and
    /// the biome's niche. `None` if the tile has no rooter requirements.
    #[must_use]
    pub fn rooter_contest<'a>(&'a self, candidates: &'a [Animal]) -> Option<HerbivoreContest<'a>> {
        self.data
            .rooter_requirements
            .as_ref()
            .map(|requirements| HerbivoreContest::new(candidates, requirements, self.data.niche))
    }

    /// The herbivore then the rooter, skipping empty slots.
    pub fn prey(&self) -> impl Iterator<Item = &Animal> + '_ {
        self.herbivore.iter().chain(&self.rooter)
    }

    /// Contest between the predators here and the herbivore and rooter.
    /// Kills are reported in [`Biome::prey`] order.
    #[must_use]
    pub fn predation_contest(&self) -> PredationContest<'_> {
        PredationContest::from_slots(
            &self.carnivores,
            [self.herbivore.as_ref(), self.rooter.as_ref()],
        )
    }
}

/// A space on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habitat {
    pub(crate) id: HabitatId,
    pub(crate) key: HabitatKey,
    pub(crate) climax_number: u32,
    pub(crate) orogeny: bool,
    pub(crate) neighbors: [Option<HabitatId>; 4],
    pub(crate) biome: Option<Biome>,
}

impl Habitat {
    pub(crate) const fn new(id: HabitatId, key: HabitatKey, climax_number: u32) -> Self {
        Self {
            id,
            key,
            climax_number,
            orogeny: false,
            neighbors: [None; 4],
            biome: None,
        }
    }

    /// Arena id.
    #[must_use]
    pub const fn id(&self) -> HabitatId {
        self.id
    }

    /// Printed key.
    #[must_use]
    pub const fn key(&self) -> HabitatKey {
        self.key
    }

    /// Climax number printed on the board.
    #[must_use]
    pub const fn printed_climax_number(&self) -> u32 {
        self.climax_number
    }

    /// Climax number that counts for placement: the occupying biome's if
    /// there is one, otherwise the printed number.
    #[must_use]
    pub fn effective_climax_number(&self) -> u32 {
        self.biome
            .as_ref()
            .map_or(self.climax_number, Biome::climax_number)
    }

    /// Check if this is an orogeny habitat.
    #[must_use]
    pub const fn is_orogeny(&self) -> bool {
        self.orogeny
    }

    /// Neighbor in `direction`, `None` at the board edge.
    #[must_use]
    pub const fn neighbor(&self, direction: Direction) -> Option<HabitatId> {
        self.neighbors[direction.index()]
    }

    /// All present neighbors with their directions.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, HabitatId)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbor(dir).map(|id| (dir, id)))
    }

    /// The occupying biome, if any.
    #[must_use]
    pub const fn biome(&self) -> Option<&Biome> {
        self.biome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habitat_key_round_trip() {
        let key: HabitatKey = "T6".parse().unwrap();
        assert_eq!(key, HabitatKey::new(LatitudeKey::Tropics, 6));
        assert_eq!(key.to_string(), "T6");
        assert_eq!("J11".parse::<HabitatKey>().unwrap().index, 11);
    }

    #[test]
    fn test_habitat_key_rejects_garbage() {
        for key in ["", "T", "6", "X1", "O1", "T-1", "T1a"] {
            assert!(key.parse::<HabitatKey>().is_err(), "{key:?}");
        }
    }

    #[test]
    fn test_direction_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_effective_climax_prefers_biome() {
        let mut habitat = Habitat::new(HabitatId(0), HabitatKey::new(LatitudeKey::Arctic, 0), 2);
        assert_eq!(habitat.effective_climax_number(), 2);

        let tile = crate::tiles::Catalog::mesozoic()
            .unwrap()
            .get("MA16")
            .cloned()
            .unwrap();
        habitat.biome = Some(Biome::from_tile(tile).unwrap());
        assert_eq!(habitat.effective_climax_number(), 16);
        assert_eq!(habitat.printed_climax_number(), 2);
    }

    fn biome(key: &str) -> Biome {
        let tile = crate::tiles::Catalog::mesozoic()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap();
        Biome::from_tile(tile).unwrap()
    }

    fn animal(spec: &str) -> Animal {
        spec.parse().unwrap()
    }

    #[test]
    fn test_rooter_contest_uses_rooter_requirements() {
        // Polar Forest: rooters need H, niche N.
        let forest = biome("MA16");
        let candidates = [animal("2:4:BB"), animal("3:2:H"), animal("4:3:HB")];
        let contest = forest.rooter_contest(&candidates).unwrap();
        assert_eq!(contest.resolve().winner, Some(2));

        // No H at all: nobody can root here.
        let candidates = [animal("2:4:BB")];
        let contest = forest.rooter_contest(&candidates).unwrap();
        assert_eq!(contest.resolve().winner, None);
    }

    #[test]
    fn test_no_rooter_contest_without_rooter_requirements() {
        let ferns = biome("MJ15");
        assert!(ferns.data.rooter_requirements.is_none());
        assert!(ferns.rooter_contest(&[animal("2:4:H")]).is_none());
    }

    #[test]
    fn test_predation_targets_both_slots() {
        let mut forest = biome("MA16");
        forest.carnivores.push(animal("5:2:PPBH"));
        forest.carnivores.push(animal("4:3:PB"));
        assert!(forest.predation_contest().resolve().kills.is_empty());

        forest.rooter = Some(animal("3:3:H"));
        assert_eq!(forest.predation_contest().resolve().kills, vec![Some(0)]);

        forest.herbivore = Some(animal("2:3:B"));
        let prey: Vec<&Animal> = forest.prey().collect();
        assert_eq!(prey[0].dentition, 2);
        assert_eq!(prey[1].dentition, 3);

        // The PP carnivore wins both; the other cannot catch the rooter.
        let outcome = forest.predation_contest().resolve();
        assert_eq!(outcome.kills, vec![Some(0), Some(0)]);
    }

    #[test]
    fn test_immigrant_is_not_a_biome() {
        let tile = crate::tiles::Catalog::mesozoic()
            .unwrap()
            .get("M4")
            .cloned()
            .unwrap();
        let back = Biome::from_tile(tile.clone()).unwrap_err();
        assert_eq!(back, tile);
    }
}
