//! The printed tile set.

use std::collections::HashSet;

use tracing::debug;

use crate::board::LatitudeKey;
use crate::ecology::{Genome, Niche};
use crate::error::{RulesError, RulesResult};
use crate::tiles::{BiomeTile, Era, ImmigrantTile, Terrain, Tile, TileHeader, TileKind};

const RED: u8 = 1;
const BLUE: u8 = 1 << 1;
const WARM: u8 = 1 << 2;
const COOL: u8 = 1 << 3;

/// Biome tile as printed: key, latitude, climax, type (`L`and, `S`ea or
/// `B`oth), supertitle, title, requirements, rooter requirements, niche,
/// star and climate flags.
#[derive(Clone, Copy)]
struct BiomeRecord(
    &'static str,
    char,
    u32,
    char,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u8,
);

/// Immigrant tile as printed: key, latitude, land, sea, size (0 for
/// predators), DNA, supertitle, title.
#[derive(Clone, Copy)]
struct ImmigrantRecord(
    &'static str,
    char,
    bool,
    bool,
    u8,
    &'static str,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const MESOZOIC_BIOMES: &[BiomeRecord] = &[
    BiomeRecord("MA16", 'A', 16, 'L', "Deciduous Gymnosperm", "Polar Forest", "BB", "H", "N", RED),
    BiomeRecord("MA20", 'A', 20, 'L', "Cordaites", "Broadleaf Conifer Forest", "BB", "", "size", 0),
    BiomeRecord("MA30", 'A', 30, 'L', "Gingkophytes", "Ginkgo Woodland", "B", "", "P", RED),
    BiomeRecord("MA53", 'A', 53, 'L', "Mycophycophytes", "Lichen Tundra", "GG", "", "size", BLUE),
    BiomeRecord("MA72", 'A', 72, 'L', "Deciduous Larix", "Larch Forest", "BG", "", "size", 0),
    BiomeRecord("MH12", 'H', 12, 'L', "Cordaitalies", "Araucarites \"Petrified\" Forest", "BB", "", "A", BLUE),
    BiomeRecord("MH14", 'H', 14, 'S', "Ganoid", "Palaeoniscid Ray-Fins", "M", "", "M", 0),
    BiomeRecord("MH24", 'H', 24, 'L', "Gymnosperm Bennititalean", "Cycadoid", "B", "H", "S", 0),
    BiomeRecord("MH38", 'H', 38, 'S', "Crinoid", "Sea Lily Beds", "AM", "", "M", 0),
    BiomeRecord("MH43", 'H', 43, 'S', "Cephalopod", "Mediterranean Ammonites", "AM", "", "size", 0),
    BiomeRecord("MH44", 'H', 44, 'S', "Phaeophyta", "Coastal Kelp Forest", "MM", "", "size", 0),
    BiomeRecord("MH48", 'H', 48, 'S', "Cephalopod", "Belemnites", "M", "", "N", 0),
    BiomeRecord("MH49", 'H', 49, 'S', "Pelecypod", "Clam and Oyster Beds", "AAM", "", "P", 0),
    BiomeRecord("MJ15", 'J', 15, 'L', "Pteridospermophytes", "Seed Ferns", "B", "", "I", RED),
    BiomeRecord("MJ17", 'J', 17, 'L', "Cycadofilicales", "Cycad Woods", "BG", "H", "size", RED),
    BiomeRecord("MJ33", 'J', 33, 'S', "Coccolithophore", "Calcareous Plankton Bloom", "MM", "", "size", 0),
    BiomeRecord("MJ34", 'J', 34, 'L', "Pteridophytes", "Tree Ferns", "BB", "", "A", 0),
    BiomeRecord("MJ40", 'J', 40, 'L', "Cypressales", "Dawn Redwood Forest", "BB", "H", "A", 0),
    BiomeRecord("MJ51", 'J', 51, 'S', "Ceratids", "Euro-Boreal Ammonites", "AM", "", "N", RED),
    BiomeRecord("MJ52", 'J', 52, 'L', "Pinaceae Pagiophylum", "Conifer Taiga", "BB", "H", "I", 0),
    BiomeRecord("MJ54", 'J', 54, 'L', "Coniferales", "Boreal Spruce Tree Forest", "BB", "H", "A", 0),
    BiomeRecord("MO67", 'O', 67, 'L', "Variscan orogeny", "African Podocarp High Forest", "B", "", "size", RED),
    BiomeRecord("MO69", 'O', 69, 'L', "DeGeer bridge", "Iberian Sphagnum Bog", "I", "", "G", RED),
    BiomeRecord("MO70", 'O', 70, 'L', "Siberian traps", "Alpine Liverwort Meadow", "G", "", "P", WARM),
    BiomeRecord("MO94", 'O', 94, 'L', "CAMP", "Disaster Fern Spike", "I", "", "S", WARM),
    BiomeRecord("MT10", 'T', 10, 'L', "Lycopodiophytes", "Lepidodendrales Coal Swamp", "BB", "", "size", 0),
    BiomeRecord("MT18", 'T', 18, 'L', "Equisetophyta", "Calamites Thicket", "B", "N", "I", 0),
    BiomeRecord("MT26", 'T', 26, 'L', "Lycopodiophytes", "Lycopod Meadow", "I", "", "N", BLUE),
    BiomeRecord("MT27", 'T', 27, 'L', "Equisetophyta", "Horsetail Swamp", "G", "N", "size", 0),
    BiomeRecord("MT28", 'T', 28, 'S', "Lycophyta", "Quillwort Coastal Marsh", "M", "", "G", BLUE),
    BiomeRecord("MT32", 'T', 32, 'S', "Brachiopod", "Lampshell Shoals", "AAM", "", "P", 0),
    BiomeRecord("MT36", 'T', 36, 'S', "Actinistian", "Coelacanth Lobe-Fins", "MM", "", "P", 0),
    BiomeRecord("MT41", 'T', 41, 'L', "Cycadales", "Cycad Thicket", "B", "H", "S", BLUE),
    BiomeRecord("MT42", 'T', 42, 'L', "Isoptera", "Termite Mounds", "II", "", "A", BLUE),
    BiomeRecord("MT45", 'T', 45, 'S', "Rudistid Reef", "Aspidorhyneid Ray-Fins", "M", "", "M", 0),
    BiomeRecord("MT46", 'T', 46, 'S', "Sponge Reef", "Pycnodontid Ray-Fins", "M", "", "P", 0),
    BiomeRecord("MT50", 'T', 50, 'S', "Decapod", "Lobsters", "MM", "", "N", 0),
];

#[rustfmt::skip]
const MESOZOIC_IMMIGRANTS: &[ImmigrantRecord] = &[
    ImmigrantRecord("M1", 'A', true, false, 1, "HIIN", "Primitive mammal", "Multituberculates"),
    ImmigrantRecord("M2", 'A', true, false, 2, "BGGA", "Primitive ceratopsian", "Protoceratops"),
    ImmigrantRecord("M3", 'A', true, false, 5, "BBGA", "Ornithopod", "Igunaodonts"),
    ImmigrantRecord("M4", 'A', true, false, 0, "PAASS", "Saurischian theropod", "Velociraptors"),
    ImmigrantRecord("M5", 'J', true, true, 3, "BHHAA", "Primitive thyreophoran", "Scelidosaurs"),
    ImmigrantRecord("M6", 'J', true, false, 5, "BBA", "Theropod maniraptora", "Therizinosaurs"),
    ImmigrantRecord("M7", 'T', true, false, 1, "BII", "Sphenosuchian", "Crocodiles"),
    ImmigrantRecord("M8", 'T', true, false, 1, "BIS", "Primitive ornothschian", "Fabrosaurs"),
    ImmigrantRecord("M9", 'T', false, true, 2, "AMM", "Diapsid Chorstoderan", "Champosaurs"),
    ImmigrantRecord("M10", 'T', true, true, 2, "HAAM", "Euryapside reptile", "Placodonts"),
    ImmigrantRecord("M11", 'T', true, false, 6, "BBA", "Armored sauropod", "Titanosaurs"),
    ImmigrantRecord("M12", 'T', false, true, 6, "MMN", "Euryapside reptile", "Ichthyosaurs"),
    ImmigrantRecord("M13", 'T', false, true, 0, "PAMM", "Diapsid thracophra", "Pliosaurs"),
    ImmigrantRecord("M14", 'T', false, true, 0, "AAMM", "Diapsid lizard", "Mosasaurs"),
    ImmigrantRecord("M15", 'T', true, true, 0, "MNN", "Lissamphibian capotosaur", "Labyrinthodonts"),
    ImmigrantRecord("M16", 'T', true, true, 0, "AAM", "Mesosuchian sebecid", "Terrestrial crocodiles"),
];

/// An indexed set of tiles with unique keys.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tiles: Vec<Tile>,
}

impl Catalog {
    /// The printed Mesozoic biome and immigrant tiles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTile` if a printed record does not validate.
    pub fn mesozoic() -> RulesResult<Self> {
        let mut tiles = Vec::with_capacity(MESOZOIC_BIOMES.len() + MESOZOIC_IMMIGRANTS.len());
        for record in MESOZOIC_BIOMES {
            tiles.push(biome_tile(Era::Mesozoic, record)?);
        }
        for record in MESOZOIC_IMMIGRANTS {
            tiles.push(immigrant_tile(Era::Mesozoic, record)?);
        }
        let catalog = Self::from_tiles(tiles)?;
        debug!(tiles = catalog.len(), "mesozoic catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from arbitrary tiles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTile` if two tiles share a key.
    pub fn from_tiles(tiles: Vec<Tile>) -> RulesResult<Self> {
        let mut seen = HashSet::new();
        for tile in &tiles {
            if !seen.insert(tile.key()) {
                return Err(invalid(tile.key(), "duplicate key"));
            }
        }
        Ok(Self { tiles })
    }

    /// Look up a tile by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.key() == key)
    }

    /// All tiles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles of one era.
    pub fn era(&self, era: Era) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.header.era == era)
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> RulesError {
    RulesError::InvalidTile {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn latitude(key: &str, c: char) -> RulesResult<LatitudeKey> {
    LatitudeKey::from_char(c).ok_or_else(|| invalid(key, format!("unknown latitude {c:?}")))
}

fn genome(key: &str, dna: &str) -> RulesResult<Genome> {
    dna.parse().map_err(|e: RulesError| invalid(key, e.to_string()))
}

fn biome_tile(era: Era, record: &BiomeRecord) -> RulesResult<Tile> {
    let BiomeRecord(key, lat, climax, kind, supertitle, title, requirements, rooter, niche, flags) =
        *record;

    let terrain = match kind {
        'L' => Terrain::Land,
        'S' => Terrain::Sea,
        'B' => Terrain::Both,
        other => return Err(invalid(key, format!("unknown biome type {other:?}"))),
    };
    if climax == 0 {
        return Err(invalid(key, "climax number must be positive"));
    }
    let rooter_requirements = if rooter.is_empty() {
        None
    } else {
        Some(genome(key, rooter)?)
    };
    let niche: Niche = niche
        .parse()
        .map_err(|e: RulesError| invalid(key, e.to_string()))?;

    Ok(Tile {
        header: TileHeader {
            key: key.to_string(),
            era,
            latitude: latitude(key, lat)?,
            terrain,
            supertitle: supertitle.to_string(),
            title: title.to_string(),
        },
        kind: TileKind::Biome(BiomeTile {
            climax_number: climax,
            requirements: genome(key, requirements)?,
            rooter_requirements,
            niche,
            red_star: flags & RED != 0,
            blue_star: flags & BLUE != 0,
            warming: flags & WARM != 0,
            cooling: flags & COOL != 0,
        }),
    })
}

fn immigrant_tile(era: Era, record: &ImmigrantRecord) -> RulesResult<Tile> {
    let ImmigrantRecord(key, lat, land, sea, size, dna, supertitle, title) = *record;

    let terrain =
        Terrain::from_flags(land, sea).ok_or_else(|| invalid(key, "neither land nor sea"))?;
    let latitude = latitude(key, lat)?;
    if latitude.is_orogeny() {
        return Err(invalid(key, "immigrants cannot target orogeny"));
    }

    Ok(Tile {
        header: TileHeader {
            key: key.to_string(),
            era,
            latitude,
            terrain,
            supertitle: supertitle.to_string(),
            title: title.to_string(),
        },
        kind: TileKind::Immigrant(ImmigrantTile {
            size: (size > 0).then_some(size),
            dna: genome(key, dna)?,
        }),
    })
}
