#![no_main]

use libfuzzer_sys::fuzz_target;
use megafauna::board::{HabitatKey, LatitudeKey};
use megafauna::ecology::{Animal, Genome, Niche};

fuzz_target!(|data: &str| {
    // Parsers must reject bad input with an error, never a panic.
    if let Ok(genome) = data.parse::<Genome>() {
        // Canonical form parses back to the same genome.
        let again: Genome = genome.to_string().parse().unwrap();
        assert_eq!(again, genome);
        assert!(genome.can_feed_on(&Genome::empty()));
    }

    if let Ok(niche) = data.parse::<Niche>() {
        let again: Niche = niche.to_string().parse().unwrap();
        assert_eq!(again, niche);
    }

    if let Ok(animal) = data.parse::<Animal>() {
        assert!(animal.silhouette().is_some());
    }

    let _ = data.parse::<LatitudeKey>();
    let _ = data.parse::<HabitatKey>();
});
