#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use megafauna::ecology::{
    Animal, DnaLetter, Genome, HerbivoreContest, Niche, PredationContest, check_eligibility,
};

/// One fuzzed animal.
#[derive(Arbitrary, Debug)]
struct AnimalInput {
    dentition: u8,
    size: u8,
    /// Indices into the DNA alphabet.
    dna: Vec<u8>,
    silhouette: u8,
}

impl AnimalInput {
    fn build(&self) -> Animal {
        let letters = self
            .dna
            .iter()
            .take(16)
            .map(|&i| DnaLetter::ALL[usize::from(i) % DnaLetter::ALL.len()]);
        Animal::species(
            self.dentition,
            self.size,
            Genome::from_letters(letters),
            self.silhouette % 4,
        )
    }
}

/// Structured input for contest fuzzing.
#[derive(Arbitrary, Debug)]
struct ContestInput {
    herbivores: Vec<AnimalInput>,
    carnivores: Vec<AnimalInput>,
    requirements: Vec<u8>,
    /// 0 = size, 1-4 = dentition 2-5, otherwise a DNA letter.
    niche: u8,
}

fuzz_target!(|input: ContestInput| {
    let herbivores: Vec<Animal> = input.herbivores.iter().take(8).map(AnimalInput::build).collect();
    let carnivores: Vec<Animal> = input.carnivores.iter().take(8).map(AnimalInput::build).collect();
    let requirements = Genome::from_letters(
        input
            .requirements
            .iter()
            .take(8)
            .map(|&i| DnaLetter::DIETARY[usize::from(i) % DnaLetter::DIETARY.len()]),
    );
    let niche = match input.niche {
        0 => Niche::Size,
        n @ 1..=4 => Niche::Dentition(n + 1),
        n => Niche::DnaLetter(DnaLetter::ALL[usize::from(n) % DnaLetter::ALL.len()]),
    };

    let outcome = HerbivoreContest::new(&herbivores, &requirements, niche).resolve();
    assert_eq!(outcome.scores.len(), herbivores.len());
    if let Some(idx) = outcome.winner {
        assert!(herbivores[idx].genome.can_feed_on(&requirements));
    }

    // Contests hold at most two prey.
    let prey = &herbivores[..herbivores.len().min(2)];
    let outcome = match PredationContest::new(&carnivores, prey) {
        Ok(contest) => contest.resolve(),
        Err(e) => panic!("two prey rejected: {e}"),
    };
    for (victim, kill) in prey.iter().zip(&outcome.kills) {
        if let Some(idx) = kill {
            assert!(check_eligibility(&carnivores[*idx], victim).is_ok());
        }
    }

    if herbivores.len() > 2 {
        assert!(PredationContest::new(&carnivores, &herbivores).is_err());
    }
});
