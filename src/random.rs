use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::card::Card;

/// In-place permutation of a card sequence. Shuffling is injected at
/// construction so a fixed seed replays a whole match deterministically.
pub type Shuffler = Box<dyn FnMut(&mut Vec<Card>)>;

/// Picks an integer in `[0, n)`; used to choose the dealer of each hand.
pub type Randomizer = Box<dyn FnMut(usize) -> usize>;

pub fn standard_shuffler() -> Shuffler {
    let mut rng = thread_rng();
    Box::new(move |cards: &mut Vec<Card>| cards.shuffle(&mut rng))
}

pub fn seeded_shuffler(seed: u64) -> Shuffler {
    let mut rng = StdRng::seed_from_u64(seed);
    Box::new(move |cards: &mut Vec<Card>| cards.shuffle(&mut rng))
}

pub fn standard_randomizer() -> Randomizer {
    let mut rng = thread_rng();
    Box::new(move |n| rng.gen_range(0..n))
}

pub fn seeded_randomizer(seed: u64) -> Randomizer {
    let mut rng = StdRng::seed_from_u64(seed);
    Box::new(move |n| rng.gen_range(0..n))
}
