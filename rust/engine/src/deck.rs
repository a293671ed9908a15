use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The 52-card stock for one hand, ordered as a stack: dealing consumes
/// from the top. Shuffling is deterministic for a given seed.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Deck seeded from the thread RNG; used for live play.
    pub fn new() -> Self {
        Self::new_with_seed(rand::rng().random())
    }

    /// Deterministic deck: the same seed always yields the same shuffle order.
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep the fixed construction order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Discards the top card face-down before a board reveal.
    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::new_with_seed(7);
        let mut b = Deck::new_with_seed(7);
        a.shuffle();
        b.shuffle();
        for _ in 0..52 {
            assert_eq!(a.deal_card(), b.deal_card());
        }
        assert_eq!(a.deal_card(), None);
    }

    #[test]
    fn burn_consumes_one_card() {
        let mut d = Deck::new_with_seed(1);
        d.shuffle();
        d.burn_card();
        assert_eq!(d.remaining(), 51);
    }
}
