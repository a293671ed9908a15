use crate::cards::Card;
use crate::deck::Deck;

/// Community cards for one hand. The card count only rests at 0, 3, 4, or 5;
/// each reveal burns one card from the deck first. Calling a reveal out of
/// sequence is a caller bug and panics.
#[derive(Debug, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn deal_flop(&mut self, deck: &mut Deck) {
        assert!(self.cards.is_empty(), "flop dealt out of sequence");
        deck.burn_card();
        for _ in 0..3 {
            self.cards.push(Self::draw(deck));
        }
    }

    pub fn deal_turn(&mut self, deck: &mut Deck) {
        assert_eq!(self.cards.len(), 3, "turn dealt out of sequence");
        deck.burn_card();
        self.cards.push(Self::draw(deck));
    }

    pub fn deal_river(&mut self, deck: &mut Deck) {
        assert_eq!(self.cards.len(), 4, "river dealt out of sequence");
        deck.burn_card();
        self.cards.push(Self::draw(deck));
    }

    fn draw(deck: &mut Deck) -> Card {
        // A 52-card deck always covers one full hand; running out means
        // the deck was not rebuilt between hands.
        deck.deal_card().expect("deck exhausted during board reveal")
    }
}
