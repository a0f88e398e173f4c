use super::card::Card;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// a full 52-card deck with a draw cursor.
/// the permutation is fixed at shuffle time, so rolling back
/// a deal is just rewinding the cursor: the same cards come
/// off again in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; 52],
    draws: usize,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = [Card::from(0u8); 52];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::from(i as u8);
        }
        Self { cards, draws: 0 }
    }
    pub fn shuffle(&mut self, rng: &mut SmallRng) {
        self.cards.shuffle(rng);
        self.draws = 0;
    }
    pub fn draw(&mut self) -> Card {
        assert!(self.draws < 52);
        let card = self.cards[self.draws];
        self.draws += 1;
        card
    }
    pub fn rewind(&mut self, draws: usize) {
        assert!(draws <= self.draws);
        self.draws = draws;
    }
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
