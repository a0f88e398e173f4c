use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// a single card in the standard 52-card deck.
/// integer encoding: rank = n % 13, suit = n / 13.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.suit as u8) * 13 + (c.rank as u8)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52);
        Self {
            rank: Rank::from(n % 13),
            suit: Suit::from(n / 13),
        }
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!((0..52u8).all(|n| n == u8::from(Card::from(n))));
    }

    #[test]
    fn encoding() {
        let card = Card::from(12u8);
        assert!(card.rank() == Rank::Ace);
        assert!(card.suit() == Suit::C);
        let card = Card::from(51u8);
        assert!(card.rank() == Rank::Ace);
        assert!(card.suit() == Suit::S);
    }
}
