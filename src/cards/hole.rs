use super::card::Card;
use super::hand::Hand;

/// a seat's two private cards, in deal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole(pub Card, pub Card);

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(vec![hole.0, hole.1])
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(a, b)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
