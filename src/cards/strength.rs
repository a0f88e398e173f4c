use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kicks;
use super::ranking::Ranking;

/// a hand's total-ordered strength.
/// comparison is lexicographic: category and defining ranks
/// first, then kicker cards. equal five-card hands compare
/// equal no matter the order or suits the cards came in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kicks,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}
impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self { value, kicks }
    }
}
impl From<(Ranking, Kicks)> for Strength {
    fn from((value, kicks): (Ranking, Kicks)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}
