use super::odds::Odds;
use crate::PREFLOP_RAISE;

/// an abstract action. Raise carries an index into the street's
/// sizing grid: absolute big-blind totals preflop, pot fractions
/// postflop. Draw is the public community-card marker that keeps
/// round structure inside the action history.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
pub enum Edge {
    Fold,
    Check,
    Call,
    Raise(u8),
    Shove,
    Draw,
}

impl Edge {
    /// the abstract action index: 0 fold, 1 check/call,
    /// 2..=8 raise sizes, 9 all in, 10 the deal marker
    pub fn index(&self) -> usize {
        match self {
            Edge::Fold => 0,
            Edge::Check | Edge::Call => 1,
            Edge::Raise(i) => 2 + *i as usize,
            Edge::Shove => 9,
            Edge::Draw => 10,
        }
    }
    pub fn n_sizes() -> usize {
        assert!(PREFLOP_RAISE.len() == Odds::GRID.len());
        Odds::GRID.len()
    }
    pub fn is_raise(&self) -> bool {
        matches!(self, Edge::Raise(_))
    }
    pub fn is_shove(&self) -> bool {
        matches!(self, Edge::Shove)
    }
    pub fn is_aggro(&self) -> bool {
        self.is_raise() || self.is_shove()
    }
    pub fn is_chance(&self) -> bool {
        matches!(self, Edge::Draw)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Fold => write!(f, "F"),
            Edge::Check => write!(f, "X"),
            Edge::Call => write!(f, "C"),
            Edge::Raise(i) => write!(f, "R{}", i),
            Edge::Shove => write!(f, "!"),
            Edge::Draw => write!(f, "/"),
        }
    }
}
