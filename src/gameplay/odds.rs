use crate::Chips;

/// a bet size as a ratio of the pot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Odds(pub Chips, pub Chips);

impl Odds {
    /// postflop bet sizing grid: quarter pot up to 3/2 pot,
    /// applied to the pot as seen after calling.
    pub const GRID: [Self; 7] = [
        Self(1, 4),
        Self(1, 3),
        Self(1, 2),
        Self(2, 3),
        Self(3, 4),
        Self(1, 1),
        Self(3, 2),
    ];

    /// scale the pot by this ratio, rounded to the nearest chip
    pub fn scale(&self, pot: Chips) -> Chips {
        let Odds(numer, denom) = self;
        (pot * numer + denom / 2) / denom
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}
