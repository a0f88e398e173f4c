use crate::cards::strength::Strength;
use crate::Chips;
use crate::N;

/// what happens when two winners table the same hand.
/// First matches the behavior the blueprint was trained under:
/// the earliest seat takes the whole layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ties {
    First,
    Split,
}

/// one seat's claim on the pot: chips risked over the whole
/// hand, whether they reached showdown, and their best hand.
#[derive(Debug, Clone, Copy)]
pub struct Claim {
    pub risked: Chips,
    pub folded: bool,
    pub strength: Option<Strength>,
}

/// layered side-pot settlement.
///
/// contribution levels ascend over the distinct positive amounts
/// risked; each layer holds (level - prev) chips from every seat
/// that risked at least the level, and goes to the best hand
/// among the layer's unfolded contributors. every chip risked is
/// paid back out, so settlement conserves the pot exactly.
pub struct Showdown {
    claims: [Claim; N],
    ties: Ties,
}

impl From<([Claim; N], Ties)> for Showdown {
    fn from((claims, ties): ([Claim; N], Ties)) -> Self {
        Self { claims, ties }
    }
}

impl Showdown {
    pub fn settle(self) -> [Chips; N] {
        let mut rewards = [0; N];
        let mut prev = 0;
        for level in self.levels() {
            let chips = (level - prev) * self.contributors(level) as Chips;
            let winners = self.winners(level);
            assert!(!winners.is_empty(), "some live seat covers every layer");
            match self.ties {
                Ties::First => rewards[winners[0]] += chips,
                Ties::Split => {
                    let share = chips / winners.len() as Chips;
                    let spare = chips % winners.len() as Chips;
                    for (i, &w) in winners.iter().enumerate() {
                        rewards[w] += share + if (i as Chips) < spare { 1 } else { 0 };
                    }
                }
            }
            prev = level;
        }
        rewards
    }

    /// ascending distinct positive contribution levels
    fn levels(&self) -> Vec<Chips> {
        let mut levels = self
            .claims
            .iter()
            .map(|c| c.risked)
            .filter(|&r| r > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        levels
    }
    fn contributors(&self, level: Chips) -> usize {
        self.claims.iter().filter(|c| c.risked >= level).count()
    }
    /// the best-hand seats among live contributors of this layer
    fn winners(&self, level: Chips) -> Vec<usize> {
        let best = self
            .claims
            .iter()
            .filter(|c| !c.folded && c.risked >= level)
            .filter_map(|c| c.strength)
            .max();
        self.claims
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.folded && c.risked >= level)
            .filter(|(_, c)| c.strength == best)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;

    fn strength(cards: &[u8]) -> Option<Strength> {
        Some(Strength::from(Hand::from(
            cards.iter().map(|&c| Card::from(c)).collect::<Vec<_>>(),
        )))
    }

    // boards are (rank + 13 * suit); ranks 0=2 .. 12=A
    const BOARD: [u8; 5] = [0, 14, 4, 31, 9]; // 2c 3d 6c 7h Jc

    fn claim(risked: Chips, folded: bool, hole: &[u8]) -> Claim {
        let cards = hole.iter().chain(BOARD.iter()).cloned().collect::<Vec<u8>>();
        Claim {
            risked,
            folded,
            strength: if folded { None } else { strength(&cards) },
        }
    }

    #[test]
    fn single_pot_goes_to_best_hand() {
        let claims = [
            claim(10, false, &[12, 25]), // AA
            claim(10, false, &[11, 24]), // KK
            claim(10, false, &[2, 15]),  // 44
        ];
        let rewards = Showdown::from((claims, Ties::First)).settle();
        assert!(rewards == [30, 0, 0]);
    }

    #[test]
    fn short_all_in_wins_only_the_main_pot() {
        // seat 0 is all in short with the best hand; the side
        // pot between seats 1 and 2 goes to the better of them
        let claims = [
            claim(5, false, &[12, 25]),  // AA
            claim(10, false, &[11, 24]), // KK
            claim(10, false, &[2, 15]),  // 44
        ];
        let rewards = Showdown::from((claims, Ties::First)).settle();
        assert!(rewards == [15, 10, 0]);
    }

    #[test]
    fn folded_chips_stay_in_the_layers_they_entered() {
        let claims = [
            claim(4, true, &[12, 25]),
            claim(10, false, &[11, 24]), // KK
            claim(10, false, &[2, 15]),  // 44
        ];
        let rewards = Showdown::from((claims, Ties::First)).settle();
        assert!(rewards.iter().sum::<Chips>() == 24);
        assert!(rewards == [0, 24, 0]);
    }

    // broadway on board with rainbow suits: every live seat
    // plays the board and ties with an ace-high straight
    const RUNOUT: [u8; 5] = [8, 22, 36, 50, 12]; // Tc Jd Qh Ks Ac

    fn board_play(risked: Chips, folded: bool, hole: &[u8]) -> Claim {
        let cards = hole.iter().chain(RUNOUT.iter()).cloned().collect::<Vec<u8>>();
        Claim {
            risked,
            folded,
            strength: if folded { None } else { strength(&cards) },
        }
    }

    #[test]
    fn first_policy_awards_ties_to_the_earliest_seat() {
        let claims = [
            board_play(10, false, &[0, 27]),
            board_play(10, false, &[13, 28]),
            board_play(10, true, &[1, 2]),
        ];
        assert!(claims[0].strength == claims[1].strength);
        let rewards = Showdown::from((claims, Ties::First)).settle();
        assert!(rewards == [30, 0, 0]);
    }

    #[test]
    fn split_policy_divides_evenly_with_odd_chips_first() {
        let claims = [
            board_play(7, false, &[0, 27]),
            board_play(7, false, &[13, 28]),
            board_play(7, true, &[1, 2]),
        ];
        let rewards = Showdown::from((claims, Ties::Split)).settle();
        assert!(rewards == [11, 10, 0]);
    }

    #[test]
    fn settlement_conserves_the_pot() {
        let claims = [
            claim(40, false, &[12, 25]),
            claim(40, false, &[11, 24]),
            claim(17, true, &[2, 16]),
        ];
        let rewards = Showdown::from((claims, Ties::First)).settle();
        assert!(rewards.iter().sum::<Chips>() == 97);
    }
}
