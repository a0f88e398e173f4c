use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::BUCKETS_POST;
use crate::BUCKETS_PREF;
use crate::EQUITY_ROLLOUTS;
use crate::N_CANONICAL;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hash::Hash;
use std::hash::Hasher;

/// the card abstraction oracle: (hole, board, street) -> bucket.
///
/// with tables present, preflop hands go through the canonical
/// 169-hand lookup and postflop hands are assigned the nearest
/// learned equity cluster. with tables absent we fall back to a
/// deterministic heuristic, so the trainer always runs; the two
/// regimes produce different blueprints, which is why loading
/// logs which one is live.
pub struct Lookup {
    preflop: Option<Vec<u8>>,
    postflop: [Option<Vec<f32>>; 3],
}

impl Lookup {
    /// the heuristic-only oracle
    pub fn fallback() -> Self {
        Self {
            preflop: None,
            postflop: [None, None, None],
        }
    }

    /// load whatever bucket tables exist under dir.
    /// each missing artifact independently activates its fallback.
    pub fn load(dir: &std::path::Path) -> Self {
        let preflop = Self::table::<u8>(&dir.join("preflop.json"), N_CANONICAL);
        let postflop = [
            Self::table::<f32>(&dir.join("flop.json"), BUCKETS_POST as usize),
            Self::table::<f32>(&dir.join("turn.json"), BUCKETS_POST as usize),
            Self::table::<f32>(&dir.join("river.json"), BUCKETS_POST as usize),
        ];
        Self { preflop, postflop }
    }

    fn table<T: serde::de::DeserializeOwned>(
        path: &std::path::Path,
        len: usize,
    ) -> Option<Vec<T>> {
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|json| serde_json::from_str::<Vec<T>>(&json).map_err(anyhow::Error::from))
        {
            Ok(table) if table.len() == len => {
                log::info!("loaded {:<24} ({} entries)", path.display(), len);
                Some(table)
            }
            Ok(table) => {
                log::warn!(
                    "{} holds {} entries, expected {}; using fallback",
                    path.display(),
                    table.len(),
                    len
                );
                None
            }
            Err(e) => {
                log::warn!("missing {:<24} ({}); using fallback", path.display(), e);
                None
            }
        }
    }

    /// bucket index in [0, 15) preflop and [0, 50) postflop
    pub fn bucket(&self, hole: Hole, board: &Board, street: Street) -> u8 {
        match street {
            Street::Pref => match self.preflop {
                Some(ref table) => table[Self::canonical(hole)] % BUCKETS_PREF,
                None => Self::preflop_fallback(hole),
            },
            _ => match self.postflop[street as usize - 1] {
                Some(ref centers) => Self::nearest(Self::equity(hole, board), centers),
                None => Self::postflop_fallback(hole, board),
            },
        }
    }

    /// the canonical 169-hand index: pairs first by rank, then
    /// suited/offsuit combos packed by (high, low)
    pub fn canonical(hole: Hole) -> usize {
        let r0 = hole.0.rank() as usize;
        let r1 = hole.1.rank() as usize;
        let (high, low) = (r0.max(r1), r0.min(r1));
        if high == low {
            high
        } else {
            let suited = hole.0.suit() == hole.1.suit();
            13 + (high - 1) * high + 2 * low + if suited { 0 } else { 1 }
        }
    }

    /// rank-based heuristic mapped linearly into the preflop buckets
    fn preflop_fallback(hole: Hole) -> u8 {
        const TOP: f32 = (12 * 13 + 12 + 100 + 20 + 1) as f32;
        let r0 = hole.0.rank() as i32;
        let r1 = hole.1.rank() as i32;
        let (high, low) = (r0.max(r1), r0.min(r1));
        let mut score = high * 13 + low;
        if high == low {
            score += 100;
        }
        if hole.0.suit() == hole.1.suit() {
            score += 20;
        }
        ((score as f32 / TOP) * BUCKETS_PREF as f32) as u8 % BUCKETS_PREF
    }

    /// hand category mapped linearly into the postflop buckets
    fn postflop_fallback(hole: Hole, board: &Board) -> u8 {
        let hand = Hand::add(Hand::from(hole), Hand::from(*board));
        let category = Strength::from(hand).value().category();
        ((category as f32 / 9.) * BUCKETS_POST as f32) as u8 % BUCKETS_POST
    }

    fn nearest(equity: f32, centers: &[f32]) -> u8 {
        centers
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (equity - **a)
                    .abs()
                    .partial_cmp(&(equity - **b).abs())
                    .expect("centers are finite")
            })
            .map(|(i, _)| i as u8)
            .expect("non-empty centers")
            % BUCKETS_POST
    }

    /// monte carlo equity against one random opponent hand.
    /// the rollout rng is seeded from the observation itself, so
    /// equal observations always estimate equal equity and the
    /// oracle stays a pure function.
    pub fn equity(hole: Hole, board: &Board) -> f32 {
        let ref mut rng = SmallRng::seed_from_u64(Self::seed(hole, board));
        let mine = Hand::add(Hand::from(hole), Hand::from(*board));
        let rest = (0..52u8)
            .map(Card::from)
            .filter(|c| !mine.contains(c))
            .collect::<Vec<Card>>();
        let missing = 5 - board.len();
        let mut wins = 0.;
        for _ in 0..EQUITY_ROLLOUTS {
            let mut deck = rest.clone();
            deck.shuffle(rng);
            let theirs = Hand::from(vec![deck[0], deck[1]]);
            let runout = Hand::from(deck[2..2 + missing].to_vec());
            let shared = Hand::add(Hand::from(*board), runout);
            let ours = Strength::from(Hand::add(Hand::from(hole), shared));
            let opps = Strength::from(Hand::add(theirs, shared));
            if ours > opps {
                wins += 1.;
            } else if ours == opps {
                wins += 0.5;
            }
        }
        wins / EQUITY_ROLLOUTS as f32
    }

    fn seed(hole: Hole, board: &Board) -> u64 {
        let ref mut hasher = std::collections::hash_map::DefaultHasher::new();
        u8::from(hole.0).hash(hasher);
        u8::from(hole.1).hash(hasher);
        for card in board.cards() {
            u8::from(*card).hash(hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn hole(r0: Rank, s0: Suit, r1: Rank, s1: Suit) -> Hole {
        Hole::from((Card::from((r0, s0)), Card::from((r1, s1))))
    }

    #[test]
    fn canonical_pairs_map_to_their_rank() {
        let aces = hole(Rank::Ace, Suit::S, Rank::Ace, Suit::H);
        let deuces = hole(Rank::Two, Suit::C, Rank::Two, Suit::D);
        assert!(Lookup::canonical(aces) == 12);
        assert!(Lookup::canonical(deuces) == 0);
    }

    #[test]
    fn canonical_distinguishes_suitedness() {
        let suited = hole(Rank::Ace, Suit::S, Rank::King, Suit::S);
        let offsuit = hole(Rank::Ace, Suit::S, Rank::King, Suit::H);
        assert!(Lookup::canonical(suited) + 1 == Lookup::canonical(offsuit));
    }

    #[test]
    fn canonical_ignores_card_order() {
        let ab = hole(Rank::Ace, Suit::S, Rank::King, Suit::H);
        let ba = hole(Rank::King, Suit::H, Rank::Ace, Suit::S);
        assert!(Lookup::canonical(ab) == Lookup::canonical(ba));
    }

    #[test]
    fn canonical_is_injective_over_169_classes() {
        use std::collections::BTreeSet;
        let mut seen = BTreeSet::new();
        for high in 0..13u8 {
            seen.insert(Lookup::canonical(hole(
                Rank::from(high),
                Suit::S,
                Rank::from(high),
                Suit::H,
            )));
            for low in 0..high {
                for suited in [true, false] {
                    let s1 = if suited { Suit::S } else { Suit::H };
                    seen.insert(Lookup::canonical(hole(
                        Rank::from(high),
                        Suit::S,
                        Rank::from(low),
                        s1,
                    )));
                }
            }
        }
        assert!(seen.len() == N_CANONICAL);
        assert!(seen.iter().all(|&i| i < N_CANONICAL));
    }

    #[test]
    fn fallback_buckets_stay_in_range() {
        let lookup = Lookup::fallback();
        let board = Board::empty();
        for a in 0..52u8 {
            for b in (a + 1)..52 {
                let hole = Hole::from((Card::from(a), Card::from(b)));
                assert!(lookup.bucket(hole, &board, Street::Pref) < BUCKETS_PREF);
            }
        }
    }

    #[test]
    fn fallback_postflop_tracks_category() {
        let lookup = Lookup::fallback();
        let mut board = Board::empty();
        for c in [2u8, 16, 30, 9, 23] {
            board.push(Card::from(c)); // 4c 5d 6h Jc Qd
        }
        let pair = hole(Rank::Jack, Suit::S, Rank::Two, Suit::H);
        let air = hole(Rank::Nine, Suit::S, Rank::Two, Suit::H);
        let made = lookup.bucket(pair, &board, Street::Rive);
        let none = lookup.bucket(air, &board, Street::Rive);
        assert!(made > none);
        assert!(made < BUCKETS_POST);
    }

    #[test]
    fn equity_is_deterministic_and_bounded() {
        let mut board = Board::empty();
        for c in [8u8, 22, 36] {
            board.push(Card::from(c));
        }
        let hole = hole(Rank::Ace, Suit::S, Rank::Ace, Suit::H);
        let a = Lookup::equity(hole, &board);
        let b = Lookup::equity(hole, &board);
        assert!(a == b);
        assert!(a >= 0.);
        assert!(a <= 1.);
    }

    #[test]
    fn aces_estimate_strong_preflop_equity() {
        let board = Board::empty();
        let aces = hole(Rank::Ace, Suit::S, Rank::Ace, Suit::H);
        let trash = hole(Rank::Seven, Suit::S, Rank::Two, Suit::H);
        assert!(Lookup::equity(aces, &board) > Lookup::equity(trash, &board));
    }
}
