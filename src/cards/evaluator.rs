use super::hand::Hand;
use super::kicks::Kicks;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// finds the strongest five-card hand inside any 5-7 card set.
/// works on bit masks: flushes and straights fall out of rank
/// masks, n-of-a-kinds out of per-rank nibble counts. category
/// precedence relies on the fact that a 7-card set cannot hold
/// both a flush and a full house (or quads).
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        assert!(h.size() >= 5);
        assert!(h.size() <= 7);
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_pairs())
            .or_else(|| self.find_high_card())
            .expect("at least five cards")
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kicks {
        let n = ranking.n_kickers();
        let pool = match ranking {
            Ranking::Flush(hi) => self.flush_mask() & !u16::from(hi),
            Ranking::TwoPair(hi, lo) => self.0.rank_mask() & !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::FourOAK(hi) => self.0.rank_mask() & !u16::from(hi),
            _ => return Kicks::from(0u16),
        };
        let mut bits = pool;
        while bits.count_ones() as usize > n {
            bits &= !(1 << bits.trailing_zeros());
        }
        Kicks::from(bits)
    }

    //

    fn find_flush(&self) -> Option<Ranking> {
        self.find_flush_suit().map(|suit| {
            let mask = self.0.suit_mask(suit);
            match Self::find_straight_high(mask) {
                Some(high) => Ranking::StraightFlush(high),
                None => Ranking::Flush(Rank::from(mask)),
            }
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_straight_high(self.0.rank_mask()).map(Ranking::Straight)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_pairs(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(|hi| {
            match self.find_rank_of_n_oak(2, Some(hi)) {
                Some(lo) => Ranking::TwoPair(hi, lo),
                None => Ranking::OnePair(hi),
            }
        })
    }
    fn find_high_card(&self) -> Option<Ranking> {
        Some(Ranking::HighCard(Rank::from(self.0.rank_mask())))
    }

    //

    /// highest rank ending a run of five, with the wheel scored five-high
    fn find_straight_high(mask: u16) -> Option<Rank> {
        const WHEEL: u16 = 0b1_0000_0000_1111;
        let mut bits = mask;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & mask) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    /// highest rank held at least n times, excluding `besides`
    fn find_rank_of_n_oak(&self, n: usize, besides: Option<Rank>) -> Option<Rank> {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|r| Some(*r) != besides)
            .find(|r| self.0.rank_count(*r) >= n)
    }
    fn find_flush_suit(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|s| self.0.suit_mask(*s).count_ones() >= 5)
    }
    fn flush_mask(&self) -> u16 {
        self.find_flush_suit()
            .map(|s| self.0.suit_mask(s))
            .expect("flush ranking implies flush suit")
    }
}
