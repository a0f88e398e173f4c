use crate::gameplay::turn::Turn;
use crate::mccfr::info::Info;
use crate::mccfr::path::Path;
use crate::Utility;
use crate::N;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// 3-player Kuhn poker: the trainer's correctness oracle.
///
/// four cards {0,1,2,3}, one each, one chip ante, one pass/bet
/// round with a one chip bet. action 0 is pass (check, or fold
/// facing a bet), action 1 is bet (or call facing one). small
/// enough to verify convergence and payoffs by hand, and a
/// second implementation of the same engine contract: cards are
/// fixed at the deal, actions are undone by popping the history.
pub struct Kuhn {
    cards: [u8; N],
    history: Vec<u8>,
}

const PASS: u8 = 0;
const BET: u8 = 1;

impl Kuhn {
    pub fn new() -> Self {
        Self {
            cards: [0, 1, 2],
            history: Vec::new(),
        }
    }

    /// for scripted scenarios
    pub fn with_cards(cards: [u8; N]) -> Self {
        Self {
            cards,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    /// players act in seat order; after a bet the remaining
    /// seats respond in the same rotation, so the seat to act
    /// is always the action count mod 3.
    fn actor(&self) -> usize {
        self.history.len() % N
    }

    fn bet_position(&self) -> Option<usize> {
        self.history.iter().position(|&a| a == BET)
    }

    fn is_terminal(&self) -> bool {
        match self.bet_position() {
            None => self.history.len() == N,
            Some(b) => self.history.len() >= b + N,
        }
    }

    /// per-seat chip results at a terminal state
    fn settle(&self) -> [Utility; N] {
        assert!(self.is_terminal());
        match self.bet_position() {
            None => {
                // all passed: best card takes the three antes
                let winner = self.winner(&[0, 1, 2]);
                let mut payoffs = [-1.; N];
                payoffs[winner] = 2.;
                payoffs
            }
            Some(b) => {
                let bettor = b % N;
                let mut committed = [1.; N];
                committed[bettor] = 2.;
                let mut callers = vec![bettor];
                for (i, &action) in self.history.iter().enumerate().skip(b + 1) {
                    let seat = i % N;
                    if action == BET {
                        committed[seat] = 2.;
                        callers.push(seat);
                    }
                }
                let pot = committed.iter().sum::<Utility>();
                let winner = self.winner(&callers);
                let mut payoffs = [0.; N];
                for seat in 0..N {
                    payoffs[seat] = -committed[seat];
                }
                payoffs[winner] += pot;
                payoffs
            }
        }
    }

    fn winner(&self, seats: &[usize]) -> usize {
        *seats
            .iter()
            .max_by_key(|&&s| self.cards[s])
            .expect("non-empty showdown")
    }
}

impl Default for Kuhn {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::mccfr::game::Game for Kuhn {
    fn deal(&mut self, rng: &mut SmallRng) {
        let mut deck = [0u8, 1, 2, 3];
        deck.shuffle(rng);
        self.cards.copy_from_slice(&deck[..N]);
        self.history.clear();
    }
    fn turn(&self) -> Turn {
        match self.is_terminal() {
            true => Turn::Terminal,
            false => Turn::Choice(self.actor()),
        }
    }
    fn choices(&self) -> Vec<usize> {
        vec![PASS as usize, BET as usize]
    }
    fn info(&self, seat: usize) -> Info {
        Info::from((self.cards[seat], Path::from(self.history.clone())))
    }
    fn payoffs(&self) -> [Utility; N] {
        self.settle()
    }
    fn apply(&mut self, action: usize) {
        assert!(action == PASS as usize || action == BET as usize);
        assert!(!self.is_terminal());
        self.history.push(action as u8);
    }
    fn chance(&mut self) {
        unreachable!("kuhn deals all cards up front");
    }
    fn undo(&mut self) {
        self.history.pop().expect("undo matches a prior apply");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mccfr::game::Game;

    fn play(cards: [u8; N], actions: &[usize]) -> Kuhn {
        let mut game = Kuhn::with_cards(cards);
        for &a in actions {
            game.apply(a);
        }
        game
    }

    #[test]
    fn three_passes_show_down_the_antes() {
        let game = play([2, 0, 1], &[0, 0, 0]);
        assert!(game.turn().is_terminal());
        assert!(game.payoffs() == [2., -1., -1.]);
    }

    #[test]
    fn a_bet_that_folds_everyone_wins_the_antes() {
        let game = play([0, 3, 2], &[1, 0, 0]);
        assert!(game.turn().is_terminal());
        assert!(game.payoffs() == [2., -1., -1.]);
    }

    #[test]
    fn check_bet_call_fold_pays_the_best_caller() {
        let game = play([0, 3, 2], &[0, 1, 1, 0]);
        assert!(game.turn().is_terminal());
        assert!(game.payoffs() == [-1., 3., -2.]);
    }

    #[test]
    fn payoffs_are_zero_sum() {
        let histories: [&[usize]; 5] = [
            &[0, 0, 0],
            &[1, 0, 0],
            &[1, 1, 1],
            &[0, 1, 0, 1],
            &[0, 0, 1, 0, 0],
        ];
        for history in histories {
            let game = play([3, 1, 0], history);
            assert!(game.turn().is_terminal());
            assert!(game.payoffs().iter().sum::<Utility>() == 0.);
        }
    }

    #[test]
    fn undo_pops_exactly_one_action() {
        let mut game = play([1, 2, 3], &[0, 1]);
        assert!(game.turn() == Turn::Choice(2));
        game.undo();
        assert!(game.turn() == Turn::Choice(1));
        assert!(game.history() == &[0]);
    }

    #[test]
    fn info_is_card_plus_public_history() {
        let game = play([1, 2, 3], &[0, 1]);
        let info = game.info(2);
        assert!(info.present() == 3);
        assert!(info.path().bytes() == &[0, 1]);
    }

    #[test]
    fn terminal_detection_waits_for_responses() {
        let mut game = Kuhn::with_cards([0, 1, 2]);
        game.apply(1);
        assert!(!game.turn().is_terminal());
        game.apply(0);
        assert!(!game.turn().is_terminal());
        game.apply(1);
        assert!(game.turn().is_terminal());
    }
}
