use super::actions;
use super::edge::Edge;
use super::record::Record;
use super::seat::Seat;
use super::showdown::Claim;
use super::showdown::Showdown;
use super::turn::Turn;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::clustering::lookup::Lookup;
use crate::mccfr::info::Info;
use crate::mccfr::path::Path;
use crate::Chips;
use crate::Utility;
use crate::B_BLIND;
use crate::N;
use crate::STACK;
use crate::S_BLIND;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// seat order for the first action of each postflop street
const POSTFLOP_ORDER: [usize; N] = [1, 2, 0];

/// the mutable state of one 3-handed 20bb hand.
///
/// seat 0 is the button, seat 1 the small blind, seat 2 the big
/// blind; seat 0 opens the preflop action. exactly three methods
/// mutate a dealt hand (act, chance, undo), the first two push
/// one snapshot each, and undo pops one, so a depth-first search
/// can explore the whole tree in place on a single state.
pub struct Game {
    lookup: Arc<Lookup>,
    deck: Deck,
    seats: [Seat; N],
    board: Board,
    street: Street,
    pot: Chips,
    raiser: Option<usize>,
    raise: Chips,
    acted: u8,
    actor: usize,
    chance: bool,
    done: bool,
    history: Vec<Edge>,
    undos: Vec<Record>,
}

impl Game {
    /// an undealt table. call deal() before acting.
    pub fn new(lookup: Arc<Lookup>) -> Self {
        Self {
            lookup,
            deck: Deck::new(),
            seats: [Seat::new(Hole::from((0.into(), 1.into())), STACK); N],
            board: Board::empty(),
            street: Street::Pref,
            pot: 0,
            raiser: None,
            raise: 0,
            acted: 0,
            actor: 0,
            chance: false,
            done: true,
            history: Vec::new(),
            undos: Vec::new(),
        }
    }

    /// shuffle up and deal a fresh 20bb hand.
    /// the big blind posts the largest preflop stake, so it seeds
    /// the aggressor bookkeeping that fixes the minimum raise.
    pub fn deal(&mut self, rng: &mut SmallRng) {
        self.deck.shuffle(rng);
        for i in 0..N {
            let hole = Hole::from((self.deck.draw(), self.deck.draw()));
            self.seats[i] = Seat::new(hole, STACK);
        }
        self.board = Board::empty();
        self.street = Street::Pref;
        self.pot = 0;
        self.acted = 0;
        self.chance = false;
        self.done = false;
        self.history.clear();
        self.undos.clear();
        self.post(1, S_BLIND);
        self.post(2, B_BLIND);
        self.raiser = Some(2);
        self.raise = B_BLIND;
        self.actor = 0;
        self.assert_conserved();
    }
    fn post(&mut self, seat: usize, blind: Chips) {
        self.seats[seat].bet(blind);
        self.pot += blind;
    }

    // observation

    pub fn turn(&self) -> Turn {
        if self.done {
            Turn::Terminal
        } else if self.chance {
            Turn::Chance
        } else {
            Turn::Choice(self.actor)
        }
    }
    pub fn legal(&self) -> Vec<Edge> {
        if self.done || self.chance {
            return Vec::new();
        }
        actions::legals(self)
    }
    pub fn actor(&self) -> &Seat {
        &self.seats[self.actor]
    }
    pub fn seat(&self, i: usize) -> &Seat {
        &self.seats[i]
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn history(&self) -> &[Edge] {
        &self.history
    }
    pub fn raiser(&self) -> Option<usize> {
        self.raiser
    }
    pub fn raise(&self) -> Chips {
        self.raise
    }
    pub fn depth(&self) -> usize {
        self.undos.len()
    }
    pub fn max_stake(&self) -> Chips {
        self.seats
            .iter()
            .map(|s| s.stake())
            .max()
            .expect("non-empty seats")
    }
    pub fn to_call(&self) -> Chips {
        self.max_stake() - self.actor().stake()
    }
    /// the pot as seen by the seat to act, call included
    pub fn pot_for_acting(&self) -> Chips {
        self.pot + self.to_call()
    }
    /// the smallest legal raise-to total: the standing stake
    /// plus the last raise. sub-minimum all-ins re-open this.
    pub fn min_raise_total(&self) -> Chips {
        match self.max_stake() {
            0 => 0,
            stake => stake + self.raise,
        }
    }
    /// seats that have not folded
    pub fn survivors(&self) -> usize {
        self.seats.iter().filter(|s| s.is_live()).count()
    }

    /// the acting seat's private information plus the public
    /// history. hole cards enter only through their bucket.
    pub fn info(&self, seat: usize) -> Info {
        let bucket = self
            .lookup
            .bucket(self.seats[seat].hole(), &self.board, self.street);
        Info::from((bucket, Path::from(self.history.as_slice())))
    }

    /// net result per seat in big blinds, once the hand is done
    pub fn payoffs(&self) -> [Utility; N] {
        assert!(self.done, "payoffs of a live hand");
        let mut payoffs = [0.; N];
        for (i, seat) in self.seats.iter().enumerate() {
            payoffs[i] = (seat.stack() - STACK) as Utility / B_BLIND as Utility;
        }
        payoffs
    }

    // transitions

    /// the edge an abstract action index denotes right now
    pub fn edge_of(&self, index: usize) -> Edge {
        match index {
            0 => Edge::Fold,
            1 if self.to_call() > 0 => Edge::Call,
            1 => Edge::Check,
            i @ 2..=8 => Edge::Raise((i - 2) as u8),
            9 => Edge::Shove,
            _ => panic!("no such action index {}", index),
        }
    }

    pub fn act(&mut self, edge: Edge) {
        assert!(
            self.legal().contains(&edge),
            "illegal edge {} at\n{}",
            edge,
            self
        );
        self.undos.push(self.snapshot());
        self.history.push(edge);
        let actor = self.actor;
        let prior = self.max_stake();
        let (folds, total) = actions::chips(self, edge);
        if folds {
            self.seats[actor].fold();
        } else {
            let chips = total - self.seats[actor].stake();
            self.seats[actor].bet(chips);
            self.pot += chips;
            if total > prior {
                self.raiser = Some(actor);
                self.raise = total - prior;
                self.acted = 1 << actor;
            } else {
                self.acted |= 1 << actor;
            }
            if self.seats[actor].stack() == 0 {
                self.seats[actor].shove();
            }
        }
        self.assert_conserved();
        if self.survivors() == 1 {
            self.resolve();
        } else {
            self.advance();
        }
    }

    /// reveal the next street. if nobody is left to act (all
    /// remaining seats are shoved) the board runs out to the
    /// river and the hand resolves in the same transition.
    pub fn chance(&mut self) {
        assert!(self.chance && !self.done, "no chance pending at\n{}", self);
        self.undos.push(self.snapshot());
        self.history.push(Edge::Draw);
        self.reveal();
        for seat in self.seats.iter_mut() {
            seat.clear_stake();
        }
        self.raiser = None;
        self.raise = 0;
        self.acted = 0;
        self.chance = false;
        match POSTFLOP_ORDER
            .into_iter()
            .find(|&p| self.seats[p].can_act())
        {
            Some(p) => self.actor = p,
            None => {
                while self.street != Street::Rive {
                    self.reveal();
                }
                self.resolve();
            }
        }
        self.assert_conserved();
    }
    fn reveal(&mut self) {
        for _ in 0..self.street.n_revealed() {
            self.board.push(self.deck.draw());
        }
        self.street = self.street.next();
    }

    /// exact inverse of the last act() or chance()
    pub fn undo(&mut self) {
        let record = self.undos.pop().expect("undo matches a prior mutation");
        self.seats = record.seats;
        self.pot = record.pot;
        self.street = record.street;
        self.raiser = record.raiser;
        self.raise = record.raise;
        self.acted = record.acted;
        self.actor = record.actor;
        self.chance = record.chance;
        self.done = record.done;
        self.board.truncate(record.board);
        self.deck.rewind(record.draws);
        self.history.truncate(record.plies);
    }
    fn snapshot(&self) -> Record {
        Record {
            seats: self.seats,
            pot: self.pot,
            street: self.street,
            raiser: self.raiser,
            raise: self.raise,
            acted: self.acted,
            actor: self.actor,
            chance: self.chance,
            done: self.done,
            board: self.board.len(),
            draws: self.deck.draws(),
            plies: self.history.len(),
        }
    }

    // turn advancement

    /// the street is closed when every seat that can still act
    /// has acted since the latest raise and stakes are level.
    /// a raise resets the acted set to the aggressor, so a
    /// single set expresses both "everyone acted" and "everyone
    /// answered the raise".
    fn complete(&self) -> bool {
        let stake = self.max_stake();
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.can_act())
            .all(|(i, s)| self.acted & (1 << i) != 0 && s.stake() == stake)
    }
    fn advance(&mut self) {
        if self.complete() {
            match self.street {
                Street::Rive => self.resolve(),
                _ => self.chance = true,
            }
        } else {
            self.actor = self.next(self.actor);
        }
    }
    fn next(&self, from: usize) -> usize {
        (1..=N)
            .map(|i| (from + i) % N)
            .find(|&p| self.seats[p].can_act())
            .expect("open street implies a seat to act")
    }

    // settlement

    /// move the pot to its winners. a lone survivor takes it
    /// outright; otherwise layered side pots are awarded to the
    /// best hands among each layer's live contributors.
    fn resolve(&mut self) {
        assert!(!self.done);
        self.done = true;
        self.chance = false;
        match self.survivors() {
            1 => {
                let winner = self
                    .seats
                    .iter()
                    .position(|s| s.is_live())
                    .expect("exactly one live seat");
                self.seats[winner].win(self.pot);
            }
            _ => {
                let rewards = Showdown::from((self.claims(), crate::TIES)).settle();
                for (i, reward) in rewards.into_iter().enumerate() {
                    self.seats[i].win(reward);
                }
            }
        }
        self.pot = 0;
        self.assert_conserved();
        log::trace!("resolved {}", self);
    }
    fn claims(&self) -> [Claim; N] {
        assert!(self.board.len() == 5, "showdown without a full board");
        let mut claims = [Claim {
            risked: 0,
            folded: false,
            strength: None,
        }; N];
        for (i, seat) in self.seats.iter().enumerate() {
            claims[i] = Claim {
                risked: STACK - seat.stack(),
                folded: !seat.is_live(),
                strength: match seat.is_live() {
                    true => Some(self.strength(seat)),
                    false => None,
                },
            };
        }
        claims
    }
    fn strength(&self, seat: &Seat) -> Strength {
        Strength::from(Hand::add(
            Hand::from(seat.hole()),
            Hand::from(self.board),
        ))
    }

    fn assert_conserved(&self) {
        debug_assert!(
            self.seats.iter().map(|s| s.stack()).sum::<Chips>() + self.pot
                == N as Chips * STACK,
            "chip conservation violated at\n{}",
            self
        );
    }
}

impl crate::mccfr::game::Game for Game {
    fn deal(&mut self, rng: &mut SmallRng) {
        self.deal(rng)
    }
    fn turn(&self) -> Turn {
        self.turn()
    }
    fn choices(&self) -> Vec<usize> {
        self.legal().iter().map(|e| e.index()).collect()
    }
    fn info(&self, seat: usize) -> Info {
        self.info(seat)
    }
    fn payoffs(&self) -> [Utility; N] {
        self.payoffs()
    }
    fn apply(&mut self, action: usize) {
        self.act(self.edge_of(action))
    }
    fn chance(&mut self) {
        self.chance()
    }
    fn undo(&mut self) {
        self.undo()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for seat in self.seats.iter() {
            write!(f, "{} ", seat)?;
        }
        write!(f, "@ {:>3} {} {}", self.pot, self.street, self.board)
    }
}
