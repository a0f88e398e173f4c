use super::info::Info;
use crate::gameplay::turn::Turn;
use crate::Utility;
use crate::N;
use rand::rngs::SmallRng;

/// the engine contract the trainer traverses against.
///
/// a Game is one mutable hand. deal() rebuilds it from scratch;
/// apply() and chance() each push exactly one undo record and
/// undo() pops one, so a traversal that matches every mutation
/// with an undo leaves the state exactly as it found it. chance
/// is undoable by the same discipline as actions, and the
/// trainer relies on it.
pub trait Game {
    /// start a fresh hand
    fn deal(&mut self, rng: &mut SmallRng);
    /// whose move: a seat, the dealer, or nobody
    fn turn(&self) -> Turn;
    /// legal abstract action indices, ascending
    fn choices(&self) -> Vec<usize>;
    /// the acting seat's information set key
    fn info(&self, seat: usize) -> Info;
    /// net result per seat, defined once terminal
    fn payoffs(&self) -> [Utility; N];
    /// take an abstract action for the seat to act
    fn apply(&mut self, action: usize);
    /// reveal pending chance cards
    fn chance(&mut self);
    /// exact inverse of the last apply or chance
    fn undo(&mut self);
}
