use super::seat::Seat;
use crate::cards::street::Street;
use crate::Chips;
use crate::N;

/// a full snapshot of every mutable engine field, pushed once
/// per apply or chance. undo restores the snapshot wholesale,
/// so apply-then-undo is an exact inverse by construction.
/// the deck permutation and hole cards never change after the
/// deal; board and history roll back by truncation.
#[derive(Debug, Clone, Copy)]
pub struct Record {
    pub seats: [Seat; N],
    pub pot: Chips,
    pub street: Street,
    pub raiser: Option<usize>,
    pub raise: Chips,
    pub acted: u8,
    pub actor: usize,
    pub chance: bool,
    pub done: bool,
    pub board: usize,
    pub draws: usize,
    pub plies: usize,
}
