use super::edge::Edge;
use super::game::Game;
use super::odds::Odds;
use crate::cards::street::Street;
use crate::Chips;
use crate::PREFLOP_RAISE;

/// legal abstract actions for the seat to act, ascending by index.
///
/// facing a bet the seat may fold, and call when affordable;
/// otherwise check. raise candidates come from the street's
/// sizing grid, filtered by the minimum legal raise total, by
/// the stack, and by de-duplication; the all-in total is offered
/// whenever chips remain and no grid size already lands there.
pub fn legals(game: &Game) -> Vec<Edge> {
    let seat = game.actor();
    if !seat.can_act() {
        return Vec::new();
    }
    let to_call = game.to_call();
    let stack = seat.stack();
    let mut edges = Vec::new();
    if to_call > 0 {
        edges.push(Edge::Fold);
        if stack >= to_call {
            edges.push(Edge::Call);
        }
    } else {
        edges.push(Edge::Check);
    }
    if stack <= to_call {
        // can't cover the call: fold or all in for less
        if stack > 0 {
            edges.push(Edge::Shove);
        }
        return edges;
    }
    let minimum = game.min_raise_total();
    let mut totals = Vec::new();
    for i in 0..Edge::n_sizes() {
        let total = raise_total(game, i);
        if total < minimum {
            continue;
        }
        if total > stack {
            continue;
        }
        if totals.contains(&total) {
            continue;
        }
        totals.push(total);
        edges.push(Edge::Raise(i as u8));
    }
    if stack > 0 && !totals.contains(&(seat.stake() + stack)) {
        edges.push(Edge::Shove);
    }
    edges
}

/// convert an edge into (is_fold, the actor's street total after
/// acting). unaffordable targets are truncated to an all-in.
pub fn chips(game: &Game, edge: Edge) -> (bool, Chips) {
    let seat = game.actor();
    let stake = seat.stake();
    let stack = seat.stack();
    match edge {
        Edge::Fold => (true, stake),
        Edge::Check => (false, stake),
        Edge::Call => (false, stake + game.to_call().min(stack)),
        Edge::Shove => (false, stake + stack),
        Edge::Raise(i) => (false, raise_total(game, i as usize).min(stake + stack)),
        Edge::Draw => panic!("draws carry no chips"),
    }
}

/// the street total a grid size targets for the seat to act.
/// preflop sizes are absolute totals; postflop sizes are a call
/// plus a fraction of the pot as seen after that call.
fn raise_total(game: &Game, i: usize) -> Chips {
    match game.street() {
        Street::Pref => PREFLOP_RAISE[i],
        _ => game.actor().stake() + game.to_call() + Odds::GRID[i].scale(game.pot_for_acting()),
    }
}
