//! Iterative-deepening minimax with alpha-beta pruning.
//!
//! The searcher runs complete fixed-depth searches at depth 1, 2, 3, ... up
//! to `max_depth`, carrying the best move of each completed iteration to the
//! front of the candidate list for the next one. The wall clock is checked
//! between root moves only; when the time budget runs out mid-iteration the
//! partial iteration is discarded and the best move of the last *completed*
//! iteration is returned. The first ordered candidate stands in as the
//! answer if not even depth 1 completes.
//!
//! The search never clones the game state per node. A single scratch copy of
//! the board, hands, and decks is mutated on the way down and restored on
//! the way back up, including the deck draw that refills the hand.

pub mod move_orderer;


use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::board::PlacedCard;
use crate::card::{Deck, Hand};
use crate::evaluate;
use crate::game::player::Player;
use crate::game::state::GameState;
use crate::game::transitions::MAX_TURNS;
use crate::move_generation::{enumerate_placements, Placement};

pub const MAX_SEARCH_DEPTH: u8 = 8;
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(1800);

/// Search limits plus statistics from the most recent search.
pub struct SearchContext {
    max_depth: u8,
    time_budget: Duration,
    searched_position_count: usize,
    completed_depth: u8,
    last_score: Option<f64>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::with_limits(MAX_SEARCH_DEPTH, DEFAULT_TIME_BUDGET)
    }

    pub fn with_limits(max_depth: u8, time_budget: Duration) -> Self {
        Self {
            max_depth,
            time_budget,
            searched_position_count: 0,
            completed_depth: 0,
            last_score: None,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// The deepest iteration that ran to completion in the last search.
    pub fn completed_depth(&self) -> u8 {
        self.completed_depth
    }

    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.completed_depth = 0;
        self.last_score = None;
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The mutable substate the search needs: everything else in `GameState`
/// (history, messages, scores) is irrelevant to move choice.
struct Scratch {
    board: crate::board::Board,
    hands: Vec<Hand>,
    decks: Vec<Deck>,
}

/// Searches for the current player's best placement. Returns None only when
/// the player has no legal placement at all.
pub fn search_best_placement(
    context: &mut SearchContext,
    state: &GameState,
) -> Option<Placement> {
    context.reset_stats();

    let ai_index = state.current_player_index;
    let ai_id = state.players[ai_index].id;

    let mut candidates =
        enumerate_placements(&state.board, state.turn_number, ai_id, state.hand(ai_id));
    if candidates.is_empty() {
        return None;
    }
    move_orderer::order_placements(&mut candidates, &state.board);

    let mut scratch = Scratch {
        board: state.board.clone(),
        hands: state.hands.clone(),
        decks: state.decks.clone(),
    };

    let started_at = Instant::now();
    let mut best_overall = candidates[0];

    'deepening: for depth in 1..=context.max_depth {
        let mut best_at_depth = candidates[0];
        let mut best_score = f64::NEG_INFINITY;

        for &candidate in candidates.iter() {
            if started_at.elapsed() >= context.time_budget {
                debug!(
                    "time budget exhausted at depth {}, keeping depth {} result",
                    depth, context.completed_depth
                );
                break 'deepening;
            }

            let score =
                with_placement_applied(&mut scratch, &state.players, ai_index, candidate, |s| {
                    minimax(
                        context,
                        s,
                        &state.players,
                        ai_index,
                        (ai_index + 1) % state.players.len(),
                        state.turn_number + 1,
                        depth,
                        f64::NEG_INFINITY,
                        f64::INFINITY,
                    )
                });

            if score > best_score {
                best_score = score;
                best_at_depth = candidate;
            }

            // Root evaluations are the natural places to let other threads
            // (input handling, rendering) run during a long think.
            thread::yield_now();
        }

        debug!(
            "depth {} complete: {} at {} scored {:.1} ({} positions)",
            depth,
            best_at_depth.value,
            best_at_depth.target,
            best_score,
            context.searched_position_count
        );

        best_overall = best_at_depth;
        context.completed_depth = depth;
        context.last_score = Some(best_score);
        move_orderer::promote_to_front(&mut candidates, best_at_depth);
    }

    Some(best_overall)
}

/// One minimax node. `depth` is the remaining depth; `current_index` is the
/// seat to move; `ai_index` is the maximizing seat the position is scored
/// for. Checks whether the *previous* mover just completed four-in-a-row
/// before anything else, scoring faster wins higher via the depth bonus.
#[allow(clippy::too_many_arguments)]
fn minimax(
    context: &mut SearchContext,
    scratch: &mut Scratch,
    players: &[Player],
    ai_index: usize,
    current_index: usize,
    turn_number: u32,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
) -> f64 {
    context.searched_position_count += 1;

    let player_count = players.len();
    let last_index = (current_index + player_count - 1) % player_count;
    if scratch.board.has_four_in_a_row(players[last_index].id) {
        let terminal = evaluate::WIN_SCORE + depth as f64;
        return if last_index == ai_index {
            terminal
        } else {
            -terminal
        };
    }

    if depth == 0 || turn_number >= MAX_TURNS {
        return evaluate::score(&scratch.board, players[ai_index].id);
    }

    let current_id = players[current_index].id;
    let mut candidates = enumerate_placements(
        &scratch.board,
        turn_number,
        current_id,
        &scratch.hands[current_id.index()],
    );
    if candidates.is_empty() {
        // The player passes; the game continues around the table.
        return minimax(
            context,
            scratch,
            players,
            ai_index,
            (current_index + 1) % player_count,
            turn_number + 1,
            depth - 1,
            alpha,
            beta,
        );
    }
    move_orderer::order_placements(&mut candidates, &scratch.board);

    let next_index = (current_index + 1) % player_count;
    if current_index == ai_index {
        let mut best = f64::NEG_INFINITY;
        for &candidate in candidates.iter() {
            let score =
                with_placement_applied(scratch, players, current_index, candidate, |s| {
                    minimax(
                        context,
                        s,
                        players,
                        ai_index,
                        next_index,
                        turn_number + 1,
                        depth - 1,
                        alpha,
                        beta,
                    )
                });
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for &candidate in candidates.iter() {
            let score =
                with_placement_applied(scratch, players, current_index, candidate, |s| {
                    minimax(
                        context,
                        s,
                        players,
                        ai_index,
                        next_index,
                        turn_number + 1,
                        depth - 1,
                        alpha,
                        beta,
                    )
                });
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Applies a placement to the scratch state, runs `f`, then restores the
/// scratch exactly: the deck draw is undone, the played card returns to its
/// original hand slot, and the board cell gets its previous occupant back.
fn with_placement_applied<F: FnOnce(&mut Scratch) -> f64>(
    scratch: &mut Scratch,
    players: &[Player],
    seat: usize,
    placement: Placement,
    f: F,
) -> f64 {
    let player = &players[seat];
    let card = scratch.hands[seat].remove(placement.hand_index);
    let displaced = scratch.board.set(
        placement.target,
        Some(PlacedCard {
            value: card.value,
            id: card.id.clone(),
            color: player.color,
            owner: player.id,
        }),
    );
    let drew = match scratch.decks[seat].draw() {
        Some(drawn) => {
            scratch.hands[seat].push(drawn);
            true
        }
        None => false,
    };

    let score = f(scratch);

    if drew {
        let drawn = scratch.hands[seat].pop().unwrap();
        scratch.decks[seat].undraw(drawn);
    }
    scratch.board.set(placement.target, displaced);
    scratch.hands[seat].insert(placement.hand_index, card);

    score
}
