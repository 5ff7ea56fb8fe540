//! Pure state transitions: placement, capture, turn advancement, passing,
//! and win detection.
//!
//! Every function takes `&GameState` and returns a fresh state; illegal
//! placements return None and leave no trace. Win checks run in a fixed
//! order after each placement: four-in-a-row, then the dominance rule, then
//! exhaustion. Changing that order changes game outcomes.

use crate::board::coordinate::Coordinate;
use crate::board::PlacedCard;
use crate::game::history::{CapturedInfo, HistoryAction, HistoryEntry};
use crate::game::player::PlayerId;
use crate::game::state::GameState;
use crate::move_generation::compute_valid_moves;

/// Hard cap on the shared turn counter; reaching it ends the game.
pub const MAX_TURNS: u32 = 60;

/// Dominance rule: past the early game, a leader with at least this score
/// and more than double the runner-up wins immediately.
pub const DOMINANCE_MIN_SCORE: u32 = 50;

/// The dominance rule is only checked once `turn_number` exceeds
/// `DOMINANCE_TURN_FACTOR * player_count`.
pub const DOMINANCE_TURN_FACTOR: u32 = 3;

/// Places the selected card at `target`. Returns None (with no side
/// effects) if no card is selected, the target is not in the current
/// frontier, the target holds the player's own card, or the selected card's
/// value is not strictly greater than the occupant's.
pub fn apply_placement(state: &GameState, target: Coordinate) -> Option<GameState> {
    let selected = state.selected_card?;
    let current = state.current_player();
    let current_id = current.id;
    let card_to_place = state.hand(current_id).get(selected.hand_index)?.clone();

    if !state.valid_moves.contains(&target) {
        return None;
    }

    let mut captured = None;
    if let Some(occupant) = state.board.get(target) {
        if occupant.owner == current_id {
            return None;
        }
        if card_to_place.value <= occupant.value {
            return None;
        }
        let captured_player = state.player(occupant.owner);
        captured = Some(CapturedInfo {
            name: captured_player.name.clone(),
            value: occupant.value,
            color: captured_player.color,
        });
    }

    let mut next = state.clone();

    // The captured card (if any) leaves the game entirely; the position now
    // holds the newly played card under the actor's color.
    next.board.set(
        target,
        Some(PlacedCard {
            value: card_to_place.value,
            id: card_to_place.id.clone(),
            color: current.color,
            owner: current_id,
        }),
    );

    next.history.push(HistoryEntry {
        turn: next.turn_number,
        player_name: current.name.clone(),
        player_color: current.color,
        action: HistoryAction::Placed {
            value: card_to_place.value,
            position: target,
            captured,
        },
    });

    let seat = current_id.index();
    next.hands[seat].remove(selected.hand_index);
    if let Some(drawn) = next.decks[seat].draw() {
        next.hands[seat].push(drawn);
    }

    recompute_scores(&mut next);
    next.selected_card = None;

    if next.board.has_four_in_a_row(current_id) {
        let placer_score = next.player(current_id).score;
        let is_draw = next
            .players
            .iter()
            .any(|p| p.id != current_id && p.score == placer_score);
        let placer_name = next.player(current_id).name.clone();

        next.is_game_over = true;
        next.winner = if is_draw { None } else { Some(current_id) };
        next.message = if is_draw {
            format!("{} got 4-in-a-row, but it's a draw!", placer_name)
        } else {
            format!("{} wins!", placer_name)
        };
        next.valid_moves.clear();
        return Some(next);
    }

    if next.turn_number > next.players.len() as u32 * DOMINANCE_TURN_FACTOR {
        if let Some(leader) = dominance_winner(&next) {
            let leader_name = next.player(leader).name.clone();
            next.is_game_over = true;
            next.winner = Some(leader);
            next.message = format!("{} wins with a dominant score!", leader_name);
            next.valid_moves.clear();
            return Some(next);
        }
    }

    let finished_by_cards = next.hands.iter().all(|hand| hand.is_empty());
    let finished_by_turns = next.turn_number >= MAX_TURNS;
    if finished_by_cards || finished_by_turns {
        let winner = strict_score_leader(&next);
        next.is_game_over = true;
        next.winner = winner;
        next.message = match winner {
            Some(id) => format!("{} wins!", next.player(id).name),
            None => "It's a draw!".to_string(),
        };
        next.valid_moves.clear();
        return Some(next);
    }

    // Keep the frontier cache consistent with the new board even before the
    // turn advances.
    next.valid_moves = compute_valid_moves(&next.board, next.turn_number, current_id);
    next.message = "Move accepted.".to_string();
    Some(next)
}

/// Moves to the next player in fixed rotation, increments the turn number,
/// and recomputes the frontier cache. No-op once the game is over.
pub fn advance_turn(state: &GameState) -> GameState {
    if state.is_game_over {
        return state.clone();
    }

    let mut next = state.clone();
    next.current_player_index = (state.current_player_index + 1) % state.players.len();
    next.turn_number = state.turn_number + 1;

    let next_id = next.current_player().id;
    next.message = format!("{}, it's your turn!", next.current_player().name);
    next.valid_moves = compute_valid_moves(&next.board, next.turn_number, next_id);
    next
}

/// Placement followed by turn advancement, unless the placement ended the
/// game. This is the path taken once presentation-side animations complete.
pub fn apply_placement_and_advance(state: &GameState, target: Coordinate) -> Option<GameState> {
    let intermediate = apply_placement(state, target)?;
    if intermediate.is_game_over {
        return Some(intermediate);
    }
    Some(advance_turn(&intermediate))
}

/// Records a pass for the current player and advances the turn. Passing is
/// always legal; it resolves idle timeouts and AI turns with no candidates.
pub fn handle_pass(state: &GameState) -> GameState {
    let current = state.current_player();
    let mut with_history = state.clone();
    with_history.history.push(HistoryEntry {
        turn: state.turn_number,
        player_name: current.name.clone(),
        player_color: current.color,
        action: HistoryAction::Passed,
    });
    with_history.selected_card = None;
    advance_turn(&with_history)
}

/// Recomputes every player's score as the sum of board cell values they
/// own. Always a full rescan so scores can never drift.
pub fn recompute_scores(state: &mut GameState) {
    for player in state.players.iter_mut() {
        player.score = 0;
    }
    let mut totals = vec![0u32; state.players.len()];
    for (_, card) in state.board.occupied_cells() {
        totals[card.owner.index()] += card.value as u32;
    }
    for (player, total) in state.players.iter_mut().zip(totals) {
        player.score = total;
    }
}

fn dominance_winner(state: &GameState) -> Option<PlayerId> {
    let mut by_score: Vec<&_> = state.players.iter().collect();
    by_score.sort_by(|a, b| b.score.cmp(&a.score));
    let leader = by_score.first()?;
    let runner_up = by_score.get(1)?;

    if leader.score >= DOMINANCE_MIN_SCORE && leader.score > runner_up.score * 2 {
        Some(leader.id)
    } else {
        None
    }
}

/// The strictly highest-scoring player, or None when tied for the max.
fn strict_score_leader(state: &GameState) -> Option<PlayerId> {
    let max_score = state.players.iter().map(|p| p.score).max()?;
    let mut leaders = state.players.iter().filter(|p| p.score == max_score);
    let first = leaders.next()?;
    if leaders.next().is_some() {
        None
    } else {
        Some(first.id)
    }
}
