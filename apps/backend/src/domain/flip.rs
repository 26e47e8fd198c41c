//! Match resolution and lazy reveal expiry.
//!
//! `flip_tile` is the authoritative transition for one tile pick;
//! `expire_reveals` is the read-triggered expiry that replaces background
//! timers. Both take `now` as a parameter so tests control the clock.

use time::{Duration, OffsetDateTime};

use crate::domain::board::Symbol;
use crate::domain::lobby::{Lobby, LobbyStatus};
use crate::domain::player::BoardView;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Timing and scoring knobs for match resolution.
#[derive(Debug, Clone)]
pub struct ScoringRules {
    pub match_reward: i32,
    pub miss_penalty: i32,
    /// How long a mismatched pair stays face-up.
    pub hide_delay: Duration,
    /// Advisory lifetime of an unanswered first pick.
    pub pick_ttl: Duration,
}

impl Default for ScoringRules {
    fn default() -> Self {
        use crate::domain::rules;
        Self {
            match_reward: rules::MATCH_REWARD,
            miss_penalty: rules::MISS_PENALTY,
            hide_delay: Duration::milliseconds(rules::DEFAULT_HIDE_DELAY_MS as i64),
            pick_ttl: Duration::milliseconds(rules::DEFAULT_PICK_TTL_MS as i64),
        }
    }
}

/// What a flip did. `Ignored` is an idempotent no-op success, so duplicate
/// client requests are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    FirstPick { idx: usize },
    Matched { a: usize, b: usize },
    Mismatched { a: usize, b: usize },
}

/// Remove revealed entries whose hide deadline has passed.
///
/// Matched indices never sit in `revealed` (resolution moves them out), so
/// the matched guard only matters if the invariant is ever violated. If
/// the expired entry was the pending first pick, the turn is abandoned
/// with it.
pub fn expire_reveals(view: &mut BoardView, now: OffsetDateTime) {
    let expired: Vec<usize> = view
        .revealed
        .iter()
        .filter(|(idx, deadline)| **deadline <= now && !view.matched.contains(idx))
        .map(|(idx, _)| *idx)
        .collect();

    for idx in expired {
        view.revealed.remove(&idx);
        if view.pending_pick == Some(idx) {
            view.pending_pick = None;
        }
    }
}

/// Flip one tile for `player_id` and resolve a pair if this was the second
/// pick of a turn.
///
/// Counter semantics: every accepted pick increments `flips`; a resolved
/// pair adjusts `score` by exactly `+match_reward` or `-miss_penalty` and
/// bumps `matches` or `misses`, never both.
pub fn flip_tile(
    lobby: &mut Lobby,
    player_id: &str,
    idx: usize,
    rules: &ScoringRules,
    now: OffsetDateTime,
) -> Result<FlipOutcome, DomainError> {
    let Lobby {
        status,
        board,
        players,
        shared,
        ..
    } = lobby;

    if *status != LobbyStatus::Running {
        return Err(DomainError::conflict(
            ConflictKind::WrongStatus,
            format!("cannot flip while lobby is {status:?}"),
        ));
    }
    if idx >= board.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidTileIndex,
            format!("tile index {idx} outside board of {} tiles", board.len()),
        ));
    }

    let player = players.get_mut(player_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("no player {player_id}"))
    })?;

    let view = match shared.as_mut() {
        Some(shared_view) => shared_view,
        None => &mut player.view,
    };

    expire_reveals(view, now);
    let outcome = resolve_pick(view, board, idx, rules, now);

    match outcome {
        FlipOutcome::Ignored => {}
        FlipOutcome::FirstPick { .. } => {
            player.flips += 1;
        }
        FlipOutcome::Matched { .. } => {
            player.flips += 1;
            player.matches += 1;
            player.score += rules.match_reward;
        }
        FlipOutcome::Mismatched { .. } => {
            player.flips += 1;
            player.misses += 1;
            player.score -= rules.miss_penalty;
        }
    }

    Ok(outcome)
}

fn resolve_pick(
    view: &mut BoardView,
    board: &[Symbol],
    idx: usize,
    rules: &ScoringRules,
    now: OffsetDateTime,
) -> FlipOutcome {
    // Idempotent no-ops: already matched, already face-up, or waiting out
    // a pending mismatch hide.
    if view.matched.contains(&idx) || view.revealed.contains_key(&idx) {
        return FlipOutcome::Ignored;
    }
    if view.pending_pick.is_none() && !view.revealed.is_empty() {
        return FlipOutcome::Ignored;
    }

    match view.pending_pick.take() {
        None => {
            view.revealed.insert(idx, now + rules.pick_ttl);
            view.pending_pick = Some(idx);
            FlipOutcome::FirstPick { idx }
        }
        Some(first) if first == idx => {
            // Unreachable through the revealed guard; restore the pick and
            // charge nothing.
            view.pending_pick = Some(first);
            FlipOutcome::Ignored
        }
        Some(first) => {
            if board[first] == board[idx] {
                view.revealed.remove(&first);
                view.matched.insert(first);
                view.matched.insert(idx);
                if view.matched.len() == board.len() && !view.finished {
                    view.finished = true;
                    view.finished_at = Some(now);
                }
                FlipOutcome::Matched { a: first, b: idx }
            } else {
                let deadline = now + rules.hide_delay;
                view.revealed.insert(first, deadline);
                view.revealed.insert(idx, deadline);
                FlipOutcome::Mismatched { a: first, b: idx }
            }
        }
    }
}
