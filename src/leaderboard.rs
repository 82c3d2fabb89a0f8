//! In-memory best-score-per-player leaderboard
//!
//! The consumer side of the score contract: both engines emit non-negative
//! integer scores, and this table keeps the best one per opaque player
//! identity and answers rank queries. Persistence and identity resolution
//! live with the host, not here.

use serde::{Deserialize, Serialize};

/// Scores above this are considered malformed and rejected.
pub const MAX_SCORE: u32 = 1_000_000;

/// Opaque player identity; the engine never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// One player's standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerId,
    pub display_name: String,
    pub best_score: u32,
}

/// Result of submitting a score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// 1-indexed rank after the submission.
    pub rank: usize,
    /// The player's best before this submission, if they had one.
    pub previous_best: Option<u32>,
    /// The player's best after this submission.
    pub best_score: u32,
    /// Whether this submission improved (or established) the best.
    pub is_new_record: bool,
}

/// Best-score-per-player table. Entries keep insertion order; ranking sorts
/// by score descending with ties broken by player id ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

/// Validate an externally supplied score: reject non-finite, negative, and
/// absurdly large values, truncating fractions. The engines produce
/// well-formed scores by construction; this guards everything else.
pub fn normalize_score(raw: f64) -> Option<u32> {
    if !raw.is_finite() {
        return None;
    }
    let floored = raw.floor();
    if floored < 0.0 || floored > MAX_SCORE as f64 {
        return None;
    }
    Some(floored as u32)
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The player's current best, if they have submitted at all.
    pub fn best_for(&self, player: PlayerId) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.best_score)
    }

    /// Record a finished run. Keeps the per-player maximum and reports the
    /// resulting rank.
    pub fn submit(&mut self, player: PlayerId, display_name: &str, score: u32) -> SubmitOutcome {
        let mut previous_best = None;
        let mut is_new_record = true;

        match self.entries.iter_mut().find(|e| e.player == player) {
            Some(entry) => {
                previous_best = Some(entry.best_score);
                if entry.best_score >= score {
                    is_new_record = false;
                } else {
                    entry.best_score = score;
                }
                entry.display_name = display_name.to_string();
            }
            None => self.entries.push(LeaderboardEntry {
                player,
                display_name: display_name.to_string(),
                best_score: score,
            }),
        }

        let best_score = self.best_for(player).unwrap_or(score);
        let rank = self.rank_of(player).unwrap_or(self.entries.len());
        log::debug!(
            "score submitted: player {:?} score {} -> rank {} (record: {})",
            player,
            score,
            rank,
            is_new_record
        );

        SubmitOutcome {
            rank,
            previous_best,
            best_score,
            is_new_record,
        }
    }

    /// 1-indexed rank of a player, if present.
    pub fn rank_of(&self, player: PlayerId) -> Option<usize> {
        self.sorted()
            .iter()
            .position(|e| e.player == player)
            .map(|i| i + 1)
    }

    /// Top `limit` entries, highest score first.
    pub fn top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.sorted().into_iter().take(limit).cloned().collect()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.best_score).max()
    }

    fn sorted(&self) -> Vec<&LeaderboardEntry> {
        let mut sorted: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            b.best_score
                .cmp(&a.best_score)
                .then(a.player.cmp(&b.player))
        });
        sorted
    }
}
