//! Time-based pacing for the falling token and the winning-line flash.
//!
//! The engine has already resolved where a token lands; these types only
//! decide what to draw at a given instant.

use std::time::{Duration, Instant};

use crate::game::{Landing, Player, Position};

/// A token falling from the top row to its resolved landing cell.
#[derive(Debug, Clone, Copy)]
pub struct DropAnimation {
    landing: Landing,
    started: Instant,
    row_time: Duration,
}

impl DropAnimation {
    pub fn new(landing: Landing, started: Instant, row_time: Duration) -> Self {
        DropAnimation {
            landing,
            started,
            row_time,
        }
    }

    pub fn player(&self) -> Player {
        self.landing.player
    }

    /// Row the token is drawn in at `now`, capped at the landing row
    pub fn current_row(&self, now: Instant) -> usize {
        let steps = intervals_elapsed(now.saturating_duration_since(self.started), self.row_time);
        usize::try_from(steps).map_or(self.landing.row, |s| s.min(self.landing.row))
    }

    pub fn current_position(&self, now: Instant) -> Position {
        Position::new(self.current_row(now), self.landing.column)
    }

    /// True once the token has spent one interval on every row down to its landing row
    pub fn is_finished(&self, now: Instant) -> bool {
        intervals_elapsed(now.saturating_duration_since(self.started), self.row_time)
            > self.landing.row as u128
    }
}

/// Whole `interval`s contained in `elapsed`
fn intervals_elapsed(elapsed: Duration, interval: Duration) -> u128 {
    if interval.is_zero() {
        return u128::MAX;
    }
    elapsed.as_nanos() / interval.as_nanos()
}

/// Blinks the winning cells on and off.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    started: Instant,
    period: Duration,
}

impl Flash {
    pub fn new(started: Instant, period: Duration) -> Self {
        Flash { started, period }
    }

    /// Whether the highlighted cells are drawn lit at `now`
    pub fn is_lit(&self, now: Instant) -> bool {
        intervals_elapsed(now.saturating_duration_since(self.started), self.period) % 2 == 0
    }
}
