use std::fmt;

use serde::Serialize;

use crate::simulation::GameOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    games: usize,
    captures: usize,
    rounds: usize,
    moves: usize,
    distance_queries: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            games: 0,
            captures: 0,
            rounds: 0,
            moves: 0,
            distance_queries: 0,
        }
    }

    /// Record into the statistics object that one more game was played to the end
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        if outcome.captured {
            self.captures += 1;
        }
        self.rounds += outcome.rounds;
        self.moves += outcome.moves;
        self.distance_queries += outcome.distance_queries;
    }

    /// Combine the counts of two batches, e.g. several runs of the same configuration
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            games: self.games + other.games,
            captures: self.captures + other.captures,
            rounds: self.rounds + other.rounds,
            moves: self.moves + other.moves,
            distance_queries: self.distance_queries + other.distance_queries,
        }
    }

    pub fn get_games(&self) -> usize {
        self.games
    }

    pub fn get_captures(&self) -> usize {
        self.captures
    }

    pub fn get_rounds(&self) -> usize {
        self.rounds
    }

    pub fn get_moves(&self) -> usize {
        self.moves
    }

    pub fn get_distance_queries(&self) -> usize {
        self.distance_queries
    }

    /// Fraction of games ending in a capture, 0 when nothing was recorded
    pub fn capture_rate(&self) -> f64 {
        self.per_game(self.captures)
    }

    /// Rounds per game, uncaught games counting the rounds they lasted
    pub fn mean_rounds(&self) -> f64 {
        self.per_game(self.rounds)
    }

    pub fn mean_distance_queries(&self) -> f64 {
        self.per_game(self.distance_queries)
    }

    fn per_game(&self, total: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            total as f64 / self.games as f64
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capture rate: {:.2}% ({}/{}), avg rounds: {:.2}, avg oracle runs: {:.2}",
            self.capture_rate() * 100.0,
            self.captures,
            self.games,
            self.mean_rounds(),
            self.mean_distance_queries()
        )
    }
}
