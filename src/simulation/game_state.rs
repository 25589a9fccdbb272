use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// `AwaitingStart` leads to one of the turn states (or straight to a terminal state when
/// the players start on the same vertex); the turn states alternate until `Captured` or,
/// for bounded games, `BudgetExhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    AwaitingStart,
    PursuerTurn,
    EvaderTurn,
    Captured,
    BudgetExhausted,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Captured | GameState::BudgetExhausted)
    }
}

/// Which player moves first once both have started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FirstMover {
    #[default]
    Pursuer,
    Evader,
}

impl FirstMover {
    pub(crate) fn turn(self) -> GameState {
        match self {
            FirstMover::Pursuer => GameState::PursuerTurn,
            FirstMover::Evader => GameState::EvaderTurn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(GameState::Captured.is_terminal());
        assert!(GameState::BudgetExhausted.is_terminal());
        assert!(!GameState::AwaitingStart.is_terminal());
        assert!(!GameState::PursuerTurn.is_terminal());
        assert!(!GameState::EvaderTurn.is_terminal());
    }

    #[test]
    fn test_first_mover() {
        assert_eq!(FirstMover::default().turn(), GameState::PursuerTurn);
        assert_eq!(FirstMover::Evader.turn(), GameState::EvaderTurn);
        assert_eq!(
            serde_json::to_string(&GameState::BudgetExhausted).unwrap(),
            "\"budget-exhausted\""
        );
    }
}
