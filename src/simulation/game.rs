use tracing::debug;

use crate::{
    graph::{GraphError, VertexId, WeightedGraph},
    simulation::{FirstMover, GameError, GameOutcome, GameState, Snapshot},
    strategy::Strategy,
};

/// Step ceiling of bounded games, in rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 1000;

/// A pursuit game between two strategies on one graph.
///
/// The pursuer picks its start first and the evader picks second, knowing where the
/// pursuer stands. Players then alternate, and the two positions are compared after
/// every single move: the game ends as soon as they coincide, even halfway through a
/// round. Bounded games (the default) also end after [`DEFAULT_MAX_ROUNDS`] rounds.
pub struct Simulation<'g> {
    graph: &'g WeightedGraph,
    pursuer: Box<dyn Strategy<'g> + 'g>,
    evader: Box<dyn Strategy<'g> + 'g>,
    state: GameState,
    first_mover: FirstMover,
    max_rounds: Option<usize>,
    rounds: usize,
    moves: usize,
}

impl<'g> Simulation<'g> {
    pub fn new(
        graph: &'g WeightedGraph,
        pursuer: Box<dyn Strategy<'g> + 'g>,
        evader: Box<dyn Strategy<'g> + 'g>,
    ) -> Self {
        Simulation {
            graph,
            pursuer,
            evader,
            state: GameState::AwaitingStart,
            first_mover: FirstMover::default(),
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            rounds: 0,
            moves: 0,
        }
    }

    /// `None` plays until capture, which may never happen.
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn pursuer(&self) -> &dyn Strategy<'g> {
        self.pursuer.as_ref()
    }

    pub fn evader(&self) -> &dyn Strategy<'g> {
        self.evader.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            pursuer: self.pursuer.current(),
            evader: self.evader.current(),
            rounds: self.rounds,
            moves: self.moves,
        }
    }

    /// Lets the pursuer, then the evader, choose where to start.
    ///
    /// # Errors
    /// [`GameError::AlreadyStarted`] unless the game is awaiting its start,
    /// [`GameError::EmptyGraph`] if there is nowhere to stand.
    pub fn start(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::AwaitingStart {
            return Err(GameError::AlreadyStarted);
        }
        if self.graph.is_empty() {
            return Err(GameError::EmptyGraph);
        }
        let pursuer = self.pursuer.choose_start()?;
        let evader = self.evader.choose_start_after(pursuer)?;
        Ok(self.begin(pursuer, evader))
    }

    /// Starts the game with both players on the given vertices, bypassing the
    /// strategies' own start choice.
    pub fn place(&mut self, pursuer: VertexId, evader: VertexId) -> Result<GameState, GameError> {
        if self.state != GameState::AwaitingStart {
            return Err(GameError::AlreadyStarted);
        }
        for vertex in [pursuer, evader] {
            if !self.graph.contains_vertex(vertex) {
                return Err(GraphError::UnknownVertex(vertex).into());
            }
        }
        self.pursuer.player_mut().set_current(pursuer);
        self.evader.player_mut().set_current(evader);
        Ok(self.begin(pursuer, evader))
    }

    fn begin(&mut self, pursuer: VertexId, evader: VertexId) -> GameState {
        debug!(%pursuer, %evader, "players placed");
        self.state = if pursuer == evader {
            GameState::Captured
        } else if self.max_rounds == Some(0) {
            GameState::BudgetExhausted
        } else {
            self.first_mover.turn()
        };
        self.log_if_over();
        self.state
    }

    /// Plays one half-turn: a single move by whichever player is due.
    ///
    /// # Errors
    /// [`GameError::NotStarted`] before [`Simulation::start`] or [`Simulation::place`],
    /// [`GameError::GameOver`] once the game has ended; any error a strategy raises.
    pub fn step(&mut self) -> Result<GameState, GameError> {
        let (mover, target, next_turn) = match self.state {
            GameState::AwaitingStart => return Err(GameError::NotStarted),
            GameState::Captured | GameState::BudgetExhausted => return Err(GameError::GameOver),
            GameState::PursuerTurn => (&mut self.pursuer, &self.evader, GameState::EvaderTurn),
            GameState::EvaderTurn => (&mut self.evader, &self.pursuer, GameState::PursuerTurn),
        };

        let other = target.current().ok_or(GameError::NotPlaced)?;
        let from = mover.player().located()?;
        let to = mover.choose_next(other)?;
        self.moves += 1;
        debug!(
            player = ?self.state,
            strategy = mover.name(),
            %from,
            %to,
            round = self.rounds,
            "move"
        );

        if to == other {
            self.state = GameState::Captured;
        } else {
            // the round is over once the second mover has played
            if next_turn == self.first_mover.turn() {
                self.rounds += 1;
            }
            self.state = match self.max_rounds {
                Some(max) if self.rounds >= max => GameState::BudgetExhausted,
                _ => next_turn,
            };
        }
        self.log_if_over();
        Ok(self.state)
    }

    /// Starts the game if needed and plays it to the end.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        if self.state == GameState::AwaitingStart {
            self.start()?;
        }
        while !self.state.is_terminal() {
            self.step()?;
        }
        self.outcome().ok_or(GameError::NotPlaced)
    }

    /// Summary of the game, `None` until it has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.state.is_terminal() {
            return None;
        }
        let pursuer = self.pursuer.player();
        let evader = self.evader.player();
        Some(GameOutcome {
            state: self.state,
            captured: self.state == GameState::Captured,
            rounds: self.rounds,
            moves: self.moves,
            pursuer: pursuer.current()?,
            evader: evader.current()?,
            pursuer_strategy: self.pursuer.name(),
            evader_strategy: self.evader.name(),
            distance_queries: pursuer.distance_queries() + evader.distance_queries(),
        })
    }

    fn log_if_over(&self) {
        if self.state.is_terminal() {
            debug!(
                state = ?self.state,
                rounds = self.rounds,
                moves = self.moves,
                pursuer = self.pursuer.name(),
                evader = self.evader.name(),
                "game over"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{
        MoveAwayStrategy, MoveTowardStrategy, RandomStrategy, StrategyKind,
        WeightedMoveAwayStrategy,
    };
    use clap::ValueEnum;
    use rand::{SeedableRng, rngs::StdRng};

    fn v(i: usize) -> VertexId {
        VertexId(i)
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn cycle4() -> WeightedGraph {
        WeightedGraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)])
            .unwrap()
    }

    fn path(n: usize) -> WeightedGraph {
        let edges: Vec<_> = (1..n).map(|i| (i - 1, i, 1.0)).collect();
        WeightedGraph::from_edges(n, &edges).unwrap()
    }

    fn greedy<'g>(graph: &'g WeightedGraph, seed: u64) -> Simulation<'g> {
        Simulation::new(
            graph,
            Box::new(MoveTowardStrategy::new(graph, rng(seed))),
            Box::new(MoveAwayStrategy::new(graph, rng(seed + 1))),
        )
    }

    #[test]
    fn test_step_before_start() {
        let graph = path(3);
        let mut game = greedy(&graph, 0);
        assert_eq!(game.state(), GameState::AwaitingStart);
        assert_eq!(game.step(), Err(GameError::NotStarted));
        assert_eq!(game.outcome(), None);
        assert_eq!(game.snapshot().pursuer, None);
    }

    #[test]
    fn test_cannot_start_twice() {
        let graph = path(3);
        let mut game = greedy(&graph, 0);
        game.place(v(0), v(2)).unwrap();
        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
        assert_eq!(game.place(v(0), v(1)), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_empty_graph() {
        let graph = WeightedGraph::new();
        let mut game = greedy(&graph, 0);
        assert_eq!(game.start(), Err(GameError::EmptyGraph));
        assert_eq!(game.run(), Err(GameError::EmptyGraph));
    }

    #[test]
    fn test_place_validates_vertices() {
        let graph = path(3);
        let mut game = greedy(&graph, 0);
        assert_eq!(
            game.place(v(0), v(5)),
            Err(GameError::Graph(GraphError::UnknownVertex(v(5))))
        );
        assert_eq!(game.state(), GameState::AwaitingStart);
    }

    #[test]
    fn test_evader_starts_after_pursuer() {
        let graph = path(4);
        let mut game = Simulation::new(
            &graph,
            Box::new(MoveTowardStrategy::with_start_policy(
                &graph,
                rng(0),
                crate::strategy::StartPolicy::HighestDegree,
            )),
            Box::new(MoveAwayStrategy::new(&graph, rng(1))),
        );
        game.start().unwrap();
        let snapshot = game.snapshot();
        let pursuer = snapshot.pursuer.unwrap();
        let evader = snapshot.evader.unwrap();
        // the pursuer takes an inner vertex, the evader the end farther from it
        let far_end = if pursuer == v(1) { v(3) } else { v(0) };
        assert!(pursuer == v(1) || pursuer == v(2));
        assert_eq!(evader, far_end);
        assert_eq!(snapshot.state, GameState::PursuerTurn);
    }

    #[test]
    fn test_same_start_is_immediate_capture() {
        let graph = path(3);
        let mut game = greedy(&graph, 0);
        assert_eq!(game.place(v(1), v(1)).unwrap(), GameState::Captured);
        assert_eq!(game.step(), Err(GameError::GameOver));
        let outcome = game.outcome().unwrap();
        assert!(outcome.captured);
        assert_eq!(outcome.moves, 0);
    }

    #[test]
    fn test_capture_on_path_within_diameter() {
        let graph = path(6);
        let mut game = greedy(&graph, 3);
        game.place(v(0), v(2)).unwrap();
        let outcome = game.run().unwrap();
        assert!(outcome.captured);
        assert_eq!(outcome.state, GameState::Captured);
        assert_eq!(outcome.pursuer, outcome.evader);
        // the evader is cornered at 5 and caught on the pursuer's fifth move
        assert_eq!(outcome.evader, v(5));
        assert!(outcome.rounds <= 5);
        assert_eq!(outcome.rounds, 4);
        assert_eq!(outcome.moves, 9);
    }

    #[test]
    fn test_capture_is_checked_after_every_move() {
        let graph = path(3);
        let mut game = greedy(&graph, 0);
        game.place(v(0), v(2)).unwrap();
        // pursuer 0 -> 1, evader stays cornered on 2
        assert_eq!(game.step().unwrap(), GameState::EvaderTurn);
        assert_eq!(game.step().unwrap(), GameState::PursuerTurn);
        assert_eq!(game.rounds(), 1);
        // caught halfway through the second round
        assert_eq!(game.step().unwrap(), GameState::Captured);
        assert_eq!(game.rounds(), 1);
        assert_eq!(game.snapshot().moves, 3);
    }

    #[test]
    fn test_cycle_chase_is_bounded() {
        let graph = cycle4();
        for seed in 0..10 {
            let mut game = greedy(&graph, seed).with_max_rounds(Some(50));
            game.place(v(0), v(2)).unwrap();
            let outcome = game.run().unwrap();
            // the evader can always step to the vertex opposite the pursuer
            assert_eq!(outcome.state, GameState::BudgetExhausted);
            assert!(!outcome.captured);
            assert_eq!(outcome.rounds, 50);
            assert_eq!(outcome.moves, 100);
            assert_eq!(outcome.distance_queries, 100);
        }
    }

    #[test]
    fn test_default_budget() {
        let graph = cycle4();
        let mut game = greedy(&graph, 0);
        game.place(v(0), v(2)).unwrap();
        assert_eq!(game.run().unwrap().rounds, DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn test_zero_budget() {
        let graph = path(3);
        let mut game = greedy(&graph, 0).with_max_rounds(Some(0));
        assert_eq!(game.place(v(0), v(2)).unwrap(), GameState::BudgetExhausted);
    }

    #[test]
    fn test_evader_first() {
        let graph = path(3);
        let mut game = greedy(&graph, 0).with_first_mover(FirstMover::Evader);
        assert_eq!(game.place(v(0), v(1)).unwrap(), GameState::EvaderTurn);
        // evader 1 -> 2, then the pursuer closes in
        assert_eq!(game.step().unwrap(), GameState::PursuerTurn);
        assert_eq!(game.snapshot().evader, Some(v(2)));
        assert_eq!(game.step().unwrap(), GameState::EvaderTurn);
        assert_eq!(game.rounds(), 1);
        assert_eq!(game.step().unwrap(), GameState::PursuerTurn);
        assert_eq!(game.step().unwrap(), GameState::Captured);
    }

    #[test]
    fn test_isolated_evader_is_never_caught() {
        // 0 is isolated, 1-2 is a separate pair
        let graph = WeightedGraph::from_edges(3, &[(1, 2, 1.0)]).unwrap();
        let mut game = Simulation::new(
            &graph,
            Box::new(RandomStrategy::new(&graph, rng(0))),
            Box::new(WeightedMoveAwayStrategy::new(&graph, rng(1))),
        )
        .with_max_rounds(Some(20));
        game.place(v(1), v(0)).unwrap();
        while !game.state().is_terminal() {
            game.step().unwrap();
            assert_eq!(game.snapshot().evader, Some(v(0)));
        }
        assert_eq!(game.state(), GameState::BudgetExhausted);
    }

    #[test]
    fn test_unbounded_game_ends_in_capture() {
        let graph = path(8);
        let mut game = greedy(&graph, 0).with_max_rounds(None);
        let outcome = game.run().unwrap();
        assert!(outcome.captured);
    }

    #[test]
    fn test_every_pairing_terminates() {
        let graph = WeightedGraph::random(15, 0.3, &mut rng(99)).unwrap();
        for (i, pursuer) in StrategyKind::value_variants().iter().enumerate() {
            for (j, evader) in StrategyKind::value_variants().iter().enumerate() {
                let seed = (i * 10 + j) as u64;
                let mut game = Simulation::new(
                    &graph,
                    pursuer.build(&graph, rng(seed)),
                    evader.build(&graph, rng(seed + 100)),
                )
                .with_max_rounds(Some(30));
                let outcome = game.run().unwrap();
                assert!(outcome.state.is_terminal());
                assert!(outcome.rounds <= 30);
                assert_eq!(outcome.captured, outcome.pursuer == outcome.evader);
            }
        }
    }
}
