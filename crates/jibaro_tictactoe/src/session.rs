//! Game orchestration.
//!
//! A [`GameSession`] owns the board, the turn and the history of the game
//! in progress. It routes moves to the right board and win detector, asks
//! the engines for AI replies, and reports finished games to its
//! [`OutcomeRecorder`] and, on the infinite board, to the difficulty
//! controller.

use super::action::{MoveError, UndoError};
use super::difficulty::{DifficultyController, DifficultyTier, Verdict};
use super::engine::{BoundedMinimaxEngine, MinimaxEngine};
use super::invariants::{FixedBoardInvariants, InvariantSet, InvariantViolation, SparseBoardInvariants};
use super::mode::{FirstPlayer, GameMode};
use super::recorder::OutcomeRecorder;
use super::rules::{check_fixed, check_sparse};
use super::{FixedBoard, GameOutcome, Mark, Position, SparseBoard};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The board of the game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Board {
    /// Classic 3x3 board.
    Fixed(FixedBoard),
    /// Expandable board.
    Sparse(SparseBoard),
}

impl Board {
    /// Empty board of the kind `mode` plays on.
    pub fn for_mode(mode: GameMode) -> Self {
        if mode.is_infinite() {
            Self::Sparse(SparseBoard::new())
        } else {
            Self::Fixed(FixedBoard::new())
        }
    }

    /// Mark at `pos`.
    pub fn get(&self, pos: Position) -> Mark {
        match self {
            Self::Fixed(board) => board.get(pos),
            Self::Sparse(board) => board.get(pos),
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        match self {
            Self::Fixed(board) => board.occupied_count(),
            Self::Sparse(board) => board.occupied_count(),
        }
    }

    /// Empty cells a player may choose, row-major.
    pub fn available_moves(&self) -> Vec<Position> {
        match self {
            Self::Fixed(board) => board.available_moves(),
            Self::Sparse(board) => board.available_moves(),
        }
    }

    /// The 3x3 board, if this is one.
    pub fn as_fixed(&self) -> Option<&FixedBoard> {
        match self {
            Self::Fixed(board) => Some(board),
            Self::Sparse(_) => None,
        }
    }

    /// The expandable board, if this is one.
    pub fn as_sparse(&self) -> Option<&SparseBoard> {
        match self {
            Self::Fixed(_) => None,
            Self::Sparse(board) => Some(board),
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        match self {
            Self::Fixed(board) => board.display(),
            Self::Sparse(board) => board.display(),
        }
    }

    fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        match self {
            Self::Fixed(board) => board.apply_move(pos, mark),
            Self::Sparse(board) => board.apply_move(pos, mark),
        }
    }

    fn evaluate(&self, last_move: Position) -> GameOutcome {
        match self {
            Self::Fixed(board) => check_fixed(board),
            Self::Sparse(board) => check_sparse(board, last_move),
        }
    }

    fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        match self {
            Self::Fixed(board) => FixedBoardInvariants::check_all(board),
            Self::Sparse(board) => SparseBoardInvariants::check_all(board),
        }
    }
}

/// Mark that moves after `moves` plies; `First` always opens.
fn turn_after(moves: usize) -> Mark {
    if moves % 2 == 0 { Mark::First } else { Mark::Second }
}

/// One table of play: a board, whose turn it is, and the AI behind it.
///
/// Difficulty state carries across [`GameSession::new_game`] calls;
/// everything else is per game.
#[derive(Debug)]
pub struct GameSession<R: OutcomeRecorder = ()> {
    mode: GameMode,
    first_player: FirstPlayer,
    board: Board,
    turn: Mark,
    outcome: GameOutcome,
    history: Vec<Position>,
    difficulty: DifficultyController,
    minimax: MinimaxEngine,
    bounded: BoundedMinimaxEngine,
    rng: StdRng,
    recorder: R,
}

impl<R: OutcomeRecorder> GameSession<R> {
    /// Creates a session with the human opening, Medium difficulty and an
    /// entropy-seeded RNG.
    pub fn new(mode: GameMode, recorder: R) -> Self {
        Self::with_options(mode, FirstPlayer::Human, DifficultyTier::Medium, None, recorder)
    }

    /// Creates a session with every option spelled out.
    ///
    /// `seed` fixes the RNG used to break ties in the bounded search. If
    /// the AI opens, its first move is already on the board on return.
    #[instrument(skip(recorder))]
    pub fn with_options(
        mode: GameMode,
        first_player: FirstPlayer,
        tier: DifficultyTier,
        seed: Option<u64>,
        recorder: R,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            mode,
            first_player,
            board: Board::for_mode(mode),
            turn: Mark::First,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
            difficulty: DifficultyController::with_tier(tier),
            minimax: MinimaxEngine::new(),
            bounded: BoundedMinimaxEngine::default(),
            rng,
            recorder,
        };
        session.new_game(mode);
        session
    }

    /// Starts a fresh game in `mode`, keeping scores and difficulty.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.board = Board::for_mode(mode);
        self.turn = Mark::First;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
        info!(
            %mode,
            first_player = self.first_player.label(),
            tier = %self.difficulty.tier(),
            "New game"
        );
        if self.is_ai_turn() {
            self.play_ai_turn();
        }
    }

    /// Starts a fresh game in the current mode.
    pub fn restart(&mut self) {
        self.new_game(self.mode);
    }

    /// Hands the opening move to the other side and starts a fresh game.
    pub fn swap_first_player(&mut self) {
        self.first_player = self.first_player.toggle();
        info!(first_player = self.first_player.label(), "Opening side swapped");
        self.restart();
    }

    /// Plays `pos` for the side to move.
    ///
    /// Against the AI, its reply is applied before returning. Rejected
    /// moves leave the session untouched.
    #[instrument(skip(self), fields(mode = %self.mode, turn = %self.turn))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_terminal() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if self.is_ai_turn() {
            warn!("Move rejected: AI to move");
            return Err(MoveError::AwaitingAi);
        }

        self.place(pos).inspect_err(|e| warn!(error = %e, "Move rejected"))?;

        if self.is_ai_turn() {
            self.play_ai_turn();
        }
        Ok(self.outcome.clone())
    }

    /// Asks the AI to move now.
    ///
    /// Only needed after a search came back empty and left the turn with
    /// the AI. Returns the move played, or `None` when the game is over,
    /// the human is to move, or the search fails again.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Option<Position> {
        if self.outcome.is_terminal() || !self.is_ai_turn() {
            return None;
        }
        self.play_ai_turn()
    }

    /// Takes back the last move (and, against the AI, the AI's reply),
    /// handing the turn back to the human.
    ///
    /// Classic modes only. Scores already recorded stay recorded.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.mode.is_infinite() {
            return Err(UndoError::Unsupported);
        }
        let ai_opening = usize::from(self.ai_mark() == Some(Mark::First));
        if self.history.len() <= ai_opening {
            return Err(UndoError::NothingToUndo);
        }

        self.history.pop();
        while self.history.len() > ai_opening && self.ai_mark() == Some(turn_after(self.history.len())) {
            self.history.pop();
        }

        let mut board = Board::for_mode(self.mode);
        for (ply, &pos) in self.history.iter().enumerate() {
            if let Err(e) = board.apply_move(pos, turn_after(ply)) {
                warn!(%pos, error = %e, "History replay failed");
            }
        }
        self.board = board;
        self.turn = turn_after(self.history.len());
        self.outcome = GameOutcome::InProgress;
        debug!(moves = self.history.len(), "Move undone");
        Ok(())
    }

    /// Mark that moves next.
    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    /// Outcome after the latest move.
    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    /// The board of the game in progress.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mode of the game in progress.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Which side opens against the AI.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Mark the AI plays, or `None` when both sides are human.
    pub fn ai_mark(&self) -> Option<Mark> {
        self.mode.is_vs_ai().then_some(match self.first_player {
            FirstPlayer::Human => Mark::Second,
            FirstPlayer::Ai => Mark::First,
        })
    }

    /// Moves played this game, in order. `First` played the even plies.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Adaptive difficulty state.
    pub fn difficulty(&self) -> &DifficultyController {
        &self.difficulty
    }

    /// The outcome recorder.
    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    fn is_ai_turn(&self) -> bool {
        self.ai_mark() == Some(self.turn)
    }

    /// Applies `pos` for the side to move and settles the outcome.
    fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        self.board.apply_move(pos, self.turn)?;
        self.history.push(pos);
        self.outcome = self.board.evaluate(pos);
        debug!(%pos, mark = %self.turn, outcome = %self.outcome, "Move applied");
        self.check_invariants();

        if self.outcome.is_terminal() {
            self.finish();
        } else {
            self.turn = self.turn.opponent();
        }
        Ok(())
    }

    fn play_ai_turn(&mut self) -> Option<Position> {
        let ai = self.turn;
        let human = ai.opponent();
        let choice = match &self.board {
            Board::Fixed(board) => self.minimax.best_move(board, ai, human),
            Board::Sparse(board) => self
                .bounded
                .best_move(board, ai, human, self.difficulty.search_depth(), &mut self.rng)
                .inspect_err(|e| warn!(error = %e, "AI search failed; waiting for retry"))
                .ok(),
        };
        let pos = choice?;
        match self.place(pos) {
            Ok(()) => Some(pos),
            Err(e) => {
                warn!(%pos, error = %e, "AI chose an illegal move");
                None
            }
        }
    }

    fn finish(&mut self) {
        let winner = self.outcome.winner().unwrap_or(Mark::Empty);
        info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        self.recorder.record_outcome(winner);

        if self.mode == GameMode::InfiniteVsAi {
            let verdict = match self.ai_mark() {
                _ if winner == Mark::Empty => Verdict::Draw,
                Some(ai) if ai == winner => Verdict::AiWin,
                _ => Verdict::HumanWin,
            };
            self.difficulty.observe(verdict);
        }
    }

    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        if let Err(violations) = self.board.check_invariants() {
            for violation in &violations {
                warn!(%violation, "Board invariant violated");
            }
            debug_assert!(violations.is_empty(), "board invariants violated: {violations:?}");
        }
    }
}
