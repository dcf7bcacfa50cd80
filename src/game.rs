use crate::{
    board::Board,
    common::{BoardError, GameStatus, Placement, Player},
};
use log::{debug, info};

/// Turn and session state over a [`Board`]: alternates the current player,
/// counts turns, and keeps a cached tri-state status refreshed
/// incrementally from the routes each move touches.
pub struct Game {
    board: Board,
    current: Player,
    turns: usize,
    status: GameStatus,
}

impl Game {
    /// Start a game on an empty board of side `size`. Nought opens.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Game {
            board: Board::new(size)?,
            current: Player::Nought,
            turns: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Immutable view of the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Number of successful placements so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Current status. A plain value; an unfinished game is
    /// [`GameStatus::InProgress`], never an error.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play the current player's mark at (row, col).
    ///
    /// [`Placement::Occupied`] leaves the turn with the same player so the
    /// caller can re-prompt. On a successful placement the turn advances,
    /// the player flips, and the status is refreshed by checking only the
    /// routes the move touched. Playing after the game has ended is a
    /// caller bug and fails with [`BoardError::GameOver`].
    pub fn play(&mut self, row: usize, col: usize) -> Result<Placement, BoardError> {
        if self.status != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        let placement = self.board.place(row, col, self.current)?;
        if let Placement::Placed(touched) = placement {
            debug!(
                "{:?} placed at ({}, {}), {} routes touched",
                self.current,
                row,
                col,
                touched.len()
            );
            self.turns += 1;
            if let Some(winner) = self.board.winner_on(&touched) {
                info!("{:?} wins after {} turns", winner, self.turns);
                self.status = GameStatus::Won(winner);
            } else if self.turns == self.board.size() * self.board.size() {
                info!("draw after {} turns", self.turns);
                self.status = GameStatus::Draw;
            } else {
                self.current = self.current.other();
            }
        }
        Ok(placement)
    }
}
