use serde::{Deserialize, Serialize};

use crate::{
    GameReport, GameResult, IllegalMove, MetaBoard, Player, Position, Seats, SubBoard, GRID_SIZE,
    NUM_SUB_BOARDS,
};

/// Everything needed to take back one move.
///
/// The winner of a sub-board and the meta-board entries are cached rather
/// than recomputed from the grid, so undoing a move restores them from here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub sub_index: usize,
    pub local_row: usize,
    pub local_col: usize,
    /// The player who made the move.
    pub player: Player,
    pub previous_active_board: Option<usize>,
    pub previous_meta_entry: Option<Player>,
    pub previous_sub_winner: Option<Player>,
}

impl MoveRecord {
    pub fn position(&self) -> Position {
        Position::new(
            (self.sub_index / 3) * 3 + self.local_row,
            (self.sub_index % 3) * 3 + self.local_col,
        )
    }
}

/// Summarizes the effects of an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Whether this move won its sub-board.
    pub won_sub_board: bool,
    /// The sub-board the opponent is sent to, or `None` for a free choice.
    pub active_board: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Every sub-board is closed and nobody has three in a row on the meta-board.
    Drawn,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameResult::Won { winner: player }),
            GameStatus::Drawn => Some(GameResult::Drawn),
        }
    }
}

/// The state of one game of Ultimate Tic-Tac-Toe.
///
/// The engine only changes through [`Engine::play()`] and [`Engine::undo()`].
/// It does not stop accepting moves once somebody has won; the caller is
/// expected to ask [`Engine::check_meta_win()`] (or [`Engine::status()`])
/// after every move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    /// Row-major over the 3x3 grid of sub-boards.
    sub_boards: [SubBoard; NUM_SUB_BOARDS],
    meta: MetaBoard,
    current_player: Player,
    /// The sub-board the current player was sent to. `None` means free choice.
    active_board: Option<usize>,
    history: Vec<MoveRecord>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            sub_boards: Default::default(),
            meta: MetaBoard::new(),
            current_player: Player::X,
            active_board: None,
            history: Vec::new(),
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The raw active-board value left behind by the last move.
    pub fn active_board(&self) -> Option<usize> {
        self.active_board
    }

    /// The sub-board the current player must play in, or `None` if any open
    /// sub-board may be chosen.
    pub fn forced_board(&self) -> Option<usize> {
        self.active_board
            .filter(|&idx| !self.sub_boards[idx].is_closed())
    }

    pub fn sub_board(&self, sub_index: usize) -> Option<&SubBoard> {
        self.sub_boards.get(sub_index)
    }

    pub fn sub_boards(&self) -> &[SubBoard; NUM_SUB_BOARDS] {
        &self.sub_boards
    }

    pub fn meta_board(&self) -> &MetaBoard {
        &self.meta
    }

    /// The accepted moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn get(&self, pos: Position) -> Option<Player> {
        if !pos.in_bounds() {
            return None;
        }
        let (row, col) = pos.local();
        self.sub_boards[pos.sub_index()].get(row, col)
    }

    /// The whole 9x9 grid, indexed by global row and column.
    pub fn grid(&self) -> [[Option<Player>; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[None; GRID_SIZE]; GRID_SIZE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.get(Position::new(row, col));
            }
        }
        grid
    }

    /// Checks whether the current player may play at `pos`, and if not, why.
    pub fn check_move(&self, pos: Position) -> Result<(), IllegalMove> {
        if !pos.in_bounds() {
            return Err(IllegalMove::OutOfBounds);
        }
        let sub_index = pos.sub_index();
        let (row, col) = pos.local();
        let board = &self.sub_boards[sub_index];
        if board.get(row, col).is_some() {
            return Err(IllegalMove::CellOccupied);
        }
        if board.is_closed() {
            return Err(IllegalMove::SubBoardClosed { sub_index });
        }
        match self.forced_board() {
            Some(required) if required != sub_index => Err(IllegalMove::WrongSubBoard {
                required,
                played: sub_index,
            }),
            _ => Ok(()),
        }
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.check_move(pos).is_ok()
    }

    /// All positions the current player may play at.
    pub fn legal_moves(&self) -> Vec<Position> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.is_valid_move(pos))
            .collect()
    }

    /// Plays a move for the current player.
    ///
    /// An illegal move is rejected without changing anything.
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, IllegalMove> {
        self.check_move(pos)?;

        let sub_index = pos.sub_index();
        let (local_row, local_col) = pos.local();
        let player = self.current_player;
        let board = &mut self.sub_boards[sub_index];
        let record = MoveRecord {
            sub_index,
            local_row,
            local_col,
            player,
            previous_active_board: self.active_board,
            previous_meta_entry: self.meta.get(sub_index),
            previous_sub_winner: board.winner(),
        };
        self.history.push(record);

        let placed = board.place(local_row, local_col, player);
        debug_assert!(placed, "check_move() accepted an occupied cell");
        let won_sub_board = record.previous_sub_winner.is_none() && board.winner().is_some();
        if won_sub_board {
            self.meta.record_result(sub_index, player);
        }

        // The cell just played decides where the opponent has to go
        let next_board = local_row * 3 + local_col;
        self.active_board = (!self.sub_boards[next_board].is_closed()).then_some(next_board);
        self.current_player = player.opponent();

        Ok(MoveOutcome {
            record,
            won_sub_board,
            active_board: self.active_board,
        })
    }

    /// Like [`Engine::play()`], but only reports whether the move was accepted.
    pub fn submit_move(&mut self, pos: Position) -> bool {
        self.play(pos).is_ok()
    }

    /// Takes back the last move, including whose turn it is.
    ///
    /// Returns the record of the undone move, or `None` if no move has
    /// been played, in which case nothing changes.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.sub_boards[record.sub_index].restore(
            record.local_row,
            record.local_col,
            record.previous_sub_winner,
        );
        self.meta
            .set_entry(record.sub_index, record.previous_meta_entry);
        self.active_board = record.previous_active_board;
        self.current_player = record.player;
        Some(record)
    }

    /// The player with three won sub-boards in a row, see [`MetaBoard::check_win()`].
    pub fn check_meta_win(&self) -> Option<Player> {
        self.meta.check_win()
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.check_meta_win() {
            GameStatus::Won(winner)
        } else if self.sub_boards.iter().all(SubBoard::is_closed) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// The result to hand to whoever keeps score, once the game is over.
    pub fn report(&self, players: Seats<String>) -> Option<GameReport> {
        self.status()
            .result()
            .map(|result| GameReport { players, result })
    }
}
