use crate::error::{ConfigError, FieldViolation, MoveError};

use super::{Board, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// What a successful move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Win(PlayerId),
    Draw,
    Continue { next_player: PlayerId },
}

/// Where a piece landed and what it caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub outcome: MoveOutcome,
}

/// Board, turn and terminal state of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: PlayerId,
    player_count: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game. Every dimension and the player count must be
    /// non-zero; all offending values are reported together.
    pub fn new(height: usize, width: usize, player_count: usize) -> Result<Self, ConfigError> {
        let violations: Vec<FieldViolation> = [
            ("height", height),
            ("width", width),
            ("players", player_count),
        ]
        .into_iter()
        .filter(|&(_, value)| value == 0)
        .map(|(field, _)| FieldViolation::not_positive(field, 0))
        .collect();

        if !violations.is_empty() {
            return Err(ConfigError::Invalid(violations));
        }

        let board = Board::try_new(height, width).ok_or_else(|| {
            ConfigError::Invalid(vec![FieldViolation::board_too_large(height, width)])
        })?;

        Ok(GameState {
            board,
            current_player: PlayerId::FIRST,
            player_count,
            outcome: None,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether dropping into `column` would be accepted by the board.
    pub fn is_valid_move(&self, column: usize) -> bool {
        self.board.is_valid_move(column)
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| self.board.is_valid_move(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A rejected move leaves the board and the turn untouched. After a
    /// placement the mover is checked for a run first, then the board for a
    /// draw; only a move that ends neither advances the turn.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;

        let outcome = if self.board.has_run(player) {
            self.outcome = Some(GameOutcome::Winner(player));
            MoveOutcome::Win(player)
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            MoveOutcome::Draw
        } else {
            self.current_player = player.next(self.player_count);
            MoveOutcome::Continue {
                next_player: self.current_player,
            }
        };

        Ok(MoveResult {
            row,
            column,
            player,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    fn p(n: usize) -> PlayerId {
        PlayerId::new(n).unwrap()
    }

    fn occupied_count(board: &Board) -> usize {
        (0..board.height())
            .flat_map(|r| (0..board.width()).map(move |c| (r, c)))
            .filter(|&(r, c)| !board.get(r, c).is_empty())
            .count()
    }

    #[test]
    fn test_initial_state() {
        for (h, w, n) in [(6, 7, 2), (1, 1, 1), (4, 9, 5)] {
            let state = GameState::new(h, w, n).unwrap();
            assert_eq!(state.current_player(), PlayerId::FIRST);
            assert_eq!(state.player_count(), n);
            assert!(!state.is_over());
            assert_eq!(occupied_count(state.board()), 0);
            assert_eq!(state.legal_columns(), (0..w).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = GameState::new(0, 7, 0).unwrap_err();
        match err {
            ConfigError::Invalid(violations) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["height", "players"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oversized_board_rejected() {
        let half = usize::MAX / 2 + 1;
        match GameState::new(half, 2, 2) {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].message.contains("too large"));
            }
            other => panic!("expected invalid settings, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::new(6, 7, 2).unwrap();
        let result = state.apply_move(3).unwrap();

        assert_eq!(result.row, 0);
        assert_eq!(result.column, 3);
        assert_eq!(result.player, p(1));
        assert_eq!(result.outcome, MoveOutcome::Continue { next_player: p(2) });
        assert_eq!(state.current_player(), p(2));
        assert_eq!(state.board().get(0, 3), Cell::Occupied(p(1)));
    }

    #[test]
    fn test_each_move_fills_exactly_one_cell() {
        let mut state = GameState::new(3, 3, 2).unwrap();
        for (i, col) in [0, 1, 2, 0, 1, 2].into_iter().enumerate() {
            let before = state.board().clone();
            let result = state.apply_move(col).unwrap();
            assert!(before.get(result.row, col).is_empty());
            assert_eq!(occupied_count(state.board()), i + 1);
        }
    }

    #[test]
    fn test_turn_order_cycles() {
        let mut state = GameState::new(6, 7, 3).unwrap();
        let mut seen = Vec::new();
        for col in [0, 1, 2, 3, 4, 5, 6] {
            seen.push(state.current_player().number());
            state.apply_move(col).unwrap();
        }
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_rejections_do_not_advance_turn() {
        let mut state = GameState::new(2, 3, 2).unwrap();
        state.apply_move(0).unwrap(); // 1
        state.apply_move(0).unwrap(); // 2
        assert_eq!(state.current_player(), p(1));

        let before = state.board().clone();
        assert_eq!(
            state.apply_move(0),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(
            state.apply_move(3),
            Err(MoveError::OutOfBounds {
                column: 3,
                width: 3
            })
        );
        assert_eq!(state.current_player(), p(1));
        assert_eq!(state.board(), &before);
        assert!(!state.is_valid_move(0));
        assert_eq!(state.legal_columns(), vec![1, 2]);
    }

    #[test]
    fn test_vertical_win_in_column_zero() {
        let mut state = GameState::new(6, 7, 2).unwrap();

        for _ in 0..3 {
            assert!(matches!(
                state.apply_move(0).unwrap().outcome,
                MoveOutcome::Continue { .. }
            ));
            state.apply_move(1).unwrap();
        }
        let result = state.apply_move(0).unwrap();

        assert_eq!(result.outcome, MoveOutcome::Win(p(1)));
        assert_eq!(result.row, 3);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(p(1))));
        for row in 0..4 {
            assert_eq!(state.board().get(row, 0), Cell::Occupied(p(1)));
        }
        assert!(state.board().get(4, 0).is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = GameState::new(6, 7, 2).unwrap();

        // Player 1 builds the bottom row, player 2 stacks on top
        for col in 0..4 {
            let result = state.apply_move(col).unwrap();
            if col < 3 {
                state.apply_move(col).unwrap();
            } else {
                assert_eq!(result.outcome, MoveOutcome::Win(p(1)));
            }
        }

        assert!(state.is_over());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(p(1))));
    }

    #[test]
    fn test_rising_diagonal_win_with_three_players() {
        let mut state = GameState::new(6, 7, 3).unwrap();
        // Player 1 climbs (0,0) (1,1) (2,2) (3,3); 2 and 3 supply the steps
        let moves = [0, 1, 2, 1, 2, 3, 2, 3, 3];
        for &col in &moves {
            assert!(matches!(
                state.apply_move(col).unwrap().outcome,
                MoveOutcome::Continue { .. }
            ));
        }
        assert_eq!(state.current_player(), p(1));

        let result = state.apply_move(3).unwrap();
        assert_eq!(result.row, 3);
        assert_eq!(result.outcome, MoveOutcome::Win(p(1)));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(p(1))));
    }

    #[test]
    fn test_falling_diagonal_win_for_last_player() {
        let mut state = GameState::new(6, 7, 3).unwrap();
        // Player 3 holds (0,3) (1,2) (2,1) and completes at (3,0)
        let moves = [0, 1, 3, 2, 0, 2, 1, 0, 1, 5, 6];
        for (i, &col) in moves.iter().enumerate() {
            let result = state.apply_move(col).unwrap();
            let expected = p(i % 3 + 1).next(3);
            assert_eq!(result.outcome, MoveOutcome::Continue { next_player: expected });
        }
        assert_eq!(state.current_player(), p(3));

        let result = state.apply_move(0).unwrap();
        assert_eq!((result.row, result.column), (3, 0));
        assert_eq!(result.outcome, MoveOutcome::Win(p(3)));
        assert_eq!(state.current_player(), p(3));
        assert_eq!(state.apply_move(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_second_player_can_win() {
        let mut state = GameState::new(6, 7, 2).unwrap();
        // 1 scatters, 2 stacks column 6
        for col in [0, 1, 3] {
            state.apply_move(col).unwrap();
            state.apply_move(6).unwrap();
        }
        state.apply_move(0).unwrap();
        let result = state.apply_move(6).unwrap();
        assert_eq!(result.outcome, MoveOutcome::Win(p(2)));
        assert_eq!(state.current_player(), p(2));
    }

    #[test]
    fn test_draw_on_last_cell() {
        // Columns alternate owners in pairs: no row, column or diagonal run
        let mut state = GameState::new(2, 4, 2).unwrap();
        let moves = [0, 1, 1, 0, 2, 3, 3, 2];

        for (i, &col) in moves.iter().enumerate() {
            let result = state.apply_move(col).unwrap();
            if i + 1 < moves.len() {
                assert!(matches!(result.outcome, MoveOutcome::Continue { .. }));
            } else {
                assert_eq!(result.outcome, MoveOutcome::Draw);
            }
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        let mut state = GameState::new(1, 4, 1).unwrap();
        for col in 0..3 {
            assert_eq!(
                state.apply_move(col).unwrap().outcome,
                MoveOutcome::Continue { next_player: p(1) }
            );
        }
        let result = state.apply_move(3).unwrap();

        assert!(state.board().is_full());
        assert_eq!(result.outcome, MoveOutcome::Win(p(1)));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(p(1))));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::new(1, 1, 2).unwrap();
        assert_eq!(state.apply_move(0).unwrap().outcome, MoveOutcome::Draw);

        let before = state.board().clone();
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(state.board(), &before);
        assert!(state.legal_columns().is_empty());
    }
}
