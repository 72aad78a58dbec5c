// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The turn state machine. A `Game` owns a board and the color to move, and changes only through `make_move`, which
//! either applies a legal move in full or rejects it without touching any state.

use thiserror::Error;

use crate::{
    board::Board,
    core::{Color, Coordinate, NoPathFound, Path, PieceKind, BOARD_SIZE},
    piece::Piece,
    score::{Outcome, Score},
    snapshot::Snapshot,
};

/// Pawns sharing a file with another pawn of their color are worth this fraction of their nominal value.
const DOUBLED_PAWN_FACTOR: f64 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Ended { winner: Color },
}

/// What a successful move did. Capturing a king is a successful move that also ends the game.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Continue {
        next_turn: Color,
        captured: Option<PieceKind>,
    },
    GameOver {
        winner: Color,
        white_score: Score,
        black_score: Score,
    },
}

impl MoveOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver { .. })
    }
}

/// Reasons a move is rejected. None of them leave the game in a different state than before the attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAtSource(Coordinate),
    #[error("the piece at {square} does not belong to {turn}")]
    NotYourTurn { square: Coordinate, turn: Color },
    #[error("{0} is occupied by a piece of the same color")]
    OccupiedBySelf(Coordinate),
    #[error(transparent)]
    NoPathFound(#[from] NoPathFound),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
}

impl Game {
    /// A new game from the standard arrangement, White to move.
    pub fn new() -> Game {
        Game::restore(Board::standard(), Color::White)
    }

    /// A game resumed from a saved board and turn. A board with exactly one king left is already over.
    pub fn restore(board: Board, turn: Color) -> Game {
        let status = match (board.king(Color::White), board.king(Color::Black)) {
            (Some(_), None) => GameStatus::Ended {
                winner: Color::White,
            },
            (None, Some(_)) => GameStatus::Ended {
                winner: Color::Black,
            },
            _ => GameStatus::Ongoing,
        };

        Game {
            board,
            turn,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    /// Moves the piece on `start` to `end` on behalf of the side to move.
    pub fn make_move(
        &mut self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<MoveOutcome, MoveError> {
        let result = self.validate(start, end).and_then(|path| {
            tracing::debug!(%start, %end, path = ?path.as_slice(), "move accepted");
            self.apply(start, end)
        });

        if let Err(ref err) = result {
            tracing::debug!(%start, %end, %err, "move rejected");
        }

        result
    }

    // Checks a move against the current position without mutating anything.
    fn validate(&self, start: Coordinate, end: Coordinate) -> Result<Path, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let piece = self
            .board
            .piece_at(start)
            .ok_or(MoveError::NoPieceAtSource(start))?;
        if !piece.is_mine(self.turn) {
            return Err(MoveError::NotYourTurn {
                square: start,
                turn: self.turn,
            });
        }

        let occupancy = |square| self.board.color_at(square);
        let path = match self.board.color_at(end) {
            Some(color) if color == self.turn => return Err(MoveError::OccupiedBySelf(end)),
            Some(_) => piece.attackable_path(end, occupancy)?,
            None => piece.movable_path(end, occupancy)?,
        };

        Ok(path)
    }

    fn apply(&mut self, start: Coordinate, end: Coordinate) -> Result<MoveOutcome, MoveError> {
        let mover = self.turn;
        let captured = self
            .board
            .move_piece(start, end)
            .map_err(|_| MoveError::NoPieceAtSource(start))?;
        self.turn = mover.toggle();

        match captured {
            Some(piece) if piece.is_king() => {
                self.status = GameStatus::Ended { winner: mover };
                let white_score = self.player_score(Color::White);
                let black_score = self.player_score(Color::Black);
                tracing::info!(winner = %mover, %white_score, %black_score, "king captured, game over");
                Ok(MoveOutcome::GameOver {
                    winner: mover,
                    white_score,
                    black_score,
                })
            }
            captured => {
                if let Some(piece) = captured {
                    tracing::info!(square = %end, kind = %piece.kind(), by = %mover, "piece captured");
                }

                Ok(MoveOutcome::Continue {
                    next_turn: self.turn,
                    captured: captured.map(|p| p.kind()),
                })
            }
        }
    }

    /// The side that has won, or is ahead. Once a king has been captured this is the side whose king survives; while
    /// both kings are on the board it is the side with the higher score, and `None` if the scores are level.
    pub fn find_winner(&self) -> Option<Color> {
        if let GameStatus::Ended { winner } = self.status {
            return Some(winner);
        }

        match (self.board.king(Color::White), self.board.king(Color::Black)) {
            (Some(_), None) => Some(Color::White),
            (None, Some(_)) => Some(Color::Black),
            _ => match self
                .player_score(Color::White)
                .compare(self.player_score(Color::Black))
            {
                Outcome::Win => Some(Color::White),
                Outcome::Lose => Some(Color::Black),
                Outcome::Draw => None,
            },
        }
    }

    /// The total value of `color`'s pieces on the board. Pawns that share a file with at least one other pawn of the
    /// same color count for half.
    pub fn player_score(&self, color: Color) -> Score {
        let mut pawns_per_file = [0usize; BOARD_SIZE as usize];
        for pawn in self.board.pieces_of(color).filter(|p| p.is_pawn()) {
            pawns_per_file[pawn.position().file() as usize] += 1;
        }

        self.board
            .pieces_of(color)
            .map(|piece| piece_score(piece, &pawns_per_file))
            .sum()
    }
}

fn piece_score(piece: &Piece, pawns_per_file: &[usize]) -> Score {
    let nominal = piece.score();
    if piece.is_pawn() && pawns_per_file[piece.position().file() as usize] >= 2 {
        Score::new(nominal.value() * DOUBLED_PAWN_FACTOR)
    } else {
        nominal
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
