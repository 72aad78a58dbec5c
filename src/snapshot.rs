// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Snapshots are the form a game takes outside of the engine: a flat list of pieces and the color to move. Whatever
//! stores or displays games works with snapshots and never with the engine's internal types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::{Board, BoardError},
    core::{Color, Coordinate, CoordinateError, PieceKind},
    game::Game,
    piece::Piece,
};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// One piece on a saved board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub file: i32,
    pub rank: i32,
    pub kind: PieceKind,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: Color,
    pub pieces: Vec<PlacedPiece>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Snapshot {
        let pieces = game
            .board()
            .pieces()
            .map(|piece| PlacedPiece {
                file: piece.position().file(),
                rank: piece.position().rank(),
                kind: piece.kind(),
                color: piece.color(),
            })
            .collect();

        Snapshot {
            turn: game.turn(),
            pieces,
        }
    }

    /// Rebuilds the game this snapshot was taken from. Fails if a piece sits off the board or two pieces share a
    /// square.
    pub fn restore(&self) -> Result<Game, SnapshotError> {
        let mut board = Board::new();
        for placed in &self.pieces {
            let square = Coordinate::new(placed.file, placed.rank)?;
            board.add_piece(Piece::restore(placed.kind, placed.color, square))?;
        }

        Ok(Game::restore(board, self.turn))
    }

    pub fn from_json(json: impl AsRef<str>) -> Result<Snapshot, SnapshotError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn sq(file: i32, rank: i32) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    #[test]
    fn restores_position_and_turn() {
        let mut game = Game::new();
        game.make_move(sq(6, 0), sq(5, 2)).unwrap();

        let restored = game.snapshot().restore().unwrap();
        assert_eq!(restored.turn(), Color::Black);
        assert_eq!(restored.board(), game.board());
    }

    #[test]
    fn restored_pawns_off_home_rank_have_moved() {
        let mut game = Game::new();
        game.make_move(sq(0, 1), sq(0, 2)).unwrap();
        game.make_move(sq(7, 6), sq(7, 5)).unwrap();

        let mut restored = game.snapshot().restore().unwrap();
        assert!(restored.make_move(sq(0, 2), sq(0, 4)).is_err());
        assert!(restored.make_move(sq(1, 1), sq(1, 3)).is_ok());
    }

    #[test]
    fn json_format() {
        let snapshot = Snapshot {
            turn: Color::Black,
            pieces: vec![PlacedPiece {
                file: 4,
                rank: 0,
                kind: PieceKind::King,
                color: Color::White,
            }],
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "turn": "BLACK",
                "pieces": [{ "file": 4, "rank": 0, "kind": "KING", "color": "WHITE" }],
            })
        );

        let parsed = Snapshot::from_json(snapshot.to_json().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn restore_with_one_king_is_over() {
        let snapshot = Snapshot::from_json(
            r#"{"turn": "WHITE", "pieces": [{"file": 4, "rank": 7, "kind": "KING", "color": "BLACK"}]}"#,
        )
        .unwrap();
        let game = snapshot.restore().unwrap();
        assert_eq!(game.status(), GameStatus::Ended { winner: Color::Black });
    }

    #[test]
    fn rejects_off_board_piece() {
        let snapshot = Snapshot {
            turn: Color::White,
            pieces: vec![PlacedPiece {
                file: 8,
                rank: 0,
                kind: PieceKind::Rook,
                color: Color::White,
            }],
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::Coordinate(CoordinateError::InvalidCoordinate(8, 0)))
        ));
    }

    #[test]
    fn rejects_shared_square() {
        let rook = PlacedPiece {
            file: 0,
            rank: 0,
            kind: PieceKind::Rook,
            color: Color::White,
        };
        let snapshot = Snapshot {
            turn: Color::White,
            pieces: vec![rook, rook],
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::Board(BoardError::SlotOccupied(_)))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Snapshot::from_json("{\"turn\": \"GREEN\"}"),
            Err(SnapshotError::Json(_))
        ));
    }
}
