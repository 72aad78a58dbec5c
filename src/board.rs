// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use thiserror::Error;

use crate::{
    core::{colors, Color, Coordinate, PieceKind, BOARD_SIZE},
    piece::Piece,
};

const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    SlotOccupied(Coordinate),
    #[error("no piece on square {0}")]
    EmptySquare(Coordinate),
}

/// The 8x8 grid. Each square holds at most one piece, and every piece on the board agrees with the board about which
/// square it is on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting arrangement.
    pub fn standard() -> Board {
        let mut board = Board::new();
        for color in colors() {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                board.place(Piece::new(kind, color, square(file as i32, color.back_rank())));
            }

            for file in 0..BOARD_SIZE {
                board.place(Piece::new(
                    PieceKind::Pawn,
                    color,
                    square(file, color.pawn_rank()),
                ));
            }
        }

        board
    }

    pub fn piece_at(&self, square: Coordinate) -> Option<&Piece> {
        self.squares[square.index()].as_ref()
    }

    /// The color of the piece on `square`, if any. This is the occupancy probe path resolution runs against.
    pub fn color_at(&self, square: Coordinate) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    /// Puts a piece on the square it claims to stand on. Only used while setting up or restoring a board.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), BoardError> {
        let square = piece.position();
        if self.piece_at(square).is_some() {
            return Err(BoardError::SlotOccupied(square));
        }

        self.place(piece);
        Ok(())
    }

    /// Moves the piece on `from` to `to`, returning whatever piece previously stood on `to`.
    pub fn move_piece(
        &mut self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Option<Piece>, BoardError> {
        let mut piece = self.squares[from.index()]
            .take()
            .ok_or(BoardError::EmptySquare(from))?;
        piece.change_position(to);
        Ok(self.squares[to.index()].replace(piece))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.is_mine(color))
    }

    pub fn king(&self, color: Color) -> Option<Coordinate> {
        self.pieces_of(color)
            .find(|p| p.is_king())
            .map(Piece::position)
    }

    fn place(&mut self, piece: Piece) {
        self.squares[piece.position().index()] = Some(piece);
    }
}

// Only ever called with in-range literals from the setup tables.
fn square(file: i32, rank: i32) -> Coordinate {
    Coordinate::new(file, rank).expect("setup square out of range")
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            for file in 0..BOARD_SIZE {
                match self.piece_at(square(file, rank)) {
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in 0..BOARD_SIZE {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in 0..BOARD_SIZE {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PawnState, Role};

    fn sq(file: i32, rank: i32) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);

        let king = board.piece_at(sq(4, 0)).unwrap();
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(king.color(), Color::White);

        let queen = board.piece_at(sq(3, 7)).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), Color::Black);

        for file in 0..BOARD_SIZE {
            for rank in 2..6 {
                assert!(board.piece_at(sq(file, rank)).is_none());
            }
        }
    }

    #[test]
    fn pieces_agree_with_their_squares() {
        let board = Board::standard();
        for square in Coordinate::all() {
            if let Some(piece) = board.piece_at(square) {
                assert_eq!(piece.position(), square);
            }
        }
    }

    #[test]
    fn add_piece_rejects_occupied() {
        let mut board = Board::new();
        board
            .add_piece(Piece::new(PieceKind::Rook, Color::White, sq(0, 0)))
            .unwrap();
        let err = board
            .add_piece(Piece::new(PieceKind::Knight, Color::Black, sq(0, 0)))
            .unwrap_err();
        assert_eq!(err, BoardError::SlotOccupied(sq(0, 0)));
        assert_eq!(board.piece_at(sq(0, 0)).unwrap().kind(), PieceKind::Rook);
    }

    #[test]
    fn move_piece_quiet() {
        let mut board = Board::standard();
        let captured = board.move_piece(sq(4, 1), sq(4, 3)).unwrap();
        assert!(captured.is_none());
        assert!(board.piece_at(sq(4, 1)).is_none());

        let pawn = board.piece_at(sq(4, 3)).unwrap();
        assert_eq!(pawn.position(), sq(4, 3));
        assert_eq!(pawn.role(), Role::Pawn(PawnState::HasMoved));
    }

    #[test]
    fn move_piece_capture() {
        let mut board = Board::new();
        board
            .add_piece(Piece::new(PieceKind::Rook, Color::White, sq(0, 0)))
            .unwrap();
        board
            .add_piece(Piece::new(PieceKind::Queen, Color::Black, sq(0, 5)))
            .unwrap();
        let captured = board.move_piece(sq(0, 0), sq(0, 5)).unwrap().unwrap();
        assert_eq!(captured.kind(), PieceKind::Queen);
        assert_eq!(board.color_at(sq(0, 5)), Some(Color::White));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn move_piece_from_empty_square() {
        let mut board = Board::new();
        assert_eq!(
            board.move_piece(sq(3, 3), sq(3, 4)),
            Err(BoardError::EmptySquare(sq(3, 3)))
        );
    }

    #[test]
    fn king_lookup() {
        let board = Board::standard();
        assert_eq!(board.king(Color::Black), Some(sq(4, 7)));
        assert_eq!(Board::new().king(Color::White), None);
    }

    #[test]
    fn display() {
        let rendered = Board::standard().to_string();
        let first = rendered.lines().next().unwrap();
        assert_eq!(first, " r  n  b  q  k  b  n  r | 7");
    }
}
