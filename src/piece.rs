// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pieces and the geometry each kind of piece moves with.

use std::fmt;

use crate::{
    core::{
        patterns, resolve_path, Color, Coordinate, Direction, MovementPattern, NoPathFound, Path,
        PieceKind, MAX_SLIDE,
    },
    score::Score,
};

/// Whether a pawn may still make its two-square opening advance. A pawn moves from `HasNotMoved` to `HasMoved`
/// exactly once, the first time it is relocated, and never back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PawnState {
    HasNotMoved,
    HasMoved,
}

/// The closed set of piece kinds, carrying whatever state a kind needs to decide how it moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Pawn(PawnState),
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub fn kind(self) -> PieceKind {
        match self {
            Role::Pawn(_) => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

/// A piece on the board: its identity (kind and color) together with the square it currently stands on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    role: Role,
    position: Coordinate,
}

impl Piece {
    /// Creates a piece as it stands at the start of a game. Pawns have not moved yet.
    pub fn new(kind: PieceKind, color: Color, position: Coordinate) -> Piece {
        Piece::with_pawn_state(kind, color, position, PawnState::HasNotMoved)
    }

    /// Creates a piece recovered from a saved board. A pawn counts as unmoved only while it stands on its color's
    /// starting rank, since a saved board does not record move history.
    pub fn restore(kind: PieceKind, color: Color, position: Coordinate) -> Piece {
        let state = if position.rank() == color.pawn_rank() {
            PawnState::HasNotMoved
        } else {
            PawnState::HasMoved
        };

        Piece::with_pawn_state(kind, color, position, state)
    }

    fn with_pawn_state(
        kind: PieceKind,
        color: Color,
        position: Coordinate,
        state: PawnState,
    ) -> Piece {
        let role = match kind {
            PieceKind::Pawn => Role::Pawn(state),
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        };

        Piece {
            color,
            role,
            position,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn kind(&self) -> PieceKind {
        self.role.kind()
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn is_mine(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn is_pawn(&self) -> bool {
        matches!(self.role, Role::Pawn(_))
    }

    pub fn is_king(&self) -> bool {
        self.role == Role::King
    }

    /// The nominal value this piece contributes to its side's score.
    pub fn score(&self) -> Score {
        let value = match self.role {
            Role::Pawn(_) => 1.0,
            Role::Knight => 2.5,
            Role::Bishop => 3.0,
            Role::Rook => 5.0,
            Role::Queen => 9.0,
            Role::King => 0.0,
        };

        Score::new(value)
    }

    /// Patterns for moving onto an empty square.
    pub fn movement_patterns(&self) -> Vec<MovementPattern> {
        match self.role {
            Role::Pawn(PawnState::HasNotMoved) => {
                vec![MovementPattern::new(self.color.forward(), 2)]
            }
            Role::Pawn(PawnState::HasMoved) => vec![MovementPattern::step(self.color.forward())],
            Role::Knight => patterns(&Direction::KNIGHT, 1),
            Role::Bishop => patterns(&Direction::DIAGONAL, MAX_SLIDE),
            Role::Rook => patterns(&Direction::ORTHOGONAL, MAX_SLIDE),
            Role::Queen => patterns(&Direction::UNIT, MAX_SLIDE),
            Role::King => patterns(&Direction::UNIT, 1),
        }
    }

    /// Patterns for moving onto a square held by an opposing piece. Only pawns capture differently from how they move.
    pub fn attack_patterns(&self) -> Vec<MovementPattern> {
        match (self.role, self.color) {
            (Role::Pawn(_), Color::White) => vec![
                MovementPattern::step(Direction::NorthWest),
                MovementPattern::step(Direction::NorthEast),
            ],
            (Role::Pawn(_), Color::Black) => vec![
                MovementPattern::step(Direction::SouthWest),
                MovementPattern::step(Direction::SouthEast),
            ],
            _ => self.movement_patterns(),
        }
    }

    pub fn movable_path<F>(&self, end: Coordinate, occupancy: F) -> Result<Path, NoPathFound>
    where
        F: Fn(Coordinate) -> Option<Color>,
    {
        resolve_path(&self.movement_patterns(), self.position, end, occupancy)
    }

    pub fn attackable_path<F>(&self, end: Coordinate, occupancy: F) -> Result<Path, NoPathFound>
    where
        F: Fn(Coordinate) -> Option<Color>,
    {
        resolve_path(&self.attack_patterns(), self.position, end, occupancy)
    }

    /// Relocates this piece. The first relocation of a pawn permanently takes away its two-square advance.
    pub fn change_position(&mut self, position: Coordinate) {
        self.position = position;
        if let Role::Pawn(PawnState::HasNotMoved) = self.role {
            self.role = Role::Pawn(PawnState::HasMoved);
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.kind().to_string();
        match self.color {
            Color::White => write!(f, "{}", c.to_uppercase()),
            Color::Black => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i32, rank: i32) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    fn empty(_: Coordinate) -> Option<Color> {
        None
    }

    mod pawn {
        use super::*;

        #[test]
        fn opening_double_step() {
            let pawn = Piece::new(PieceKind::Pawn, Color::White, sq(4, 1));
            let path = pawn.movable_path(sq(4, 3), empty).unwrap();
            assert_eq!(path.as_slice(), &[sq(4, 2)]);
        }

        #[test]
        fn double_step_collapses_after_first_move() {
            let mut pawn = Piece::new(PieceKind::Pawn, Color::Black, sq(3, 6));
            pawn.change_position(sq(3, 5));
            assert_eq!(pawn.role(), Role::Pawn(PawnState::HasMoved));
            assert!(pawn.movable_path(sq(3, 3), empty).is_err());
            assert!(pawn.movable_path(sq(3, 4), empty).is_ok());
        }

        #[test]
        fn double_step_blocked() {
            let pawn = Piece::new(PieceKind::Pawn, Color::White, sq(4, 1));
            let blocked = |c: Coordinate| (c == sq(4, 2)).then(|| Color::Black);
            assert!(pawn.movable_path(sq(4, 3), blocked).is_err());
        }

        #[test]
        fn cannot_move_backwards() {
            let pawn = Piece::new(PieceKind::Pawn, Color::White, sq(4, 3));
            assert!(pawn.movable_path(sq(4, 2), empty).is_err());
        }

        #[test]
        fn attacks_diagonally_forward() {
            let pawn = Piece::new(PieceKind::Pawn, Color::White, sq(4, 3));
            assert!(pawn.attackable_path(sq(5, 4), empty).is_ok());
            assert!(pawn.attackable_path(sq(3, 4), empty).is_ok());
            assert!(pawn.attackable_path(sq(4, 4), empty).is_err());
            assert!(pawn.attackable_path(sq(5, 2), empty).is_err());
        }

        #[test]
        fn restore_infers_state_from_rank() {
            let home = Piece::restore(PieceKind::Pawn, Color::Black, sq(0, 6));
            let advanced = Piece::restore(PieceKind::Pawn, Color::Black, sq(0, 5));
            assert_eq!(home.role(), Role::Pawn(PawnState::HasNotMoved));
            assert_eq!(advanced.role(), Role::Pawn(PawnState::HasMoved));
        }
    }

    #[test]
    fn knight_jumps() {
        let knight = Piece::new(PieceKind::Knight, Color::White, sq(1, 0));
        let crowded = |_: Coordinate| Some(Color::White);
        assert!(knight.movable_path(sq(2, 2), crowded).is_ok());
        assert!(knight.movable_path(sq(0, 2), crowded).is_ok());
        assert!(knight.movable_path(sq(3, 1), crowded).is_ok());
        assert!(knight.movable_path(sq(1, 2), crowded).is_err());
    }

    #[test]
    fn attack_matches_movement_for_non_pawns() {
        for kind in [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            let piece = Piece::new(kind, Color::Black, sq(3, 3));
            assert_eq!(piece.movement_patterns(), piece.attack_patterns());
            assert!(!piece.is_pawn());
        }
    }

    #[test]
    fn bishop_only_diagonal() {
        let bishop = Piece::new(PieceKind::Bishop, Color::White, sq(2, 0));
        assert!(bishop.movable_path(sq(7, 5), empty).is_ok());
        assert!(bishop.movable_path(sq(2, 5), empty).is_err());
    }

    #[test]
    fn nominal_scores() {
        let at = sq(0, 0);
        assert_eq!(Piece::new(PieceKind::Queen, Color::White, at).score(), Score::new(9.0));
        assert_eq!(Piece::new(PieceKind::Knight, Color::White, at).score(), Score::new(2.5));
        assert_eq!(Piece::new(PieceKind::King, Color::White, at).score(), Score::new(0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Piece::new(PieceKind::Rook, Color::White, sq(0, 0)).to_string(), "R");
        assert_eq!(Piece::new(PieceKind::Rook, Color::Black, sq(0, 7)).to_string(), "r");
    }
}
