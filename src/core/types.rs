// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of files (and ranks) on the board.
pub const BOARD_SIZE: i32 = 8;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("coordinate out of range: ({0}, {1})")]
    InvalidCoordinate(i32, i32),
    #[error("moving {1:?} from {0} leaves the board")]
    OutOfBounds(Coordinate, Direction),
}

/// A square on the chessboard, addressed by file (x) and rank (y), both in `0..8`. Coordinates can only be
/// constructed inside the board, so every `Coordinate` value names a real square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Creates a new coordinate, failing if either axis falls outside the board.
    pub fn new(file: i32, rank: i32) -> Result<Coordinate, CoordinateError> {
        if !in_bounds(file) || !in_bounds(rank) {
            return Err(CoordinateError::InvalidCoordinate(file, rank));
        }

        Ok(Coordinate {
            file: file as u8,
            rank: rank as u8,
        })
    }

    pub const fn file(self) -> i32 {
        self.file as i32
    }

    pub const fn rank(self) -> i32 {
        self.rank as i32
    }

    /// Index of this square in a rank-major 64-element array.
    pub const fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    /// Returns the coordinate one step away in the given direction. Stepping off the edge of the board is not fatal;
    /// callers treat `OutOfBounds` as "this direction is exhausted here".
    pub fn towards(self, dir: Direction) -> Result<Coordinate, CoordinateError> {
        let (df, dr) = dir.as_vector();
        Coordinate::new(self.file() + df, self.rank() + dr)
            .map_err(|_| CoordinateError::OutOfBounds(self, dir))
    }

    /// The number of steps that can be taken in `dir` from this square without moving past `target` on any axis the
    /// direction moves along, and without leaving the board.
    ///
    /// If `target` lies exactly on the ray, this is the number of steps needed to land on it. If it does not, the
    /// result still caps the walk so that a sliding piece never overshoots the requested destination.
    pub fn max_distance_to(self, dir: Direction, target: Coordinate) -> u8 {
        let (df, dr) = dir.as_vector();
        let toward_target = axis_limit(target.file() - self.file(), df)
            .min(axis_limit(target.rank() - self.rank(), dr));
        let toward_edge = edge_limit(self.file(), df).min(edge_limit(self.rank(), dr));
        toward_target.min(toward_edge) as u8
    }

    /// Iterates over all 64 squares in rank-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Coordinate {
            file: (i % BOARD_SIZE) as u8,
            rank: (i / BOARD_SIZE) as u8,
        })
    }
}

fn in_bounds(axis: i32) -> bool {
    (0..BOARD_SIZE).contains(&axis)
}

// Steps of size `step` that fit in `delta` without passing it. Axes the direction does not move along impose no
// limit.
fn axis_limit(delta: i32, step: i32) -> i32 {
    if step == 0 {
        i32::MAX
    } else if delta.signum() == step.signum() {
        delta / step
    } else {
        0
    }
}

fn edge_limit(pos: i32, step: i32) -> i32 {
    match step {
        0 => i32::MAX,
        s if s > 0 => (BOARD_SIZE - 1 - pos) / s,
        s => pos / -s,
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((file, rank): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinate::new(file, rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// A direction a piece can travel in. The first eight are unit vectors; the last eight are the knight's L-shaped
/// jumps, which are never walked square by square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    NorthNorthEast,
    EastNorthEast,
    EastSouthEast,
    SouthSouthEast,
    SouthSouthWest,
    WestSouthWest,
    WestNorthWest,
    NorthNorthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    pub const UNIT: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const KNIGHT: [Direction; 8] = [
        Direction::NorthNorthEast,
        Direction::EastNorthEast,
        Direction::EastSouthEast,
        Direction::SouthSouthEast,
        Direction::SouthSouthWest,
        Direction::WestSouthWest,
        Direction::WestNorthWest,
        Direction::NorthNorthWest,
    ];

    /// The (file, rank) offset of a single step in this direction.
    pub const fn as_vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
            Direction::NorthNorthEast => (1, 2),
            Direction::EastNorthEast => (2, 1),
            Direction::EastSouthEast => (2, -1),
            Direction::SouthSouthEast => (1, -2),
            Direction::SouthSouthWest => (-1, -2),
            Direction::WestSouthWest => (-2, -1),
            Direction::WestNorthWest => (-2, 1),
            Direction::NorthNorthWest => (-1, 2),
        }
    }

    /// Jumps land directly on their target and never probe the squares in between.
    pub const fn is_jump(self) -> bool {
        let (df, dr) = self.as_vector();
        df.abs() + dr.abs() == 3
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    #[display(fmt = "WHITE")]
    White,
    #[display(fmt = "BLACK")]
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The direction this color's pawns advance in.
    pub fn forward(self) -> Direction {
        match self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// The rank this color's pawns start the game on.
    pub fn pawn_rank(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => BOARD_SIZE - 2,
        }
    }

    /// The rank this color's back-row pieces start the game on.
    pub fn back_rank(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        write!(f, "{}", c)
    }
}

pub fn colors() -> ::std::vec::IntoIter<Color> {
    vec![Color::White, Color::Black].into_iter()
}
