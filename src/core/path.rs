// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Path resolution: turning a piece's movement patterns, a start square and an end square into the list of squares
//! the piece crosses on the way, or a rejection if no pattern gets there.

use thiserror::Error;

use crate::core::{
    pattern::MovementPattern,
    types::{Color, Coordinate},
};

/// No movement pattern reaches the requested square, or every pattern that would is blocked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no path found from {start} to {end}")]
pub struct NoPathFound {
    pub start: Coordinate,
    pub end: Coordinate,
}

/// The squares a move passes through, in order, excluding both the start and the destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path(Vec<Coordinate>);

impl Path {
    pub fn new() -> Path {
        Path(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, square: Coordinate) -> bool {
        self.0.contains(&square)
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }

    fn push(&mut self, square: Coordinate) {
        self.0.push(square);
    }

    fn last(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    fn remove_end(&mut self) {
        self.0.pop();
    }
}

/// Resolves the path a piece at `start` takes to reach `end` using any of `patterns`.
///
/// Each pattern is walked square by square from `start`, up to the smaller of its maximum distance and the distance
/// that does not overshoot `end`. A walk stops early at the first occupied square short of `end`; jumps skip that
/// check. The first walk that lands on `end` wins, and `end` is trimmed from the returned path. At most one pattern
/// of a piece can land on a given square, so pattern order does not change the outcome.
pub fn resolve_path<F>(
    patterns: &[MovementPattern],
    start: Coordinate,
    end: Coordinate,
    occupancy: F,
) -> Result<Path, NoPathFound>
where
    F: Fn(Coordinate) -> Option<Color>,
{
    for pattern in patterns {
        let mut path = walk(*pattern, start, end, &occupancy);
        if path.last() == Some(end) {
            path.remove_end();
            return Ok(path);
        }
    }

    Err(NoPathFound { start, end })
}

fn walk<F>(pattern: MovementPattern, start: Coordinate, end: Coordinate, occupancy: &F) -> Path
where
    F: Fn(Coordinate) -> Option<Color>,
{
    let direction = pattern.direction;
    let distance = pattern
        .max_distance
        .min(start.max_distance_to(direction, end));
    let mut path = Path::new();
    let mut current = start;
    for _ in 0..distance {
        current = match current.towards(direction) {
            Ok(next) => next,
            Err(_) => break,
        };

        path.push(current);
        if current != end && !direction.is_jump() && occupancy(current).is_some() {
            break;
        }
    }

    path
}
