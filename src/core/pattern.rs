// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::types::Direction;

/// The furthest a sliding piece can travel in one move.
pub const MAX_SLIDE: u8 = 7;

/// One geometric way a piece may travel: a direction and the maximum number of steps it may take along it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MovementPattern {
    pub direction: Direction,
    pub max_distance: u8,
}

impl MovementPattern {
    pub const fn new(direction: Direction, max_distance: u8) -> MovementPattern {
        MovementPattern {
            direction,
            max_distance,
        }
    }

    pub const fn step(direction: Direction) -> MovementPattern {
        MovementPattern::new(direction, 1)
    }
}

/// Builds one pattern per direction, all sharing the same maximum distance.
pub fn patterns(directions: &[Direction], max_distance: u8) -> Vec<MovementPattern> {
    directions
        .iter()
        .map(|&dir| MovementPattern::new(dir, max_distance))
        .collect()
}
