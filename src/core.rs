// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains the value types and geometry used pervasively throughout `rulebook`: squares, directions,
//! movement patterns and path resolution.

mod path;
mod pattern;
mod types;

pub use path::{resolve_path, NoPathFound, Path};
pub use pattern::{patterns, MovementPattern, MAX_SLIDE};
pub use types::{colors, Color, Coordinate, CoordinateError, Direction, PieceKind, BOARD_SIZE};
