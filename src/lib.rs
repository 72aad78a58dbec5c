// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `rulebook` is a turn-based chess rules engine.
//!
//! Given a board and a requested move, `rulebook` decides whether the move is legal, which squares it crosses,
//! whether it captures, and whether it ends the game. Storage and presentation of games live outside the engine and
//! talk to it through [`Snapshot`]s.

pub mod board;
pub mod core;
pub mod game;
pub mod piece;
pub mod score;
pub mod snapshot;

pub use board::Board;
pub use game::{Game, GameStatus, MoveError, MoveOutcome};
pub use score::{Outcome, Score};
pub use snapshot::Snapshot;
