// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, iter, ops};

const ROUNDING_FACTOR: f64 = 10.0;

/// A material score, kept rounded to one decimal place.
///
/// Rounding happens once, on construction: the value is scaled by ten, rounded half away from zero, and scaled back.
/// Every arithmetic operation produces a freshly constructed (and so freshly rounded) `Score`, which means two scores
/// compare equal exactly when their rounded values do.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Score(f64);

/// The result of comparing one side's score against another's.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Score {
    pub fn new(value: f64) -> Score {
        Score(round(value))
    }

    pub fn zero() -> Score {
        Score(0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn compare(self, other: Score) -> Outcome {
        if self.0 > other.0 {
            Outcome::Win
        } else if self.0 < other.0 {
            Outcome::Lose
        } else {
            Outcome::Draw
        }
    }
}

fn round(value: f64) -> f64 {
    (value * ROUNDING_FACTOR).round() / ROUNDING_FACTOR
}

impl ops::Add<Score> for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Self::Output {
        Score::new(self.0 + rhs.0)
    }
}

impl ops::AddAssign<Score> for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl iter::Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::zero(), |acc, score| acc + score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
