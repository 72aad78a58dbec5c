// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use rulebook::{
    core::{Color, Coordinate},
    Game, MoveOutcome, Snapshot,
};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Plays a game of chess from commands read on standard input.
///
/// Commands: `move <from-file> <from-rank> <to-file> <to-rank>`, `board`, `status`, `quit`.
#[derive(Debug, StructOpt)]
struct Options {
    /// Snapshot file to resume a game from.
    #[structopt(long)]
    load: Option<PathBuf>,
    /// Snapshot file to write after every accepted move.
    #[structopt(long)]
    save: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let opts = Options::from_args();
    let mut game = match opts.load {
        Some(ref path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            Snapshot::from_json(json)?.restore()?
        }
        None => Game::new(),
    };

    print!("{}", game.board());
    println!("turn: {}", game.turn());
    let stdin = io::stdin();
    for maybe_line in stdin.lock().lines() {
        let line = maybe_line?;
        let components: Vec<_> = line.split_whitespace().collect();
        let (&command, arguments) = components.split_first().unwrap_or((&"", &[]));
        match (command, arguments) {
            ("move", args) => handle_move(&mut game, args, opts.save.as_deref())?,
            ("board", []) => print!("{}", game.board()),
            ("status", []) => handle_status(&game),
            ("quit", []) => break,
            ("", []) => {}
            _ => println!("unrecognized command: {} {:?}", command, arguments),
        }
    }

    Ok(())
}

fn handle_move(game: &mut Game, args: &[&str], save: Option<&Path>) -> anyhow::Result<()> {
    if game.is_over() {
        println!("the game is over");
        return Ok(());
    }

    let (start, end) = match parse_move(args) {
        Ok(squares) => squares,
        Err(err) => {
            println!("invalid move: {}", err);
            return Ok(());
        }
    };

    match game.make_move(start, end) {
        Ok(MoveOutcome::Continue { next_turn, .. }) => {
            print!("{}", game.board());
            println!("turn: {}", next_turn);
        }
        Ok(MoveOutcome::GameOver {
            winner,
            white_score,
            black_score,
        }) => {
            print!("{}", game.board());
            println!("game over, {} wins", winner);
            println!("{}: {}", Color::White, white_score);
            println!("{}: {}", Color::Black, black_score);
        }
        Err(err) => {
            println!("illegal move: {}", err);
            return Ok(());
        }
    }

    if let Some(path) = save {
        let json = game.snapshot().to_json()?;
        fs::write(path, json).with_context(|| format!("writing snapshot {}", path.display()))?;
    }

    Ok(())
}

fn parse_move(args: &[&str]) -> anyhow::Result<(Coordinate, Coordinate)> {
    let axes = args
        .iter()
        .map(|arg| arg.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()?;
    match axes[..] {
        [from_file, from_rank, to_file, to_rank] => Ok((
            Coordinate::new(from_file, from_rank)?,
            Coordinate::new(to_file, to_rank)?,
        )),
        _ => Err(anyhow!("expected four coordinates, got {}", axes.len())),
    }
}

fn handle_status(game: &Game) {
    match game.find_winner() {
        Some(winner) => println!("winner: {}", winner),
        None => println!("winner: none"),
    }
    println!("{}: {}", Color::White, game.player_score(Color::White));
    println!("{}: {}", Color::Black, game.player_score(Color::Black));
    println!("turn: {}", game.turn());
}
